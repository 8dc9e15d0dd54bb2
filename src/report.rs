use std::fmt::{self, Display};

use colored::Colorize;

use crate::contributors::ContributorTally;
use crate::error::{Result, StatsError};

const NAME_HEADER: &str = "Contributor";
const COMMITS_WIDTH: usize = 15;
// " # commits" column, plus " % cmt % tot"
const RULE_EXTRA: usize = 1 + COMMITS_WIDTH + 12;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub contributor: String,
    pub commits: u64,
    /// Share of the repository's commits made by this contributor.
    pub percent: f64,
    /// Share made by this contributor and everyone listed above them.
    pub cumulative: f64,
}

/// Per-contributor commit table, rows in the order the API listed them.
#[derive(Debug, Clone)]
pub struct ContributorReport {
    pub total_commits: u64,
    pub rows: Vec<ReportRow>,
    name_width: usize,
}

impl ContributorReport {
    pub fn new(repository: &str, total_commits: u64, tally: &ContributorTally) -> Result<Self> {
        if total_commits == 0 {
            return Err(StatsError::NoCommits { repository: repository.to_string() });
        }
        let total = total_commits as f64;
        let mut running_total = 0;
        let rows = tally
            .iter()
            .map(|(login, &commits)| {
                let row = ReportRow {
                    contributor: login.clone(),
                    commits,
                    percent: commits as f64 / total * 100.0,
                    cumulative: (running_total + commits) as f64 / total * 100.0,
                };
                running_total += commits;
                row
            })
            .collect();
        let name_width = tally
            .keys()
            .map(|login| login.chars().count())
            .chain([NAME_HEADER.len()])
            .max()
            .unwrap_or(NAME_HEADER.len());
        Ok(ContributorReport { total_commits, rows, name_width })
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, row: &ReportRow) -> fmt::Result {
        writeln!(
            f,
            "{:<width$} {:>commits$} {} {}",
            row.contributor,
            row.commits,
            Percent(row.percent),
            Percent(row.cumulative),
            width = self.name_width,
            commits = COMMITS_WIDTH
        )
    }
}

/// One-decimal percentage with a leading blank where a sign would go.
struct Percent(f64);

impl Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " {:>4.1}", self.0)
    }
}

impl Display for ContributorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", format!("Total commits: {}", self.total_commits).bold())?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<width$} {:<commits$} % cmt % tot",
            NAME_HEADER,
            "# commits",
            width = self.name_width,
            commits = COMMITS_WIDTH
        )?;
        writeln!(f, "{}", "-".repeat(self.name_width + RULE_EXTRA))?;
        for row in &self.rows {
            self.write_row(f, row)?;
        }
        Ok(())
    }
}
