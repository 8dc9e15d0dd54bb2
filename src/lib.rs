pub mod client;
pub mod config;
pub mod contributors;
pub mod error;
pub mod pagination;
pub mod report;

#[cfg(test)]
mod testing;

use client::{GitHubClient, PageSource};
use config::Config;
use contributors::aggregate_contributors;
use error::{Result, StatsError};
use pagination::total_commits;
use report::ContributorReport;

/// Fetch totals and contributors for the configured repository from the API.
pub async fn report(config: &Config) -> Result<ContributorReport> {
    let client = GitHubClient::new(config)?;
    build_report(&client, config).await
}

pub async fn build_report<S: PageSource>(source: &S, config: &Config) -> Result<ContributorReport> {
    let repo_path = config.repo_path();
    let total = total_commits(source, &repo_path).await?;
    log::info!("{} has {total} commits", config.full_name());
    // fail before paging through contributors we could not report on
    if total == 0 {
        return Err(StatsError::NoCommits { repository: config.full_name() });
    }
    let tally = aggregate_contributors(
        source,
        &format!("{repo_path}/contributors"),
        config.max_contributors,
    )
    .await?;
    ContributorReport::new(&config.full_name(), total, &tally)
}
