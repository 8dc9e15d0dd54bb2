use indexmap::IndexMap;
use serde::Deserialize;

use crate::client::PageSource;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub contributions: u64,
}

/// Contribution counts keyed by login, iterated in the order logins were
/// first seen. Inserting a known login replaces its count in place.
pub type ContributorTally = IndexMap<String, u64>;

/// Walk the contributors collection at `path` page by page, in API order,
/// until an empty page comes back or `max_contributors` logins are collected.
pub async fn aggregate_contributors<S: PageSource>(
    source: &S,
    path: &str,
    max_contributors: usize,
) -> Result<ContributorTally> {
    let mut tally = ContributorTally::default();
    let mut page = 1;
    while tally.len() < max_contributors {
        let response = source.get_page(path, &[("page", page)]).await?;
        let contributors: Vec<Contributor> = response.items()?;
        log::debug!("page {page} of {path}: {} contributors", contributors.len());
        if contributors.is_empty() {
            break;
        }
        for Contributor { login, contributions } in contributors {
            tally.insert(login, contributions);
            if tally.len() >= max_contributors {
                break;
            }
        }
        page += 1;
    }
    log::info!("collected {} contributors from {path}", tally.len());
    Ok(tally)
}
