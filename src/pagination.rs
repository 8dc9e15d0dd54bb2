//! Discovering the size of a paginated collection from its `Link` header.
//!
//! The upstream answers every collection request with a header of the form
//!
//! ```text
//! <https://api.github.com/repositories/1/commits?per_page=1&page=2>; rel="next",
//! <https://api.github.com/repositories/1/commits?per_page=1&page=3120>; rel="last"
//! ```
//!
//! Requesting the first page with `per_page=1` makes the `last` page number
//! equal to the number of items in the collection.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use serde_json::Value;

use crate::client::PageSource;
use crate::error::{Result, StatsError};

static PAGE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]page=(\d+)").expect("page pattern is valid"));

/// Extract the page number of the `rel="last"` entry of a `Link` header.
pub fn parse_last_page(header: &str) -> Result<u64> {
    let entry = header
        .split(',')
        .find(|entry| entry.contains(r#"rel="last""#))
        .ok_or_else(|| StatsError::MissingLastPage { header: header.to_string() })?;

    let value = PAGE_PARAM
        .captures_iter(entry)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .exactly_one()
        .map_err(|found| StatsError::PageCount {
            entry: entry.trim().to_string(),
            matches: found.count(),
        })?;

    value
        .parse()
        .map_err(|_| StatsError::InvalidPageNumber { value: value.to_string() })
}

/// Number of pages the collection at `path` spans with one item per page.
///
/// A response without any `Link` header means the whole collection fit on the
/// first page, so the items on it are counted instead.
pub async fn resolve_total_pages<S: PageSource>(source: &S, path: &str) -> Result<u64> {
    let first = source.get_page(path, &[("per_page", 1), ("page", 1)]).await?;
    match first.link.as_deref() {
        Some(header) => {
            let pages = parse_last_page(header)?;
            log::debug!("{} spans {pages} pages", first.url);
            Ok(pages)
        }
        None => {
            let items: Vec<Value> = first.items()?;
            log::warn!(
                "no link header from {}, counting {} item(s) on the only page",
                first.url,
                items.len()
            );
            Ok(items.len() as u64)
        }
    }
}

/// Total commit count of the repository at `repo_path` (`/repos/{org}/{repo}`).
pub async fn total_commits<S: PageSource>(source: &S, repo_path: &str) -> Result<u64> {
    resolve_total_pages(source, &format!("{repo_path}/commits")).await
}
