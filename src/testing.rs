use std::{cell::RefCell, collections::HashMap};

use serde_json::Value;

use crate::client::{ApiPage, PageSource};
use crate::error::{Result, StatsError};

/// In-memory stand-in for the API, keyed by path and `page` parameter.
/// Unknown pages answer with an empty array and no `Link` header.
#[derive(Default)]
pub struct FakeSource {
    pages: HashMap<(String, u32), (Option<String>, Value)>,
    failures: HashMap<String, u16>,
    pub requests: RefCell<Vec<(String, Vec<(String, u32)>)>>,
}

impl FakeSource {
    pub fn page(mut self, path: &str, page: u32, link: Option<&str>, body: Value) -> Self {
        self.pages
            .insert((path.to_string(), page), (link.map(str::to_owned), body));
        self
    }

    pub fn failing(mut self, path: &str, status: u16) -> Self {
        self.failures.insert(path.to_string(), status);
        self
    }

    pub fn requested_pages(&self, path: &str) -> Vec<u32> {
        self.requests
            .borrow()
            .iter()
            .filter(|(p, _)| p == path)
            .filter_map(|(_, query)| query.iter().find(|(k, _)| k == "page").map(|(_, v)| *v))
            .collect()
    }
}

impl PageSource for FakeSource {
    async fn get_page(&self, path: &str, query: &[(&str, u32)]) -> Result<ApiPage> {
        self.requests.borrow_mut().push((
            path.to_string(),
            query.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        ));
        let url = format!("https://api.test{path}");
        if let Some(&status) = self.failures.get(path) {
            return Err(StatsError::Status {
                url,
                status: reqwest::StatusCode::from_u16(status).unwrap(),
                message: "fake failure".into(),
            });
        }
        let page = query.iter().find(|(k, _)| *k == "page").map_or(1, |(_, v)| *v);
        let (link, body) = self
            .pages
            .get(&(path.to_string(), page))
            .cloned()
            .unwrap_or((None, Value::Array(vec![])));
        Ok(ApiPage { url, link, body: body.to_string() })
    }
}
