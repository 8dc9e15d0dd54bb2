use reqwest::{
    Client, ClientBuilder, Url,
    header::{ACCEPT, HeaderMap, HeaderValue, LINK},
};
use serde::{Deserialize, de::DeserializeOwned};

use crate::config::{Config, Credentials};
use crate::error::{Result, StatsError};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// One response from a paginated collection endpoint.
#[derive(Debug, Clone)]
pub struct ApiPage {
    pub url: String,
    /// Raw value of the `Link` header, if the upstream sent one.
    pub link: Option<String>,
    pub body: String,
}

impl ApiPage {
    pub fn items<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        serde_json::from_str(&self.body).map_err(|source| StatsError::Decode {
            url: self.url.clone(),
            source,
        })
    }
}

/// Anything that can fetch a page of a collection given its path below the
/// API root and a set of integer query parameters.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn get_page(&self, path: &str, query: &[(&str, u32)]) -> Result<ApiPage>;
}

#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

pub struct GitHubClient {
    client: Client,
    api_url: String,
    credentials: Option<Credentials>,
}

fn client_builder() -> ClientBuilder {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
    Client::builder().user_agent(USER_AGENT).default_headers(headers)
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        Self::from_builder(config, client_builder())
    }

    fn from_builder(config: &Config, builder: ClientBuilder) -> Result<Self> {
        let client = builder.build()?;
        if let Some(credentials) = &config.credentials {
            log::info!("Using basic auth as {}", credentials.username);
        }
        Ok(GitHubClient {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            credentials: config.credentials.clone(),
        })
    }

    fn url(&self, path: &str) -> Result<Url> {
        let raw = format!("{}/{}", self.api_url, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| StatsError::InvalidUrl(format!("{raw}: {e}")))
    }
}

impl PageSource for GitHubClient {
    async fn get_page(&self, path: &str, query: &[(&str, u32)]) -> Result<ApiPage> {
        let mut request = self.client.get(self.url(path)?).query(query);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.token));
        }
        let response = request.send().await?;
        let url = response.url().to_string();
        let status = response.status();
        let header = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
        };
        let link = header(LINK.as_str());
        let remaining = header("x-ratelimit-remaining");
        log::debug!(
            "GET {url} -> {status}, rate limit remaining: {}",
            remaining.as_deref().unwrap_or("unknown")
        );

        if !status.is_success() {
            let message = match response.json::<ApiMessage>().await {
                Ok(body) => body.message,
                Err(_) => status.canonical_reason().unwrap_or("no message").to_string(),
            };
            return Err(StatsError::Status { url, status, message });
        }

        let body = response.text().await?;
        Ok(ApiPage { url, link, body })
    }
}
