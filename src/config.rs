use crate::error::{Result, StatsError};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_MAX_CONTRIBUTORS: usize = 100_000;

/// Basic-auth pair sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl Credentials {
    /// Both halves or neither: a lone username or token is rejected instead
    /// of silently falling back to anonymous requests.
    pub fn from_parts(username: Option<String>, token: Option<String>) -> Result<Option<Self>> {
        match (username, token) {
            (Some(username), Some(token)) => Ok(Some(Credentials { username, token })),
            (None, None) => Ok(None),
            (Some(_), None) => Err(StatsError::PartialCredentials { missing: "token" }),
            (None, Some(_)) => Err(StatsError::PartialCredentials { missing: "username" }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub organization: String,
    pub repository: String,
    pub max_contributors: usize,
    pub credentials: Option<Credentials>,
}

impl Config {
    pub fn new(
        organization: impl Into<String>,
        repository: impl Into<String>,
        username: Option<String>,
        token: Option<String>,
    ) -> Result<Self> {
        Ok(Config {
            api_url: DEFAULT_API_URL.to_string(),
            organization: organization.into(),
            repository: repository.into(),
            max_contributors: DEFAULT_MAX_CONTRIBUTORS,
            credentials: Credentials::from_parts(username, token)?,
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_max_contributors(mut self, max_contributors: usize) -> Self {
        self.max_contributors = max_contributors;
        self
    }

    /// Path of the repository resource, relative to the API root.
    pub fn repo_path(&self) -> String {
        format!("/repos/{}/{}", self.organization, self.repository)
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.organization, self.repository)
    }
}
