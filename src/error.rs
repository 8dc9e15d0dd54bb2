use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("request to the API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{url} returned {status}: {message}")]
    Status {
        url: String,
        status: StatusCode,
        message: String,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not find last page in link header [{header}]")]
    MissingLastPage { header: String },

    #[error("expected exactly one page number in [{entry}], found {matches}")]
    PageCount { entry: String, matches: usize },

    #[error("page number [{value}] is not a valid integer")]
    InvalidPageNumber { value: String },

    #[error("{repository} reports zero commits, cannot compute percentages")]
    NoCommits { repository: String },

    #[error("incomplete credentials: {missing} is required when the other is given")]
    PartialCredentials { missing: &'static str },

    #[error("invalid API url: {0}")]
    InvalidUrl(String),
}

impl StatsError {
    /// True for errors caused by pagination metadata the upstream sent in an
    /// unexpected shape.
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            StatsError::MissingLastPage { .. }
                | StatsError::PageCount { .. }
                | StatsError::InvalidPageNumber { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
