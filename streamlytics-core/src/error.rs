use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("malformed response from {url}: {message}")]
    MalformedData { url: String, message: String },

    #[error("view was torn down before its data arrived")]
    Cancelled,

    #[error(transparent)]
    Config(#[from] streamlytics_config::ConfigLoadError),
}

impl CoreError {
    /// Network failure or non-success status.
    pub fn is_transport(&self) -> bool {
        matches!(self, CoreError::Transport { .. } | CoreError::Status { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, CoreError::MalformedData { .. })
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CoreError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
