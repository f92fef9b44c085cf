pub mod sources;

use std::path::PathBuf;
use std::time::Duration;

use streamlytics_model::Theme;
use url::Url;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_GENRE_LIMIT, DEFAULT_LOG_FILTER,
    DEFAULT_POSTER_SIZE, DEFAULT_RECENT_LIMIT, DEFAULT_REQUEST_TIMEOUT_SECS,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
    pub metadata: ConfigMetadata,
}

/// Statistics API connection settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: Url,
    pub request_timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        let base_url = Url::parse(DEFAULT_API_BASE_URL)
            .expect("default API base URL is a valid URL");
        Self::new(base_url)
    }
}

/// Presentation knobs for the chart views.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub recent_limit: usize,
    pub genre_limit: usize,
    pub default_theme: Theme,
    pub poster_size: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            genre_limit: DEFAULT_GENRE_LIMIT,
            default_theme: Theme::default(),
            poster_size: DEFAULT_POSTER_SIZE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
