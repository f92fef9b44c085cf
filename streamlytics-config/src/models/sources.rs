use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    ENV_API_BASE_URL, ENV_CONFIG_PATH, ENV_GENRE_LIMIT, ENV_LOG_FILTER,
    ENV_POSTER_SIZE, ENV_RECENT_LIMIT, ENV_REQUEST_TIMEOUT_SECS, ENV_THEME,
};
use crate::util::non_blank;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub api: FileApiConfig,
    #[serde(default)]
    pub dashboard: FileDashboardConfig,
    #[serde(default)]
    pub logging: FileLoggingConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Human readable duration such as `"30s"` or `"1m 30s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileDashboardConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_size: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileLoggingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Environment-derived configuration values, kept raw until composition.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub api_base_url: Option<String>,
    pub request_timeout_secs: Option<String>,
    pub recent_limit: Option<String>,
    pub genre_limit: Option<String>,
    pub theme: Option<String>,
    pub poster_size: Option<String>,
    pub log_filter: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            config_path: non_blank(&lookup, ENV_CONFIG_PATH).map(PathBuf::from),
            api_base_url: non_blank(&lookup, ENV_API_BASE_URL),
            request_timeout_secs: non_blank(&lookup, ENV_REQUEST_TIMEOUT_SECS),
            recent_limit: non_blank(&lookup, ENV_RECENT_LIMIT),
            genre_limit: non_blank(&lookup, ENV_GENRE_LIMIT),
            theme: non_blank(&lookup, ENV_THEME),
            poster_size: non_blank(&lookup, ENV_POSTER_SIZE),
            log_filter: non_blank(&lookup, ENV_LOG_FILTER),
        }
    }
}
