use std::time::Duration;

use thiserror::Error;

use crate::models::Config;

const LONG_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error("{field} must be greater than zero")]
    ZeroLimit { field: &'static str },
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.dashboard.recent_limit == 0 {
        return Err(ConfigGuardRailError::ZeroLimit {
            field: "recent_limit",
        });
    }
    if config.dashboard.genre_limit == 0 {
        return Err(ConfigGuardRailError::ZeroLimit {
            field: "genre_limit",
        });
    }
    if config.api.request_timeout.is_zero() {
        return Err(ConfigGuardRailError::ZeroTimeout);
    }

    if config.api.request_timeout > LONG_TIMEOUT {
        warnings.push_with_hint(
            format!(
                "request timeout of {}s will keep views loading for a long time on a dead API",
                config.api.request_timeout.as_secs()
            ),
            "Lower STREAMLYTICS_REQUEST_TIMEOUT_SECS or api.request_timeout",
        );
    }

    let url = &config.api.base_url;
    if url.scheme() == "http" && !is_loopback_host(url.host_str()) {
        warnings.push_with_hint(
            format!("statistics API at {url} is not using TLS"),
            "Point STREAMLYTICS_API_BASE_URL at an https endpoint",
        );
    }

    Ok(warnings)
}

fn is_loopback_host(host: Option<&str>) -> bool {
    matches!(host, Some("localhost" | "127.0.0.1" | "[::1]" | "::1"))
}
