pub mod error;

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use streamlytics_model::Theme;
use tracing::{debug, info};
use url::Url;

use crate::constants::DEFAULT_CONFIG_FILE;
use crate::models::{
    ApiConfig, Config, ConfigMetadata, DashboardConfig, LoggingConfig,
    sources::{EnvConfig, FileConfig},
};
use crate::validation::{self, ConfigWarnings};

use error::ConfigLoadError;

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Load `.env`, read the process environment, then compose.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut load = self.load_from_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Compose against an already gathered environment.
    pub fn load_from_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;

        let mut warnings = ConfigWarnings::default();
        if config_path.is_none() {
            warnings.push_with_hint(
                "No streamlytics.toml detected; using environment variables and defaults",
                "Set STREAMLYTICS_CONFIG to point at a configuration file",
            );
        }

        let config = compose_config(file_config.unwrap_or_default(), env, config_path)?;
        warnings.extend(validation::apply_guard_rails(&config)?);

        info!(
            base_url = %config.api.base_url,
            timeout_secs = config.api.request_timeout.as_secs(),
            "configuration loaded"
        );

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let (path, explicit) = match (&self.options.config_path, &env.config_path)
        {
            (Some(path), _) | (None, Some(path)) => (path.clone(), true),
            (None, None) => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            debug!(path = %path.display(), "no configuration file");
            return Ok((None, None));
        }

        let file_config = read_file_config(&path)?;
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge file and environment values; environment wins.
pub fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    config_path: Option<PathBuf>,
) -> Result<Config, ConfigLoadError> {
    let defaults = Config::default();
    let FileConfig {
        api: file_api,
        dashboard: file_dashboard,
        logging: file_logging,
    } = file;

    let base_url = match env.api_base_url.or(file_api.base_url) {
        Some(raw) => parse_base_url(&raw)?,
        None => defaults.api.base_url,
    };

    let request_timeout = match (env.request_timeout_secs, file_api.request_timeout)
    {
        (Some(secs), _) => Duration::from_secs(parse_number(
            "STREAMLYTICS_REQUEST_TIMEOUT_SECS",
            &secs,
        )?),
        (None, Some(raw)) => humantime::parse_duration(raw.trim()).map_err(
            |source| ConfigLoadError::InvalidDuration {
                field: "api.request_timeout",
                value: raw.clone(),
                source,
            },
        )?,
        (None, None) => defaults.api.request_timeout,
    };

    let recent_limit = match env.recent_limit {
        Some(raw) => parse_number("STREAMLYTICS_RECENT_LIMIT", &raw)? as usize,
        None => file_dashboard
            .recent_limit
            .unwrap_or(defaults.dashboard.recent_limit),
    };

    let genre_limit = match env.genre_limit {
        Some(raw) => parse_number("STREAMLYTICS_GENRE_LIMIT", &raw)? as usize,
        None => file_dashboard
            .genre_limit
            .unwrap_or(defaults.dashboard.genre_limit),
    };

    let default_theme = match env.theme.or(file_dashboard.theme) {
        Some(raw) => raw
            .parse::<Theme>()
            .map_err(ConfigLoadError::InvalidTheme)?,
        None => defaults.dashboard.default_theme,
    };

    Ok(Config {
        api: ApiConfig {
            base_url,
            request_timeout,
        },
        dashboard: DashboardConfig {
            recent_limit,
            genre_limit,
            default_theme,
            poster_size: env
                .poster_size
                .or(file_dashboard.poster_size)
                .unwrap_or(defaults.dashboard.poster_size),
        },
        logging: LoggingConfig {
            filter: env
                .log_filter
                .or(file_logging.filter)
                .unwrap_or(defaults.logging.filter),
        },
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded: false,
        },
    })
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigLoadError> {
    let url = Url::parse(raw.trim()).map_err(|source| {
        ConfigLoadError::InvalidBaseUrl {
            value: raw.to_string(),
            source,
        }
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigLoadError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<u64, ConfigLoadError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|source| ConfigLoadError::InvalidNumber {
            field,
            value: raw.to_string(),
            source,
        })
}
