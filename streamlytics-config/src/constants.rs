//! Defaults and environment variable names.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Items shown in a "recent content" list.
pub const DEFAULT_RECENT_LIMIT: usize = 5;
/// Slices shown in a genre pie chart.
pub const DEFAULT_GENRE_LIMIT: usize = 5;
pub const DEFAULT_POSTER_SIZE: &str = "w92";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const DEFAULT_CONFIG_FILE: &str = "streamlytics.toml";

pub const ENV_CONFIG_PATH: &str = "STREAMLYTICS_CONFIG";
pub const ENV_API_BASE_URL: &str = "STREAMLYTICS_API_BASE_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "STREAMLYTICS_REQUEST_TIMEOUT_SECS";
pub const ENV_RECENT_LIMIT: &str = "STREAMLYTICS_RECENT_LIMIT";
pub const ENV_GENRE_LIMIT: &str = "STREAMLYTICS_GENRE_LIMIT";
pub const ENV_THEME: &str = "STREAMLYTICS_THEME";
pub const ENV_POSTER_SIZE: &str = "STREAMLYTICS_POSTER_SIZE";
pub const ENV_LOG_FILTER: &str = "STREAMLYTICS_LOG";
