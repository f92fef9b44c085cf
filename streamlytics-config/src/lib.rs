//! Shared configuration library for Streamlytics.
//!
//! This crate centralizes config loading (TOML file, `.env`, process
//! environment), guard-rail validation, and tracing subscriber setup so the
//! dashboard data layer and any host application agree on one set of
//! defaults.
#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod telemetry;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use models::{
    ApiConfig, Config, ConfigMetadata, DashboardConfig, LoggingConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
