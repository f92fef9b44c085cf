//! # Streamlytics Core
//!
//! Client-side aggregation layer for the Streamlytics statistics dashboard.
//!
//! ## Overview
//!
//! - **API access**: [`ApiClient`] issues GET requests against the statistics
//!   service; [`StatsApi`] is the seam views are written against
//! - **Builders**: [`content`], [`distribution`], [`ratings`], [`yearly`] and
//!   [`domain`] turn payloads into chart-ready rows and never fail
//! - **Views**: [`views`] pairs each chart with its load state and a
//!   cancellation token
//! - **Settings**: [`UiSettings`] holds the theme shared by every chart
//!
//! ## Example
//!
//! ```no_run
//! use streamlytics_core::{ApiClient, Dashboard};
//! use streamlytics_core::config::ConfigLoader;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let loaded = ConfigLoader::new().load()?;
//! let api = ApiClient::new(&loaded.config.api)?;
//! let dashboard = Dashboard::new(&loaded.config.dashboard);
//!
//! dashboard.load_all(&api).await?;
//! let slices = dashboard.genres().select(dashboard.tab());
//! # Ok(())
//! # }
//! ```
#![allow(missing_docs)]

pub mod api;
pub mod content;
pub mod distribution;
pub mod domain;
pub mod error;
pub mod ratings;
pub mod settings;
pub mod views;
pub mod yearly;

pub use api::{ApiClient, StatsApi};
pub use error::{CoreError, Result};
pub use settings::UiSettings;
pub use views::{
    ChoroplethLayer, CountryMapView, CountryRatingsView, Dashboard,
    GenreDistributionView, LoadState, MediaPair, RatingChart,
    RecentContentView, YearlyTrendsView,
};

pub use streamlytics_config as config;
pub use streamlytics_model as model;
