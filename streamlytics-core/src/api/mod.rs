//! HTTP access to the statistics API.

pub mod client;
pub mod routes;
pub mod service;

pub use client::ApiClient;
pub use service::StatsApi;
