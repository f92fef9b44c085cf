//! Typed statistics endpoints behind a trait so views can run against stubs.

use async_trait::async_trait;
use streamlytics_model::{
    Dimension, DistributionResponse, MediaKind, RatingResponse,
    RawContentRecord,
};

use super::{ApiClient, routes};
use crate::error::Result;

#[async_trait]
pub trait StatsApi: Send + Sync {
    /// `GET /{kind}`
    async fn fetch_contents(
        &self,
        kind: MediaKind,
    ) -> Result<Vec<RawContentRecord>>;

    /// `GET /{kind}/{tmdb_id}`
    async fn fetch_content(
        &self,
        kind: MediaKind,
        tmdb_id: i64,
    ) -> Result<RawContentRecord>;

    /// `GET /stats/distribution/{kind}/{dimension}`
    async fn fetch_distribution(
        &self,
        kind: MediaKind,
        dimension: Dimension,
    ) -> Result<DistributionResponse>;

    /// `GET /stats/ratings/{kind}/countries`
    async fn fetch_country_ratings(
        &self,
        kind: MediaKind,
    ) -> Result<RatingResponse>;
}

#[async_trait]
impl StatsApi for ApiClient {
    async fn fetch_contents(
        &self,
        kind: MediaKind,
    ) -> Result<Vec<RawContentRecord>> {
        self.get_json(&routes::contents(kind)).await
    }

    async fn fetch_content(
        &self,
        kind: MediaKind,
        tmdb_id: i64,
    ) -> Result<RawContentRecord> {
        self.get_json(&routes::content(kind, tmdb_id)).await
    }

    async fn fetch_distribution(
        &self,
        kind: MediaKind,
        dimension: Dimension,
    ) -> Result<DistributionResponse> {
        self.get_json(&routes::distribution(kind, dimension)).await
    }

    async fn fetch_country_ratings(
        &self,
        kind: MediaKind,
    ) -> Result<RatingResponse> {
        self.get_json(&routes::country_ratings(kind)).await
    }
}
