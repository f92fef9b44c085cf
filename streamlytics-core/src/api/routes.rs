//! Statistics API route templates, relative to the configured base URL.

use streamlytics_model::{Dimension, MediaKind};

pub mod catalog {
    pub const COLLECTION: &str = "/{kind}";
    pub const ITEM: &str = "/{kind}/{tmdb_id}";
}

pub mod stats {
    pub const DISTRIBUTION: &str = "/stats/distribution/{kind}/{dimension}";
    pub const COUNTRY_RATINGS: &str = "/stats/ratings/{kind}/countries";
}

pub fn contents(kind: MediaKind) -> String {
    catalog::COLLECTION.replace("{kind}", kind.as_path_segment())
}

pub fn content(kind: MediaKind, tmdb_id: i64) -> String {
    catalog::ITEM
        .replace("{kind}", kind.as_path_segment())
        .replace("{tmdb_id}", &tmdb_id.to_string())
}

pub fn distribution(kind: MediaKind, dimension: Dimension) -> String {
    stats::DISTRIBUTION
        .replace("{kind}", kind.as_path_segment())
        .replace("{dimension}", dimension.as_path_segment())
}

pub fn country_ratings(kind: MediaKind) -> String {
    stats::COUNTRY_RATINGS.replace("{kind}", kind.as_path_segment())
}
