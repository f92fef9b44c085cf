//! Core data model definitions shared across Streamlytics crates.
#![allow(missing_docs)]

pub mod content;
pub mod error;
pub mod media_kind;
pub mod ordered_map;
pub mod prelude;
pub mod stats;
pub mod theme;
pub mod view;

// Intentionally curated re-exports for downstream consumers.
pub use content::{ContentRecord, GenreField, RatingValue, RawContentRecord};
pub use error::{ModelError, Result as ModelResult};
pub use media_kind::MediaKind;
pub use ordered_map::OrderedMap;
pub use stats::{
    CountryRating, Dimension, DistributionResponse, RatingResponse,
};
pub use theme::Theme;
pub use view::{
    ChoroplethEntry, DistributionEntry, NumericDomain, RatingEntry,
    YearlyPoint,
};
