//! Presentation-facing snapshot of the model surface.
//! Prefer importing from this module in dashboard and view code.

pub use super::content::{
    ContentRecord, GenreField, RatingValue, RawContentRecord, TMDB_IMAGE_BASE,
};
pub use super::media_kind::MediaKind;
pub use super::ordered_map::OrderedMap;
pub use super::stats::{
    CountryRating, Dimension, DistributionResponse, RatingResponse,
};
pub use super::theme::Theme;
pub use super::view::{
    ChoroplethEntry, DistributionEntry, NumericDomain, RatingEntry,
    YearlyPoint,
};
