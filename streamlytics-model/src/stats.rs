//! Wire shapes of the pre-aggregated statistics endpoints.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;
use crate::ordered_map::OrderedMap;

/// Aggregation axis of a distribution endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dimension {
    Genres,
    Countries,
    Yearly,
}

impl Dimension {
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            Dimension::Genres => "genres",
            Dimension::Countries => "countries",
            Dimension::Yearly => "yearly",
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_path_segment())
    }
}

impl FromStr for Dimension {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "genres" => Ok(Dimension::Genres),
            "countries" => Ok(Dimension::Countries),
            "yearly" => Ok(Dimension::Yearly),
            other => Err(ModelError::UnknownDimension(other.to_string())),
        }
    }
}

/// `GET /stats/distribution/{kind}/{dimension}`
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionResponse {
    /// Category to item count, in server order.
    pub data: OrderedMap<u64>,
    /// Number of catalog items the distribution was computed over.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total: u64,
    /// Number of distinct categories.
    #[cfg_attr(feature = "serde", serde(default))]
    pub count: u64,
}

/// Per-country rating aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountryRating {
    pub mean: f64,
    pub count: u64,
}

/// `GET /stats/ratings/{kind}/countries`
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatingResponse {
    pub data: OrderedMap<CountryRating>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_ratings: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub average_rating: f64,
}
