//! Per-country rating aggregates to bar chart rows.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use streamlytics_model::{CountryRating, OrderedMap, RatingEntry};

/// Round to two decimals, halves away from zero.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One row per country, highest rounded rating first.
///
/// Ratings are not range checked. Ties keep the mapping's order.
pub fn build_ratings(data: &OrderedMap<CountryRating>) -> Vec<RatingEntry> {
    let mut rows: Vec<RatingEntry> = data
        .iter()
        .map(|(country, aggregate)| RatingEntry {
            country: country.to_string(),
            rating: round_to_hundredths(aggregate.mean),
            count: aggregate.count,
        })
        .collect();
    rows.sort_by_key(|row| Reverse(OrderedFloat(row.rating)));
    rows
}
