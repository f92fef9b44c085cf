//! Catalog content records, before and after normalization.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Base URL of the TMDB image CDN that `poster_path` values are relative to.
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/";

/// Genre column as the catalog export delivers it.
///
/// Older exports store a comma-joined string, newer ones a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum GenreField {
    Joined(String),
    List(Vec<String>),
    #[default]
    Missing,
}

/// Rating exactly as the source delivered it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RatingValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingValue::Number(value) => write!(f, "{value}"),
            RatingValue::Text(text) => f.write_str(text),
            RatingValue::Missing => Ok(()),
        }
    }
}

/// One row of `GET /movies` or `GET /series`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawContentRecord {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "nullable::string")
    )]
    pub title: String,
    pub tmdb_id: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub release_date: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub first_air_date: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: RatingValue,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genre: GenreField,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "nullable::string")
    )]
    pub original_language: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "nullable::string")
    )]
    pub poster_path: String,
}

/// Canonical catalog entry consumed by the content lists.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentRecord {
    pub title: String,
    pub tmdb_id: i64,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub rating: RatingValue,
    pub genres: Vec<String>,
    pub original_language: String,
    pub poster_path: String,
}

impl ContentRecord {
    /// Release date for movies, first air date for series, or `""`.
    pub fn effective_date(&self) -> &str {
        non_empty(self.release_date.as_deref())
            .or_else(|| non_empty(self.first_air_date.as_deref()))
            .unwrap_or("")
    }

    pub fn effective_naive_date(&self) -> Option<NaiveDate> {
        parse_catalog_date(self.effective_date())
    }

    pub fn release_year(&self) -> Option<i32> {
        self.effective_naive_date().map(|date| date.year())
    }

    /// First `limit` genres joined for a subtitle line.
    pub fn display_genres(&self, limit: usize) -> String {
        self.genres
            .iter()
            .take(limit)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn language_code(&self) -> String {
        self.original_language.to_uppercase()
    }

    /// Full poster URL for a TMDB size bucket such as `w92`.
    pub fn poster_url(&self, size: &str) -> Option<String> {
        let path = self.poster_path.trim();
        if path.is_empty() {
            return None;
        }
        Some(format!("{TMDB_IMAGE_BASE}{size}{path}"))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse the date formats found in catalog exports.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, offset-less timestamps with a
/// `T` or space separator, and a bare `YYYY`.
pub fn parse_catalog_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    for format in NAIVE_TIMESTAMP_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(stamp.date());
        }
    }
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }
    None
}

#[cfg(feature = "serde")]
mod nullable {
    use serde::{Deserialize, Deserializer};

    pub fn string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<String, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }
}
