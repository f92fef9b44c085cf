//! Content normalizer: raw catalog rows to canonical, date-ordered records.

use std::cmp::Reverse;

use chrono::NaiveDate;
use streamlytics_model::{ContentRecord, GenreField, RawContentRecord};

/// Materialize the genre column as a list.
///
/// Comma-joined strings are split and trimmed. Lists pass through with
/// their entries trimmed. Blank entries are dropped in both shapes.
pub fn normalize_genres(field: GenreField) -> Vec<String> {
    let parts: Vec<String> = match field {
        GenreField::Joined(joined) => {
            joined.split(',').map(|part| part.trim().to_string()).collect()
        }
        GenreField::List(list) => {
            list.into_iter().map(|g| g.trim().to_string()).collect()
        }
        GenreField::Missing => Vec::new(),
    };
    parts.into_iter().filter(|g| !g.is_empty()).collect()
}

pub fn normalize_record(raw: RawContentRecord) -> ContentRecord {
    ContentRecord {
        title: raw.title,
        tmdb_id: raw.tmdb_id,
        release_date: raw.release_date,
        first_air_date: raw.first_air_date,
        rating: raw.rating,
        genres: normalize_genres(raw.genre),
        original_language: raw.original_language,
        poster_path: raw.poster_path,
    }
}

/// Stable sort, newest effective date first.
///
/// Records whose effective date is empty or unparsable sort as
/// 1970-01-01.
pub fn sort_by_effective_date(records: &mut [ContentRecord]) {
    records.sort_by_cached_key(|record| Reverse(sort_date(record)));
}

fn sort_date(record: &ContentRecord) -> NaiveDate {
    // NaiveDate's default is the Unix epoch.
    record.effective_naive_date().unwrap_or_default()
}

/// Normalize every raw row and order the result by effective date.
pub fn normalize_records(raw: Vec<RawContentRecord>) -> Vec<ContentRecord> {
    let mut records: Vec<ContentRecord> =
        raw.into_iter().map(normalize_record).collect();
    sort_by_effective_date(&mut records);
    records
}

/// First `n` records of an already ordered list.
pub fn top_n(records: &[ContentRecord], n: usize) -> &[ContentRecord] {
    &records[..n.min(records.len())]
}
