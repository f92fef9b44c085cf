//! Movies and series year counts merged onto one x axis.

use std::collections::BTreeSet;

use streamlytics_model::{OrderedMap, YearlyPoint};

/// Merge both sides into points ordered by year.
///
/// Years are the union of both key sets in ascending string order. A side
/// that lacks a year, or is missing entirely, contributes zero.
pub fn build_yearly_series(
    movies: Option<&OrderedMap<u64>>,
    series: Option<&OrderedMap<u64>>,
) -> Vec<YearlyPoint> {
    let years: BTreeSet<&str> = movies
        .into_iter()
        .chain(series)
        .flat_map(|side| side.keys())
        .collect();

    let count = |side: Option<&OrderedMap<u64>>, year: &str| {
        side.and_then(|map| map.get(year)).copied().unwrap_or(0)
    };

    years
        .into_iter()
        .map(|year| YearlyPoint {
            year: year.to_string(),
            movies: count(movies, year),
            series: count(series, year),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(pairs: &[(&str, u64)]) -> OrderedMap<u64> {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn point(year: &str, movies: u64, series: u64) -> YearlyPoint {
        YearlyPoint {
            year: year.to_string(),
            movies,
            series,
        }
    }

    #[test]
    fn disjoint_years_zero_fill() {
        let movies = years(&[("2020", 5)]);
        let series = years(&[("2021", 3)]);
        assert_eq!(
            build_yearly_series(Some(&movies), Some(&series)),
            vec![point("2020", 5, 0), point("2021", 0, 3)]
        );
    }

    #[test]
    fn shared_years_merge_and_sort() {
        let movies = years(&[("2022", 9), ("2019", 4), ("2020", 1)]);
        let series = years(&[("2020", 2), ("2018", 7)]);
        assert_eq!(
            build_yearly_series(Some(&movies), Some(&series)),
            vec![
                point("2018", 0, 7),
                point("2019", 4, 0),
                point("2020", 1, 2),
                point("2022", 9, 0),
            ]
        );
    }

    #[test]
    fn missing_side_reads_as_zero() {
        let movies = years(&[("2001", 11)]);
        assert_eq!(
            build_yearly_series(Some(&movies), None),
            vec![point("2001", 11, 0)]
        );
        assert!(build_yearly_series(None, None).is_empty());
    }

    #[test]
    fn keys_are_ordered_as_strings() {
        let movies = years(&[("999", 1), ("1000", 2)]);
        let points = build_yearly_series(Some(&movies), None);
        let order: Vec<&str> = points.iter().map(|p| p.year.as_str()).collect();
        assert_eq!(order, vec!["1000", "999"]);
    }
}
