//! Category -> count mappings to pie and choropleth rows.

use std::cmp::Reverse;

use streamlytics_model::{ChoroplethEntry, DistributionEntry, OrderedMap};

/// Rows ordered by count, largest first, optionally cut to `limit`.
///
/// Ties keep the mapping's order.
pub fn build_distribution(
    counts: &OrderedMap<u64>,
    limit: Option<usize>,
) -> Vec<DistributionEntry> {
    let mut entries: Vec<DistributionEntry> = counts
        .iter()
        .map(|(name, value)| DistributionEntry::new(name, *value))
        .collect();
    entries.sort_by_key(|entry| Reverse(entry.value));
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}

/// Unbounded rows for a choropleth layer.
pub fn build_choropleth(counts: &OrderedMap<u64>) -> Vec<ChoroplethEntry> {
    build_distribution(counts, None)
        .into_iter()
        .map(ChoroplethEntry::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> OrderedMap<u64> {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn names(entries: &[DistributionEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn sorts_descending_and_truncates() {
        let input = counts(&[
            ("Action", 789),
            ("Drama", 1234),
            ("Comedy", 987),
            ("Documentary", 456),
            ("Thriller", 678),
            ("Horror", 12),
        ]);
        let entries = build_distribution(&input, Some(5));
        assert_eq!(
            names(&entries),
            vec!["Drama", "Comedy", "Action", "Thriller", "Documentary"]
        );
        assert!(entries.windows(2).all(|w| w[0].value >= w[1].value));
    }

    #[test]
    fn length_is_min_of_limit_and_input() {
        let input = counts(&[("a", 1), ("b", 2)]);
        assert_eq!(build_distribution(&input, Some(5)).len(), 2);
        assert_eq!(build_distribution(&input, Some(1)).len(), 1);
        assert_eq!(build_distribution(&input, Some(0)).len(), 0);
        assert_eq!(build_distribution(&input, None).len(), 2);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let input = counts(&[("x", 3), ("y", 5), ("z", 3), ("w", 5)]);
        let entries = build_distribution(&input, None);
        assert_eq!(names(&entries), vec!["y", "w", "x", "z"]);

        // Feeding sorted output back in leaves it unchanged.
        let again = build_distribution(
            &entries.iter().map(|e| (e.name.clone(), e.value)).collect(),
            None,
        );
        assert_eq!(again, entries);
    }

    #[test]
    fn empty_mapping_is_empty_output() {
        assert!(build_distribution(&OrderedMap::new(), Some(5)).is_empty());
        assert!(build_choropleth(&OrderedMap::new()).is_empty());
    }

    #[test]
    fn choropleth_keeps_every_country() {
        let input = counts(&[("US", 40), ("FR", 55), ("JP", 7), ("KR", 9)]);
        let layer = build_choropleth(&input);
        let ids: Vec<&str> = layer.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["FR", "US", "KR", "JP"]);
    }
}
