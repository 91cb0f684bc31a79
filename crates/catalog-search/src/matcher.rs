//! Matching policies over searchable collections

use crate::distance::distance;

/// Distance threshold for the ranking matcher.
///
/// Items whose name is more than this many edits away from the query are
/// dropped from the result set. Tunable, but 3 tracks the behavior the
/// search was designed around: one or two typos still match, unrelated
/// names do not.
pub const DEFAULT_MAX_DISTANCE: usize = 3;

/// A value that can expose a key for matching.
///
/// Returning `None` excludes the value from every matching policy; the
/// catalog allows items without a name and those must never match.
pub trait Searchable {
    fn search_key(&self) -> Option<&str>;
}

/// Normalize raw user input into a query: trimmed and lowercased.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Rank items by edit distance to the query.
///
/// For every item with a search key, computes the distance between the
/// query and the lowercased key, keeps items within `max_distance`, and
/// sorts ascending by distance. The sort is stable, so items at equal
/// distance stay in catalog order.
///
/// The query is expected to be normalized already (see [`normalize_query`]);
/// empty queries are the caller's problem and are filtered upstream.
pub fn rank_by_distance<T: Searchable + Clone>(
    items: &[T],
    query: &str,
    max_distance: usize,
) -> Vec<(T, usize)> {
    let mut results: Vec<(T, usize)> = items
        .iter()
        .filter_map(|item| {
            let key = item.search_key()?;
            let d = distance(query, &key.to_lowercase());
            (d <= max_distance).then(|| (item.clone(), d))
        })
        .collect();

    // Vec::sort_by_key is stable: ties keep catalog order
    results.sort_by_key(|(_, d)| *d);

    results
}

/// Substring matching variant: keep items whose lowercased key contains
/// the query as a contiguous substring. Unranked, catalog order preserved.
///
/// This is the simpler policy the viewer originally shipped with; the
/// ranking matcher above is the primary contract.
pub fn filter_substring<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| {
            item.search_key()
                .map(|key| key.to_lowercase().contains(query))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: Option<&'static str>,
    }

    impl Searchable for Item {
        fn search_key(&self) -> Option<&str> {
            self.name
        }
    }

    fn named(name: &'static str) -> Item {
        Item { name: Some(name) }
    }

    fn clothing_catalog() -> Vec<Item> {
        vec![named("Red Shirt"), named("Red Shirts"), named("Blue Pants")]
    }

    #[test]
    fn test_normalize_query_trims_and_lowercases() {
        assert_eq!(normalize_query("  Red Shirt "), "red shirt");
        assert_eq!(normalize_query("\t\n"), "");
    }

    #[test]
    fn test_rank_orders_by_distance_and_drops_over_threshold() {
        let catalog = clothing_catalog();
        let results = rank_by_distance(&catalog, "red shirt", DEFAULT_MAX_DISTANCE);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0.name, Some("Red Shirt"));
        assert_eq!(results[0].1, 0);
        assert_eq!(results[1].0.name, Some("Red Shirts"));
        assert_eq!(results[1].1, 1);
        // "Blue Pants" is well past the threshold and excluded entirely
        assert!(results.iter().all(|(item, _)| item.name != Some("Blue Pants")));
    }

    #[test]
    fn test_rank_is_case_insensitive() {
        let catalog = vec![named("RED SHIRT")];
        let results = rank_by_distance(&catalog, "red shirt", DEFAULT_MAX_DISTANCE);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1, 0);
    }

    #[test]
    fn test_rank_ties_keep_catalog_order() {
        // Both are distance 1 from the query; catalog order must survive
        let catalog = vec![named("cap"), named("car"), named("cab")];
        let results = rank_by_distance(&catalog, "cat", DEFAULT_MAX_DISTANCE);
        let names: Vec<_> = results.iter().map(|(i, _)| i.name.unwrap()).collect();
        assert_eq!(names, vec!["cap", "car", "cab"]);
    }

    #[test]
    fn test_rank_skips_items_without_name() {
        let catalog = vec![Item { name: None }, named("red shirt")];
        let results = rank_by_distance(&catalog, "red shirt", DEFAULT_MAX_DISTANCE);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0.name, Some("red shirt"));
    }

    #[test]
    fn test_rank_empty_catalog_yields_empty() {
        let catalog: Vec<Item> = Vec::new();
        assert!(rank_by_distance(&catalog, "anything", DEFAULT_MAX_DISTANCE).is_empty());
    }

    #[test]
    fn test_substring_variant_keeps_source_order() {
        let catalog = clothing_catalog();
        let results = filter_substring(&catalog, "red shirt");
        let names: Vec<_> = results.iter().map(|i| i.name.unwrap()).collect();
        assert_eq!(names, vec!["Red Shirt", "Red Shirts"]);
    }

    #[test]
    fn test_substring_variant_ignores_unnamed_items() {
        let catalog = vec![Item { name: None }, named("Red Shirt")];
        let results = filter_substring(&catalog, "red");
        assert_eq!(results.len(), 1);
    }
}
