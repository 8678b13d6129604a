//! Accent-insensitive commune name search.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::region::{Region, RegionSet};

/// Folds a name for comparison: canonical decomposition, combining marks
/// stripped, lowercased.
///
/// Applied symmetrically to the query and every candidate, so "noum"
/// matches "Nouméa". Folding is idempotent: folding a folded string is a
/// no-op.
pub fn fold_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Finds the first commune whose folded name contains the folded query.
///
/// Substring containment, not equality or prefix. Candidates are scanned
/// in dataset insertion order and the scan short-circuits on the first
/// hit; there is no "best match" ranking. A blank query and a miss both
/// return `None`, which callers report to the user, not as an error.
pub fn resolve_by_name<'a>(query: &str, regions: &'a RegionSet) -> Option<&'a Region> {
    let needle = fold_name(query.trim());
    if needle.is_empty() {
        return None;
    }

    regions
        .iter()
        .find(|region| fold_name(region.name()).contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;

    fn named(name: &str) -> Region {
        Region::new(
            name,
            vec![vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]],
        )
    }

    #[test]
    fn test_accent_and_case_insensitive_substring() {
        let set = RegionSet::from_regions(vec![named("Bourail"), named("Nouméa")]);
        assert_eq!(resolve_by_name("noum", &set).unwrap().name(), "Nouméa");
        assert_eq!(resolve_by_name("NOUMEA", &set).unwrap().name(), "Nouméa");
        assert_eq!(resolve_by_name("nouméa", &set).unwrap().name(), "Nouméa");
    }

    #[test]
    fn test_substring_matches_anywhere() {
        let set = RegionSet::from_regions(vec![named("L'Île-des-Pins")]);
        assert_eq!(
            resolve_by_name("des-pins", &set).unwrap().name(),
            "L'Île-des-Pins"
        );
        assert_eq!(resolve_by_name("ile", &set).unwrap().name(), "L'Île-des-Pins");
    }

    #[test]
    fn test_accented_query_against_plain_candidate() {
        // Folding is symmetric: accents in the query are stripped too
        let set = RegionSet::from_regions(vec![named("Noumea")]);
        assert_eq!(resolve_by_name("nouméa", &set).unwrap().name(), "Noumea");
    }

    #[test]
    fn test_first_match_in_dataset_order_wins() {
        let set = RegionSet::from_regions(vec![
            named("Pouébo"),
            named("Pouembout"),
            named("Poum"),
        ]);
        // "pou" is a substring of all three; the earliest inserted wins
        assert_eq!(resolve_by_name("pou", &set).unwrap().name(), "Pouébo");
    }

    #[test]
    fn test_no_match_is_none() {
        let set = RegionSet::from_regions(vec![named("Nouméa")]);
        assert!(resolve_by_name("tahiti", &set).is_none());
    }

    #[test]
    fn test_blank_query_is_none() {
        let set = RegionSet::from_regions(vec![named("Nouméa")]);
        assert!(resolve_by_name("", &set).is_none());
        assert!(resolve_by_name("   ", &set).is_none());
    }

    #[test]
    fn test_empty_dataset_is_none() {
        assert!(resolve_by_name("noum", &RegionSet::new()).is_none());
    }

    #[test]
    fn test_fold_is_idempotent() {
        for name in ["Nouméa", "Pouébo", "L'Île-des-Pins", "Houaïlou", "Yaté"] {
            let once = fold_name(name);
            let twice = fold_name(&once);
            assert_eq!(once, twice, "folding {} twice changed the result", name);
        }
    }
}
