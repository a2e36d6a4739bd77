//! Property tests: every returned pair is valid, and a pair is returned exactly
//! when one exists.

use pair_sum_core::search::{DuplicatePolicy, FinderConfig, LookupKind, PairSumFinder};
use proptest::prelude::*;

fn small_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40)
}

fn any_config() -> impl Strategy<Value = FinderConfig> {
    (
        prop::sample::select(vec![LookupKind::Hash, LookupKind::Ordered]),
        prop::sample::select(vec![DuplicatePolicy::MostRecent, DuplicatePolicy::Earliest]),
    )
        .prop_map(|(lookup, duplicates)| {
            FinderConfig::v0().with_lookup(lookup).with_duplicates(duplicates)
        })
}

/// Brute-force reference: the first `second` position in scan order that
/// completes a pair, and the earlier position the given policy pairs it with.
fn expected_pair(values: &[i32], target: i32, policy: DuplicatePolicy) -> Option<(usize, usize)> {
    for second in 0..values.len() {
        let mut partners = (0..second)
            .filter(|&first| values[first] as i64 + values[second] as i64 == target as i64);
        let partner = match policy {
            DuplicatePolicy::MostRecent => partners.last(),
            DuplicatePolicy::Earliest => partners.next(),
        };
        if let Some(first) = partner {
            return Some((first, second));
        }
    }
    None
}

proptest! {
    #[test]
    fn prop_returned_pair_is_valid(values in small_values(), target in -100i32..100, config in any_config()) {
        let finder = PairSumFinder::new(config);
        if let Some(pair) = finder.find(&values, target) {
            prop_assert!(pair.first != pair.second);
            prop_assert!(pair.first < values.len() && pair.second < values.len());
            prop_assert_eq!(values[pair.first] + values[pair.second], target);
            prop_assert!(pair.verify(&values, target).is_ok());
        }
    }

    #[test]
    fn prop_pair_found_iff_one_exists(values in small_values(), target in -100i32..100) {
        let exists = (0..values.len())
            .any(|i| (i + 1..values.len()).any(|j| values[i] + values[j] == target));
        let found = PairSumFinder::default().find(&values, target);
        prop_assert_eq!(found.is_some(), exists);
    }

    #[test]
    fn prop_matches_scan_order_reference(values in small_values(), target in -100i32..100, config in any_config()) {
        let expected = expected_pair(&values, target, config.duplicates);
        let found = PairSumFinder::new(config).find(&values, target).map(|pair| pair.as_tuple());
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn prop_hash_and_ordered_lookups_agree(values in small_values(), target in -100i32..100) {
        let hash = PairSumFinder::new(FinderConfig::v0().with_lookup(LookupKind::Hash));
        let ordered = PairSumFinder::new(FinderConfig::v0().with_lookup(LookupKind::Ordered));
        prop_assert_eq!(hash.find(&values, target), ordered.find(&values, target));
    }

    #[test]
    fn prop_full_range_never_panics(values in prop::collection::vec(any::<i64>(), 0..20), target in any::<i64>()) {
        let result = PairSumFinder::default().search(&values, target);
        prop_assert!(result.search.elements_scanned <= values.len());
        if let Some(pair) = result.indices() {
            prop_assert!(pair.verify(&values, target).is_ok());
        }
    }
}
