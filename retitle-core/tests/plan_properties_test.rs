// Property tests for batch planning over arbitrary directory listings

use proptest::prelude::*;
use retitle_core::{plan_renames, RESERVED_NAMES};
use std::collections::{BTreeMap, HashSet};

fn entry_name() -> impl Strategy<Value = String> {
    prop_oneof![
        r"(2023011[0-9][-_ ]{0,2})?[a-zA-Z]{1,6}([ _-][a-zA-Z]{1,6}){0,2}",
        r"[A-Z][a-z]{0,5}(_[A-Z][a-z]{0,5}){0,2}",
        r"[a-z!&., -]{1,8}",
        Just(".git".to_string()),
        Just(".DS_Store".to_string()),
    ]
}

/// A sorted, de-duplicated listing with a directory flag per entry.
fn listing() -> impl Strategy<Value = BTreeMap<String, bool>> {
    prop::collection::btree_map(entry_name(), any::<bool>(), 0..16)
}

proptest! {
    #[test]
    fn plan_respects_batch_invariants(listing in listing()) {
        let names: Vec<&str> = listing.keys().map(String::as_str).collect();
        let plan = plan_renames(&names, |name| listing[name], RESERVED_NAMES);

        let originals: HashSet<&str> = names.iter().copied().collect();
        let mut targets = HashSet::new();

        for rename in &plan.renames {
            prop_assert_ne!(&rename.from, &rename.to);
            prop_assert!(!originals.contains(rename.to.as_str()));
            prop_assert!(targets.insert(rename.to.as_str()), "duplicate target {}", rename.to);
            prop_assert!(listing[&rename.from]);
            prop_assert!(!RESERVED_NAMES.iter().any(|reserved| *reserved == rename.from));
        }
    }

    #[test]
    fn plan_keeps_listing_order(listing in listing()) {
        let names: Vec<&str> = listing.keys().map(String::as_str).collect();
        let plan = plan_renames(&names, |name| listing[name], RESERVED_NAMES);

        let froms: Vec<&str> = plan.renames.iter().map(|rename| rename.from.as_str()).collect();
        let mut sorted = froms.clone();
        sorted.sort_unstable();
        prop_assert_eq!(froms, sorted);
    }
}
