//! Property tests for folder ordering.

use std::cmp::Ordering;
use std::fs;

use proptest::prelude::*;

use slidepick::collate::{sort_names, FolderCollator};
use slidepick::list_presentations;

fn folder_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _.\\-]{1,12}")
        .unwrap()
        .prop_filter("valid folder name", |s| {
            let trimmed = s.trim();
            !trimmed.is_empty() && trimmed != "." && trimmed != ".." && s == trimmed
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Sorting is independent of the input permutation.
    #[test]
    fn property_sort_ignores_input_order(
        names in proptest::collection::vec(folder_name(), 1..=10),
        seed in any::<u64>(),
    ) {
        let mut forward = names.clone();
        let mut shuffled = names;
        // Deterministic rotation-and-reverse permutation derived from the seed
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        if seed % 2 == 0 {
            shuffled.reverse();
        }

        sort_names(&mut forward).unwrap();
        sort_names(&mut shuffled).unwrap();
        prop_assert_eq!(forward, shuffled);
    }

    /// PROPERTY: The comparator is a total order consistent with equality.
    #[test]
    fn property_comparator_is_antisymmetric(a in folder_name(), b in folder_name()) {
        let collator = FolderCollator::new().unwrap();
        prop_assert_eq!(collator.compare(&a, &b), collator.compare(&b, &a).reverse());
        prop_assert_eq!(collator.compare(&a, &b) == Ordering::Equal, a == b);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 24,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Listing a real directory yields every folder, sorted.
    #[test]
    fn property_listing_is_sorted_and_complete(
        names in proptest::collection::hash_set(
            proptest::string::string_regex("[a-z0-9\\-]{1,10}").unwrap(),
            1..=8,
        ),
    ) {
        let dir = tempfile::tempdir().unwrap();
        for name in &names {
            fs::create_dir(dir.path().join(name)).unwrap();
        }

        let listed: Vec<String> = list_presentations(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        let mut expected: Vec<String> = names.into_iter().collect();
        sort_names(&mut expected).unwrap();
        prop_assert_eq!(listed, expected);
    }
}
