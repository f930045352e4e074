//! Property tests for asset list containment.

use proptest::prelude::*;
use std::path::PathBuf;

use wasmdist::AssetList;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9_.-]{0,11}")
        .unwrap()
        .prop_filter("not a parent reference", |s| s != "..")
}

fn relative_path() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(segment(), 1..=4).prop_map(|parts| parts.iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: lists of plain relative paths never escape the project root.
    #[test]
    fn property_relative_entries_are_contained(
        entries in proptest::collection::vec(relative_path(), 0..=8),
    ) {
        let list = AssetList::new(entries);
        prop_assert_eq!(list.first_escaping(), None);
    }

    /// PROPERTY: a `..` or absolute entry anywhere in the list is reported.
    #[test]
    fn property_escaping_entry_is_found(
        before in proptest::collection::vec(relative_path(), 0..=4),
        after in proptest::collection::vec(relative_path(), 0..=4),
        tail in relative_path(),
        absolute in any::<bool>(),
    ) {
        let bad = if absolute {
            PathBuf::from("/").join(&tail)
        } else {
            PathBuf::from("..").join(&tail)
        };

        let mut entries = before;
        entries.push(bad.clone());
        entries.extend(after);

        let list = AssetList::new(entries);
        prop_assert_eq!(list.first_escaping(), Some(bad.as_path()));
    }
}
