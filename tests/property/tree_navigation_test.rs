//! Property-based tests for tree navigation.
//!
//! For arbitrary generated forests, the navigator's listings must be exactly
//! the parent-match sets in ascending id order, repeated calls must agree,
//! and subtree traversal must terminate without duplicating ids.

use bookmark_tools::imported::navigator::TreeNavigator;
use bookmark_tools::imported::store::ImportedFileStore;

use proptest::prelude::*;
use rusqlite::Connection;
use std::collections::HashMap;
use tempfile::TempDir;

/// A generated forest: node `i` gets id `id_of(i)` and an optional parent
/// chosen among earlier nodes, which makes cycles impossible by
/// construction.
fn arb_forest() -> impl Strategy<Value = Vec<Option<usize>>> {
    prop::collection::vec(prop::option::of(0usize..64), 1..24).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, parent)| {
                if i == 0 {
                    None
                } else {
                    parent.map(|p| p % i)
                }
            })
            .collect()
    })
}

/// Sparse, strictly increasing ids so index order and id order agree.
fn id_of(index: usize) -> i64 {
    2 + 7 * index as i64
}

/// Writes the forest into a bookmark database and returns a navigator.
fn build_navigator(dir: &TempDir, forest: &[Option<usize>]) -> TreeNavigator {
    let path = dir.path().join("forest.sqlite");
    let conn = Connection::open(&path).expect("create db");
    conn.execute(
        "CREATE TABLE moz_bookmarks (id INTEGER PRIMARY KEY, title TEXT, parent INTEGER)",
        [],
    )
    .expect("create table");
    for (i, parent) in forest.iter().enumerate() {
        conn.execute(
            "INSERT INTO moz_bookmarks (id, title, parent) VALUES (?1, ?2, ?3)",
            rusqlite::params![id_of(i), format!("node {}", i), parent.map(id_of)],
        )
        .expect("insert node");
    }
    TreeNavigator::new(ImportedFileStore::new(dir.path()))
}

/// Model: `parent id -> sorted child ids`, `None` for roots.
fn children_model(forest: &[Option<usize>]) -> HashMap<Option<i64>, Vec<i64>> {
    let mut map: HashMap<Option<i64>, Vec<i64>> = HashMap::new();
    for (i, parent) in forest.iter().enumerate() {
        map.entry(parent.map(id_of)).or_default().push(id_of(i));
    }
    // Insertion order is already ascending by construction of id_of.
    map
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(15))]

    #[test]
    fn roots_are_exactly_the_parentless_ids_in_order(forest in arb_forest()) {
        let dir = TempDir::new().expect("tempdir");
        let nav = build_navigator(&dir, &forest);
        let model = children_model(&forest);

        let roots = nav.roots("forest.sqlite").expect("roots");
        let ids: Vec<i64> = roots.iter().map(|n| n.id).collect();
        prop_assert_eq!(&ids, model.get(&None).expect("node 0 is always a root"));

        // Idempotent against an unmutated file.
        let again = nav.roots("forest.sqlite").expect("roots again");
        prop_assert_eq!(roots, again);
    }

    #[test]
    fn children_listings_match_the_parent_column(forest in arb_forest()) {
        let dir = TempDir::new().expect("tempdir");
        let nav = build_navigator(&dir, &forest);
        let model = children_model(&forest);

        for i in 0..forest.len() {
            let id = id_of(i);
            let children = nav.children("forest.sqlite", id).expect("children");
            let ids: Vec<i64> = children.iter().map(|n| n.id).collect();
            let expected = model.get(&Some(id)).cloned().unwrap_or_default();
            prop_assert_eq!(ids, expected, "children of {}", id);
            prop_assert!(children.iter().all(|n| n.parent == Some(id)));
        }
    }

    #[test]
    fn subtree_traversal_terminates_and_matches_a_model_walk(forest in arb_forest()) {
        let dir = TempDir::new().expect("tempdir");
        let nav = build_navigator(&dir, &forest);
        let model = children_model(&forest);

        // Model BFS from the first root.
        let start = id_of(0);
        let mut expected = vec![start];
        let mut frontier = vec![start];
        while let Some(id) = frontier.pop() {
            if let Some(kids) = model.get(&Some(id)) {
                expected.extend(kids.iter().copied());
                frontier.extend(kids.iter().copied());
            }
        }
        expected.sort_unstable();

        let mut ids = nav.subtree_ids("forest.sqlite", start).expect("subtree");
        let len_before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), len_before, "no id may appear twice");
        prop_assert_eq!(ids, expected);
    }
}
