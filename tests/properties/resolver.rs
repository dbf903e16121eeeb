//! Property tests for path resolution.

use proptest::prelude::*;

use cascader::{resolve, resolve_refs};

use crate::strategies::{arb_choices, arb_tree, walk};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A path that matches at every level resolves to one node per key.
    #[test]
    fn property_valid_path_resolves_fully(tree in arb_tree(), choices in arb_choices()) {
        let path = walk(&tree, &choices);
        let resolved = resolve(&tree, &path);

        prop_assert_eq!(resolved.len(), path.len());
        for (node, key) in resolved.iter().zip(&path) {
            prop_assert_eq!(&node.key, key);
        }
    }

    /// PROPERTY: Each resolved node is a child of the previous one.
    #[test]
    fn property_resolved_nodes_are_nested(tree in arb_tree(), choices in arb_choices()) {
        let path = walk(&tree, &choices);
        let resolved = resolve_refs(&tree, &path);

        for pair in resolved.windows(2) {
            prop_assert!(pair[0].children.iter().any(|c| c == pair[1]));
        }
    }

    /// PROPERTY: A single unknown key anywhere yields nothing, never a prefix.
    #[test]
    fn property_mismatch_is_all_or_nothing(
        tree in arb_tree(),
        choices in arb_choices(),
        position in 0usize..6,
    ) {
        let mut path = walk(&tree, &choices);
        let position = position.min(path.len());
        path.insert(position, "missing".to_string());

        prop_assert!(resolve(&tree, &path).is_empty());
    }

    /// PROPERTY: Resolution is deterministic.
    #[test]
    fn property_resolution_is_idempotent(
        tree in arb_tree(),
        path in proptest::collection::vec("k[0-4]", 0..5),
    ) {
        prop_assert_eq!(resolve(&tree, &path), resolve(&tree, &path));
    }
}
