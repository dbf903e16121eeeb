//! Property tests for the selection state machine.

use proptest::prelude::*;

use cascader::{CascadeConfig, CascadeOption, CascadeSelect, Pick, Regime};

use crate::strategies::{arb_choices, arb_tree, walk};

fn seeded(tree: &[CascadeOption], value: Vec<String>, change_on_select: bool) -> CascadeSelect {
    let config = CascadeConfig {
        change_on_select,
        value: Some(value),
        ..CascadeConfig::default()
    };
    CascadeSelect::new(tree, config)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Initialization with a resolvable value settles on it.
    #[test]
    fn property_resolvable_value_settles(tree in arb_tree(), choices in arb_choices()) {
        let path = walk(&tree, &choices);
        let select = seeded(&tree, path.clone(), false);

        prop_assert_eq!(select.working_value(), path.as_slice());
        prop_assert_eq!(select.display_value(), path.as_slice());
        prop_assert_eq!(select.resolved_options().len(), path.len());
        prop_assert_eq!(select.regime(), Regime::Settled);
    }

    /// PROPERTY: Picking at depth d keeps the first d keys and ends with the pick.
    #[test]
    fn property_pick_truncates_then_appends(
        tree in arb_tree(),
        choices in arb_choices(),
        depth in 0usize..6,
        is_leaf in any::<bool>(),
    ) {
        let path = walk(&tree, &choices);
        prop_assume!(depth < path.len());
        let mut select = seeded(&tree, path.clone(), false);

        select.pick(Pick {
            key: "picked".to_string(),
            depth,
            option: CascadeOption::keyed("picked"),
            is_leaf,
        });

        let working = select.working_value();
        prop_assert_eq!(working.len(), depth + 1);
        prop_assert_eq!(&working[..depth], &path[..depth]);
        prop_assert_eq!(working[depth].as_str(), "picked");
        prop_assert_eq!(select.resolved_options().len(), depth + 1);
    }

    /// PROPERTY: A pick commits iff it is a leaf or change_on_select is set.
    #[test]
    fn property_commit_policy(
        tree in arb_tree(),
        choices in arb_choices(),
        change_on_select in any::<bool>(),
        is_leaf in any::<bool>(),
    ) {
        let path = walk(&tree, &choices);
        let mut select = seeded(&tree, path.clone(), change_on_select);
        let depth = path.len();

        let outcome = select.pick(Pick {
            key: "next".to_string(),
            depth,
            option: CascadeOption::keyed("next"),
            is_leaf,
        });

        prop_assert_eq!(outcome.committed, change_on_select || is_leaf);
        prop_assert_eq!(outcome.close_requested, is_leaf);
        if outcome.committed {
            prop_assert_eq!(select.display_value(), select.working_value());
        } else {
            prop_assert_eq!(select.display_value(), path.as_slice());
        }
    }

    /// PROPERTY: Clear always empties the selection.
    #[test]
    fn property_clear_resets_fully(tree in arb_tree(), choices in arb_choices(), depth in 0usize..4) {
        let path = walk(&tree, &choices);
        let mut select = seeded(&tree, path, false);
        select.pick(Pick {
            key: "x".to_string(),
            depth,
            option: CascadeOption::keyed("x"),
            is_leaf: false,
        });

        select.clear();

        prop_assert!(select.working_value().is_empty());
        prop_assert!(select.display_value().is_empty());
        prop_assert!(select.resolved_options().is_empty());
    }

    /// PROPERTY: A disabled selector never changes panel visibility.
    #[test]
    fn property_disabled_blocks_visibility(requests in proptest::collection::vec(any::<bool>(), 0..10)) {
        let config = CascadeConfig {
            disabled: true,
            ..CascadeConfig::default()
        };
        let mut select = CascadeSelect::new(&[], config);

        for visible in requests {
            select.set_panel_open(visible);
            prop_assert!(!select.panel_open());
        }
    }
}
