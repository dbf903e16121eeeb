//! Scenario: Drilling down level by level
//!
//! Journey: a user opens the panel, picks a branch at each level and finally
//! a leaf. The owner observes every intermediate pick.

use std::cell::RefCell;
use std::rc::Rc;

use cascader::{CascadeConfig, CascadeOption, CascadeSelect, Regime};

use crate::common::*;

/// SCENARIO: Value ["A", "A2"] then pick the leaf "A2a" under it
#[test]
fn scenario_pick_leaf_below_initial_branch() {
    let tree = letters_tree();
    let config = CascadeConfig {
        default_value: keys(&["A", "A2"]),
        ..CascadeConfig::default()
    };
    let mut select = CascadeSelect::new(&tree, config);

    assert_eq!(select.resolved_options().len(), 2);
    assert!(!select.resolved_options()[1].is_leaf());

    select.set_panel_open(true);
    let a2a = &tree[0].children[1].children[0];
    let outcome = select.select(2, a2a);

    assert_eq!(select.working_value(), keys(&["A", "A2", "A2a"]).as_slice());
    assert_eq!(select.display_value(), keys(&["A", "A2", "A2a"]).as_slice());
    assert!(outcome.close_requested);
    assert!(!select.panel_open());
}

/// SCENARIO: change_on_select commits a branch immediately
#[test]
fn scenario_change_on_select_commits_branch() {
    let tree = letters_tree();
    let config = CascadeConfig {
        change_on_select: true,
        ..CascadeConfig::default()
    };
    let mut select = CascadeSelect::new(&tree, config);
    select.set_panel_open(true);

    let outcome = select.select(0, &tree[0]);

    assert!(outcome.committed);
    assert!(!outcome.close_requested);
    assert_eq!(select.display_value(), keys(&["A"]).as_slice());
    assert!(select.panel_open());
    assert_eq!(select.working_value(), keys(&["A"]).as_slice());
}

/// SCENARIO: Owner sees every pick, committed or not, then a clear
#[test]
fn scenario_owner_observes_every_change() {
    let tree = regions_tree();
    let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let mut select = CascadeSelect::new(&tree, CascadeConfig::default()).with_listener(
        move |value: &[String], _: &[CascadeOption]| sink.borrow_mut().push(value.to_vec()),
    );

    select.select(0, &tree[0]);
    assert_eq!(select.regime(), Regime::InProgress);
    select.select(1, &tree[0].children[0]);
    select.select(2, &tree[0].children[0].children[1]);
    assert_eq!(select.regime(), Regime::Settled);
    assert_eq!(select.summary(), "Zhejiang / Hangzhou / Binjiang");

    select.clear();
    assert_eq!(select.summary(), "Please select");

    assert_eq!(
        *seen.borrow(),
        vec![
            keys(&["zj"]),
            keys(&["zj", "hz"]),
            keys(&["zj", "hz", "bj"]),
            Vec::<String>::new(),
        ]
    );
}

/// SCENARIO: Changing province discards the city picked under the old one
#[test]
fn scenario_switching_branch_discards_deeper_choice() {
    let tree = regions_tree();
    let config = CascadeConfig {
        default_value: keys(&["zj", "hz", "xh"]),
        ..CascadeConfig::default()
    };
    let mut select = CascadeSelect::new(&tree, config);

    select.select(0, &tree[1]);
    assert_eq!(select.working_value(), keys(&["js"]).as_slice());
    assert_eq!(select.display_value(), keys(&["zj", "hz", "xh"]).as_slice());

    select.select(1, &tree[1].children[0]);
    assert_eq!(select.display_value(), keys(&["js", "nj"]).as_slice());
    assert_eq!(select.summary(), "Jiangsu / Nanjing");
}
