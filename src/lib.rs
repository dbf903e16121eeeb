//! Cascader - cascading option selection engine
//!
//! Cascader tracks a selection through a tree of options, one level at a
//! time (e.g. region → province → city). It resolves externally supplied
//! values against the current tree, advances and truncates the selection as
//! nodes are picked, and decides when a selection is committed.

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod resolver;
pub mod summary;
pub mod tree;
pub mod ui;

// Re-exports for convenience
pub use config::{CascadeConfig, ConfigWarning, ExpandTrigger};
pub use engine::{CascadeSelect, ChangeListener, Pick, PickOutcome, Regime};
pub use error::{CascadeError, CascadeResult};
pub use models::{CascadeOption, OptionTree, ValuePath};
pub use resolver::{is_resolvable, resolve, resolve_refs};
pub use summary::{DefaultFormatter, SummaryFormatter};
pub use tree::{load_tree, parse_tree, tree_stats, validate_tree, TreeFormat, TreeStats};
