//! Core data models for Cascader
//!
//! Defines the fundamental data structures used throughout Cascader:
//! - `CascadeOption`: one choosable node at some depth of the tree
//! - `OptionTree`: the ordered root nodes
//! - `ValuePath`: one key per depth level, from the root downward

use serde::{Deserialize, Serialize};

/// Ordered sequence of root option nodes
pub type OptionTree = Vec<CascadeOption>;

/// Ordered sequence of keys, one per depth level
pub type ValuePath = Vec<String>;

/// A single choice in the option tree
///
/// A node with children is a branch; a node without is a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeOption {
    /// Identifier, unique among siblings
    #[serde(alias = "value")]
    pub key: String,

    /// Human-readable text (may be empty)
    #[serde(default)]
    pub label: String,

    /// Child nodes (empty for leaf nodes)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CascadeOption>,
}

impl CascadeOption {
    /// Create a leaf node
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Create a node whose label is its key
    pub fn keyed(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::new(key.clone(), key)
    }

    /// Builder-style child list
    pub fn with_children(mut self, children: impl IntoIterator<Item = CascadeOption>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Add a child node
    pub fn add_child(&mut self, child: CascadeOption) {
        self.children.push(child);
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Label to show for this node, falling back to the key when unlabeled
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.key
        } else {
            &self.label
        }
    }

    /// Find a direct child by key (first match wins)
    pub fn child(&self, key: &str) -> Option<&CascadeOption> {
        self.children.iter().find(|c| c.key == key)
    }

    /// Depth of the deepest leaf below this node (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(|c| c.depth()).max().unwrap_or(0)
    }

    /// Number of leaf nodes in this subtree
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(|c| c.leaf_count()).sum()
        }
    }
}
