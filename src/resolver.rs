//! Path resolution
//!
//! Walks an option tree level by level to turn a value path (keys) into the
//! matching option nodes. Resolution is all-or-nothing: a path that fails to
//! match at any depth resolves to an empty list, never a partial breadcrumb.

use crate::models::CascadeOption;

/// Resolve a value path against a tree, borrowing the matched nodes.
///
/// Returns one node per key on success, or an empty vector if any key has no
/// match among the siblings at its depth. The first sibling with a matching
/// key wins.
pub fn resolve_refs<'a, S: AsRef<str>>(
    tree: &'a [CascadeOption],
    value: &[S],
) -> Vec<&'a CascadeOption> {
    let mut resolved = Vec::with_capacity(value.len());
    let mut siblings = tree;

    for key in value {
        let key = key.as_ref();
        match siblings.iter().find(|node| node.key == key) {
            Some(node) => {
                resolved.push(node);
                siblings = &node.children;
            }
            None => return Vec::new(),
        }
    }

    resolved
}

/// Resolve a value path against a tree, cloning the matched nodes.
pub fn resolve<S: AsRef<str>>(tree: &[CascadeOption], value: &[S]) -> Vec<CascadeOption> {
    resolve_refs(tree, value).into_iter().cloned().collect()
}

/// Whether every key of the path matches the tree. Empty paths are resolvable.
pub fn is_resolvable<S: AsRef<str>>(tree: &[CascadeOption], value: &[S]) -> bool {
    value.is_empty() || !resolve_refs(tree, value).is_empty()
}
