//! Option tree loading and validation.
//!
//! Trees are read from JSON, YAML or TOML. JSON and YAML accept either a bare
//! list of root nodes or a table with an `options` list; TOML always uses the
//! table form:
//!
//! ```toml
//! [[options]]
//! key = "zj"
//! label = "Zhejiang"
//!
//! [[options.children]]
//! key = "hz"
//! label = "Hangzhou"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CascadeError, CascadeResult};
use crate::models::{CascadeOption, OptionTree};

/// Supported option tree file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFormat {
    Json,
    Yaml,
    Toml,
}

impl TreeFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Table form of a tree document: `options = [...]` and nothing else
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TreeTable {
    options: Vec<CascadeOption>,
}

/// Try the bare list form first, then the table form.
///
/// When both fail, the error reported is the one for the shape the document
/// actually has, so line and column information points at the real problem.
fn parse_document<E: std::fmt::Display>(
    content: &str,
    is_table: bool,
    parse_list: impl Fn(&str) -> Result<OptionTree, E>,
    parse_table: impl Fn(&str) -> Result<TreeTable, E>,
) -> Result<OptionTree, String> {
    let list_err = match parse_list(content) {
        Ok(tree) => return Ok(tree),
        Err(e) => e,
    };
    match parse_table(content) {
        Ok(table) => Ok(table.options),
        Err(table_err) if is_table => Err(table_err.to_string()),
        Err(_) => Err(list_err.to_string()),
    }
}

fn yaml_is_mapping(content: &str) -> bool {
    serde_yaml_ng::from_str::<serde_yaml_ng::Value>(content)
        .map(|value| value.is_mapping())
        .unwrap_or(false)
}

/// Load an option tree, detecting the format from the file extension
pub fn load_tree(path: &Path) -> CascadeResult<OptionTree> {
    let format = TreeFormat::from_path(path).ok_or_else(|| CascadeError::UnsupportedFormat {
        file: path.to_path_buf(),
    })?;
    let content = fs::read_to_string(path)?;
    let tree = parse_tree(&content, format, path)?;
    tracing::debug!(file = %path.display(), roots = tree.len(), "loaded option tree");
    Ok(tree)
}

/// Parse option tree content; `path` is only used for error context.
pub fn parse_tree(content: &str, format: TreeFormat, path: &Path) -> CascadeResult<OptionTree> {
    match format {
        TreeFormat::Json => parse_document(
            content,
            content.trim_start().starts_with('{'),
            |c| serde_json::from_str(c),
            |c| serde_json::from_str(c),
        )
        .map_err(|message| CascadeError::Json {
            file: path.to_path_buf(),
            message,
        }),
        TreeFormat::Yaml => parse_document(
            content,
            yaml_is_mapping(content),
            |c| serde_yaml_ng::from_str(c),
            |c| serde_yaml_ng::from_str(c),
        )
        .map_err(|message| CascadeError::Yaml {
            file: path.to_path_buf(),
            message,
        }),
        TreeFormat::Toml => toml::from_str::<TreeTable>(content)
            .map(|table| table.options)
            .map_err(|e| CascadeError::Toml {
                file: path.to_path_buf(),
                message: e.to_string(),
            }),
    }
}

/// Report the first pair of siblings sharing a key.
///
/// Resolution tolerates duplicates (first match wins), but a tree with them
/// has unreachable nodes.
pub fn validate_tree(tree: &[CascadeOption]) -> CascadeResult<()> {
    validate_level(tree, 0)
}

fn validate_level(siblings: &[CascadeOption], depth: usize) -> CascadeResult<()> {
    let mut seen = HashSet::new();
    for node in siblings {
        if !seen.insert(node.key.as_str()) {
            return Err(CascadeError::DuplicateKey {
                key: node.key.clone(),
                depth,
            });
        }
        validate_level(&node.children, depth + 1)?;
    }
    Ok(())
}

/// Shape of a tree, for `cascader check`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub roots: usize,
    pub nodes: usize,
    pub leaves: usize,
    pub depth: usize,
}

pub fn tree_stats(tree: &[CascadeOption]) -> TreeStats {
    fn count(nodes: &[CascadeOption]) -> usize {
        nodes.iter().map(|n| 1 + count(&n.children)).sum()
    }

    TreeStats {
        roots: tree.len(),
        nodes: count(tree),
        leaves: tree.iter().map(CascadeOption::leaf_count).sum(),
        depth: tree.iter().map(CascadeOption::depth).max().unwrap_or(0),
    }
}
