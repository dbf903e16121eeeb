//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CascadeResult;
use crate::models::ValuePath;

use super::loader;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown or problematic key
    pub key: String,
    /// The file where the warning occurred
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

/// How the menu collaborator expands a branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpandTrigger {
    /// Expand on activation
    #[default]
    Click,
    /// Expand when the cursor rests on a branch
    Hover,
}

/// Selector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeConfig {
    /// Every pick commits, even on a branch
    #[serde(default)]
    pub change_on_select: bool,

    /// Suppresses visibility changes and picks
    #[serde(default)]
    pub disabled: bool,

    /// Whether the clear affordance is offered
    #[serde(default)]
    pub clearable: bool,

    /// Maximum number of simultaneously visible levels
    #[serde(default = "default_cascade_size")]
    pub cascade_size: usize,

    /// Text shown when nothing is selected
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Separator between labels in the default summary
    #[serde(default = "default_separator")]
    pub separator: String,

    #[serde(default)]
    pub expand_trigger: ExpandTrigger,

    /// Authoritative initial value; wins over `default_value`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ValuePath>,

    /// Initial value when no authoritative value is given
    #[serde(default)]
    pub default_value: ValuePath,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            change_on_select: false,
            disabled: false,
            clearable: false,
            cascade_size: default_cascade_size(),
            placeholder: default_placeholder(),
            separator: default_separator(),
            expand_trigger: ExpandTrigger::default(),
            value: None,
            default_value: Vec::new(),
        }
    }
}

fn default_cascade_size() -> usize {
    3
}

fn default_placeholder() -> String {
    "Please select".to_string()
}

fn default_separator() -> String {
    " / ".to_string()
}

impl CascadeConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CascadeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CascadeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (CASCADER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// The value that seeds the first initialization
    pub fn initial_value(&self) -> ValuePath {
        self.value
            .clone()
            .unwrap_or_else(|| self.default_value.clone())
    }
}
