//! Error types for Cascader
//!
//! Uses `thiserror` for library errors. The selection engine itself never
//! fails; these cover loading option trees and configuration files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Cascader operations
pub type CascadeResult<T> = Result<T, CascadeError>;

/// Main error type for Cascader operations
#[derive(Error, Debug)]
pub enum CascadeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON option tree
    #[error("invalid JSON in {file}: {message}")]
    Json { file: PathBuf, message: String },

    /// Malformed YAML option tree
    #[error("invalid YAML in {file}: {message}")]
    Yaml { file: PathBuf, message: String },

    /// Malformed TOML option tree or config file
    #[error("invalid TOML in {file}: {message}")]
    Toml { file: PathBuf, message: String },

    /// File extension is not one of json, yaml, yml, toml
    #[error("unsupported option tree format: {file} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat { file: PathBuf },

    /// Two siblings share the same key
    #[error("duplicate key '{key}' at depth {depth}")]
    DuplicateKey { key: String, depth: usize },
}
