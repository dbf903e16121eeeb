//! Configuration module for Cascader
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CASCADER_*)
//! 3. Project config (./cascader.toml)
//! 4. User config (<config_dir>/cascader/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, PROJECT_CONFIG_FILE};
pub use types::{CascadeConfig, ConfigWarning, ExpandTrigger};
