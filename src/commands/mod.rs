//! Command handlers for the cascader binary

mod check;
pub mod pick;
mod resolve;

pub use check::cmd_check;
pub use pick::cmd_pick;
pub use resolve::cmd_resolve;

use std::path::Path;

use anyhow::{Context, Result};

use cascader::CascadeConfig;

/// Load `--config` if given, else the project/user/default config.
///
/// Unknown keys in an explicit config file are reported on stderr.
pub(crate) fn load_config(path: Option<&Path>) -> Result<CascadeConfig> {
    let Some(path) = path else {
        let project_root = std::env::current_dir()?;
        return Ok(CascadeConfig::load_or_default(Some(&project_root)));
    };

    let (config, warnings) = CascadeConfig::load_with_warnings(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match warning.suggestion {
            Some(suggestion) => eprintln!(
                "warning: unknown config key '{}' in {} (did you mean '{}'?)",
                warning.key, location, suggestion
            ),
            None => eprintln!("warning: unknown config key '{}' in {}", warning.key, location),
        }
    }
    Ok(config.with_env_overrides())
}

/// JSON envelope shared by `resolve` and `pick`
pub(crate) fn selection_json(
    command: &str,
    select: &cascader::CascadeSelect,
    resolved: bool,
) -> serde_json::Value {
    let labels: Vec<&str> = select
        .display_options()
        .iter()
        .map(|o| o.display_label())
        .collect();
    serde_json::json!({
        "event": "data",
        "command": command,
        "value": select.display_value(),
        "labels": labels,
        "resolved": resolved,
        "summary": select.summary(),
    })
}
