//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CascadeError, CascadeResult};

use super::types::{CascadeConfig, ConfigWarning};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "cascader.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CascadeResult<(CascadeConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse config content; `path` is only used for error and warning context.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> CascadeResult<(CascadeConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: CascadeConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CascadeError::Toml {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> CascadeConfig {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            match CascadeConfig::load(&project_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => tracing::warn!(
                    file = %project_config.display(),
                    error = %e,
                    "ignoring unreadable config"
                ),
            }
        }
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            match CascadeConfig::load(&user_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => tracing::warn!(
                    file = %user_config.display(),
                    error = %e,
                    "ignoring unreadable config"
                ),
            }
        }
    }

    with_env_overrides(CascadeConfig::default())
}

/// `<config_dir>/cascader/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cascader").join("config.toml"))
}

/// Apply environment variable overrides (CASCADER_* prefix)
pub fn with_env_overrides(config: CascadeConfig) -> CascadeConfig {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: CascadeConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> CascadeConfig {
    if let Some(val) = get_env("CASCADER_CHANGE_ON_SELECT") {
        config.change_on_select = parse_flag(&val);
    }

    if let Some(val) = get_env("CASCADER_DISABLED") {
        config.disabled = parse_flag(&val);
    }

    if let Some(val) = get_env("CASCADER_CASCADE_SIZE") {
        match val.trim().parse::<usize>() {
            Ok(size) if size > 0 => config.cascade_size = size,
            _ => tracing::warn!(value = %val, "ignoring invalid CASCADER_CASCADE_SIZE"),
        }
    }

    if let Some(val) = get_env("CASCADER_SEPARATOR") {
        config.separator = val;
    }

    config
}

fn parse_flag(val: &str) -> bool {
    !matches!(val.trim().to_lowercase().as_str(), "" | "0" | "false" | "no" | "off")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "change_on_select",
        "disabled",
        "clearable",
        "cascade_size",
        "placeholder",
        "separator",
        "expand_trigger",
        "value",
        "default_value",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
