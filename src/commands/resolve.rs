//! Resolve command handler

use std::path::Path;

use anyhow::Result;

pub fn cmd_resolve(
    tree_path: &Path,
    keys: Vec<String>,
    separator: Option<String>,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut config = super::load_config(config_path)?;
    if let Some(separator) = separator {
        config.separator = separator;
    }

    let tree = cascader::load_tree(tree_path)?;
    let resolved = cascader::is_resolvable(&tree, &keys);
    let mut select = cascader::CascadeSelect::new(&tree, config);
    select.set_value(&tree, keys);

    if json {
        println!("{}", super::selection_json("resolve", &select, resolved));
        return Ok(());
    }

    if !resolved {
        eprintln!("warning: value does not match {}", tree_path.display());
    }
    println!("{}", select.summary());
    Ok(())
}
