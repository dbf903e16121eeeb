//! Check command handler

use std::path::Path;

use anyhow::Result;

pub fn cmd_check(tree_path: &Path, json: bool) -> Result<()> {
    let tree = cascader::load_tree(tree_path)?;
    cascader::validate_tree(&tree)?;
    let stats = cascader::tree_stats(&tree);

    if json {
        let out = serde_json::json!({
            "event": "data",
            "command": "check",
            "roots": stats.roots,
            "nodes": stats.nodes,
            "leaves": stats.leaves,
            "depth": stats.depth,
        });
        println!("{}", out);
        return Ok(());
    }

    println!("✓ {}", tree_path.display());
    println!(
        "{} roots, {} nodes, {} leaves, {} levels",
        stats.roots, stats.nodes, stats.leaves, stats.depth
    );
    Ok(())
}
