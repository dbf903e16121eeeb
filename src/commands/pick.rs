//! Pick command handler

use std::path::Path;

use anyhow::{bail, Result};
use is_terminal::IsTerminal;

use cascader::ui::terminal::detect_capabilities;
use cascader::ui::{run_interactive, CascadeMenu};
use cascader::CascadeSelect;

pub struct PickArgs {
    pub value: Option<Vec<String>>,
    pub change_on_select: bool,
    pub clearable: bool,
    pub cascade_size: Option<usize>,
}

pub fn cmd_pick(
    tree_path: &Path,
    args: PickArgs,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        bail!("pick needs an interactive terminal; use 'cascader resolve' in scripts");
    }

    let mut config = super::load_config(config_path)?;
    if let Some(value) = args.value {
        config.value = Some(value);
    }
    config.change_on_select |= args.change_on_select;
    config.clearable |= args.clearable;
    if let Some(size) = args.cascade_size {
        config.cascade_size = size.max(1);
    }

    let tree = cascader::load_tree(tree_path)?;
    let select = CascadeSelect::new(&tree, config);
    if select.config().disabled {
        bail!("selector is disabled by configuration");
    }

    let caps = detect_capabilities();
    let mut menu = CascadeMenu::new(tree, select);
    let picked = run_interactive(&mut menu, caps.supports_unicode)?;
    let select = menu.into_engine();

    match picked {
        Some(_) if json => println!("{}", super::selection_json("pick", &select, true)),
        Some(_) => println!("{}", select.summary()),
        None => {
            tracing::info!("pick cancelled");
            if json {
                println!("{}", super::selection_json("pick", &select, false));
            }
        }
    }
    Ok(())
}
