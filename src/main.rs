//! Cascader CLI - cascading option selector
//!
//! Usage: cascader <COMMAND>
//!
//! Commands:
//!   resolve  Resolve a value path against an option tree
//!   pick     Pick a value interactively
//!   check    Validate an option tree

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::pick::PickArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Resolve {
            tree,
            separator,
            keys,
        } => commands::cmd_resolve(&tree, keys, separator, config, cli.json),
        Commands::Pick {
            tree,
            value,
            change_on_select,
            clearable,
            cascade_size,
        } => {
            let args = PickArgs {
                value,
                change_on_select,
                clearable,
                cascade_size,
            };
            commands::cmd_pick(&tree, args, config, cli.json)
        }
        Commands::Check { tree } => commands::cmd_check(&tree, cli.json),
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
