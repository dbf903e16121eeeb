//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Cascader - cascading option selector
#[derive(Parser, Debug)]
#[command(name = "cascader")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./cascader.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a value path against an option tree and print its summary
    Resolve {
        /// Option tree file (.json, .yaml, .yml or .toml)
        #[arg(short, long)]
        tree: PathBuf,

        /// Separator between labels
        #[arg(long)]
        separator: Option<String>,

        /// Keys from the top level down
        keys: Vec<String>,
    },

    /// Pick a value interactively
    Pick {
        /// Option tree file (.json, .yaml, .yml or .toml)
        #[arg(short, long)]
        tree: PathBuf,

        /// Initial value, comma-separated keys
        #[arg(long, value_delimiter = ',')]
        value: Option<Vec<String>>,

        /// Commit every pick, not only leaves
        #[arg(long)]
        change_on_select: bool,

        /// Offer clearing the selection
        #[arg(long)]
        clearable: bool,

        /// Maximum number of visible levels
        #[arg(long)]
        cascade_size: Option<usize>,
    },

    /// Validate an option tree and print its shape
    Check {
        /// Option tree file (.json, .yaml, .yml or .toml)
        #[arg(short, long)]
        tree: PathBuf,
    },
}
