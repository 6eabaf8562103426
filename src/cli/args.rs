//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::domain::ItemFilter;

/// Treasure chest and binary search tree cursors
#[derive(Parser, Debug)]
#[command(name = "trove")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .trove.toml (default: cwd)
    #[arg(
        short = 'C',
        long,
        global = true,
        env = "TROVE_DIR",
        value_hint = ValueHint::DirPath
    )]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk the treasure chest with a category filter
    Chest {
        /// Category: any, weapon, ring or potion (default: configured filter)
        #[arg(short, long, value_parser = parse_filter)]
        filter: Option<ItemFilter>,

        /// Chest inventory file (TOML)
        #[arg(long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Insert values into a binary search tree and walk it in order
    Bst {
        /// Values to insert, in insertion order (default: configured values)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Also print the tree shape
        #[arg(long)]
        tree: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,

    /// Show config file locations
    Path,
}

fn parse_filter(s: &str) -> Result<ItemFilter, String> {
    s.parse().map_err(|e: crate::domain::DomainError| e.to_string())
}
