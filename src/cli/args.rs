//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::store::Environment;

/// Confit configuration store CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Configuration file path (format chosen by extension: .json, .yaml, .yml)
    #[arg(short = 'C', long, default_value = "config.json", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Environment tag attached to the store
    #[arg(short, long, global = true, value_enum, default_value_t = Environment::Development)]
    pub env: Environment,

    /// Directory backups are written under (default: backups/ next to the config file)
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub backup_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the loaded configuration document
    #[command(visible_alias = "v")]
    Validate,

    /// Print the document, or the value at a key path, as JSON
    #[command(visible_alias = "g")]
    Get {
        /// Dotted key path (e.g. database.port); whole document if omitted
        #[arg(value_name = "KEY_PATH")]
        key_path: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Update the value at a key path and persist the document
    #[command(visible_alias = "s")]
    Set {
        /// Dotted key path (e.g. database.port)
        #[arg(value_name = "KEY_PATH")]
        key_path: String,

        /// New value, parsed as JSON with plain-string fallback
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Write a fresh timestamped backup of the configuration file
    #[command(visible_alias = "b")]
    Backup,

    /// Show which environment this store serves
    Env,
}
