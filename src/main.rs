//! Confit - an environment-aware configuration store for JSON and YAML files.

#![allow(dead_code)]

mod cli;
mod logger;
mod store;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use store::ConfigStore;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // Every command operates on a freshly opened store, so each invocation
    // reproduces the load + automatic backup construction behavior.
    let mut store =
        ConfigStore::open_with_backup_root(&cli.config, cli.env, cli.backup_dir.clone());

    match &cli.command {
        Commands::Validate => cli::validate::run_validate(&store),
        Commands::Get { key_path, pretty } => {
            cli::get::run_get(&store, key_path.as_deref(), *pretty)
        }
        Commands::Set { key_path, value } => cli::set::run_set(&mut store, key_path, value),
        Commands::Backup => cli::backup::run_backup(&store),
        Commands::Env => {
            store.describe_environment();
            Ok(())
        }
    }
}
