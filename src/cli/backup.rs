//! Backup command implementation.

use anyhow::Result;

use crate::store::ConfigStore;

/// Write a fresh timestamped backup; failure maps to exit code 1.
pub fn run_backup(store: &ConfigStore) -> Result<()> {
    if store.backup().is_err() {
        std::process::exit(1);
    }
    Ok(())
}
