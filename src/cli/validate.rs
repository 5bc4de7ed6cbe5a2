//! Validate command implementation.

use anyhow::Result;

use crate::store::ConfigStore;

/// Run validation; an invalid document maps to exit code 1.
pub fn run_validate(store: &ConfigStore) -> Result<()> {
    if !store.validate() {
        std::process::exit(1);
    }
    Ok(())
}
