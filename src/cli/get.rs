//! Get command implementation.

use anyhow::Result;

use crate::log;
use crate::store::{ConfigStore, KeyPath, StoreError};

/// Print the document, or the value at `key_path`, as JSON.
pub fn run_get(store: &ConfigStore, key_path: Option<&str>, pretty: bool) -> Result<()> {
    if store.document().is_none() {
        log!("error"; "{}", StoreError::NoDocument);
        std::process::exit(1);
    }

    let path = key_path.map(KeyPath::parse).unwrap_or_default();
    let Some(value) = store.get(&path) else {
        log!("error"; "{}", StoreError::KeyNotFound(path.to_string()));
        std::process::exit(1);
    };

    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", formatted);

    Ok(())
}
