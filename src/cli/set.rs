//! Set command implementation.

use anyhow::Result;
use serde_json::Value;

use crate::store::{ConfigStore, KeyPath};

/// Update the value at `key_path` and persist the document.
///
/// The store reports the outcome; a failed update maps to exit code 1.
pub fn run_set(store: &mut ConfigStore, key_path: &str, raw_value: &str) -> Result<()> {
    let path = KeyPath::parse(key_path);
    let value = parse_value(raw_value);

    if store.update_value(&path, value).is_err() {
        std::process::exit(1);
    }
    Ok(())
}

/// Parse `raw` as JSON, falling back to a plain string.
///
/// `1111` becomes a number and `true` a boolean; anything that does not
/// parse as JSON is stored verbatim as a string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
