//! Key paths addressing nested values inside a document.
//!
//! A key path is an ordered list of mapping keys (`["database", "port"]`,
//! spelled `database.port` on the command line). Traversal only descends
//! through mappings; there are no numeric or array-index segments.

use std::fmt;

use serde_json::Value;

use super::error::StoreError;

// ============================================================================
// KeyPath
// ============================================================================

/// An ordered list of mapping keys identifying one nested value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Parse a dotted key path (`database.port`). Empty segments are
    /// dropped, so the empty string parses as the empty path.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split('.')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl From<&[&str]> for KeyPath {
    fn from(segments: &[&str]) -> Self {
        Self(segments.iter().map(|s| (*s).to_string()).collect())
    }
}

// ============================================================================
// traversal
// ============================================================================

/// Replace the value at `path` inside `root` with `new_value`.
///
/// Every segment except the last must name an existing nested mapping; the
/// last must name an existing key, whose value is replaced without any type
/// check. The document is untouched when any step fails.
///
/// Iterative walk, so arbitrarily long paths cost no stack.
pub fn update_in(root: &mut Value, path: &KeyPath, new_value: Value) -> Result<(), StoreError> {
    let Some((last, parents)) = path.segments().split_last() else {
        return Err(StoreError::EmptyKeyPath);
    };

    let mut current = root;
    for key in parents {
        let next = current
            .as_object_mut()
            .and_then(|map| map.get_mut(key.as_str()))
            .filter(|value| value.is_object());

        current = match next {
            Some(value) => value,
            None => return Err(StoreError::NotAMapping(key.clone())),
        };
    }

    let Some(map) = current.as_object_mut() else {
        return Err(StoreError::NotAMapping(last.clone()));
    };
    match map.get_mut(last.as_str()) {
        Some(slot) => {
            *slot = new_value;
            Ok(())
        }
        None => Err(StoreError::KeyNotFound(last.clone())),
    }
}

/// Borrow the value at `path` inside `root`. The empty path yields `root`.
pub fn get_in<'a>(root: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    let mut current = root;
    for key in path.segments() {
        current = current.as_object()?.get(key.as_str())?;
    }
    Some(current)
}

// ============================================================================
// tests
// ============================================================================
