//! Store error types.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// StoreError
// ============================================================================

/// Errors produced by store operations.
///
/// Every failure mode a store operation can hit maps to one variant, so
/// callers branch on the returned value instead of scraping log output.
/// The `Display` text doubles as the user-visible message the logger emits.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration file missing on load or backup-copy.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),

    /// File extension names no supported format.
    #[error("unsupported config format: `{0}`")]
    UnsupportedFormat(PathBuf),

    #[error("error decoding JSON configuration file `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("error decoding YAML configuration file `{0}`")]
    Yaml(PathBuf, #[source] serde_yaml::Error),

    /// YAML parsed fine but cannot be represented in the JSON value model
    /// (sequence-valued mapping keys, for example).
    #[error("unsupported YAML structure in `{0}`")]
    YamlStructure(PathBuf, #[source] serde_json::Error),

    #[error("error accessing configuration file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// Final key-path segment missing from its mapping.
    #[error("key `{0}` not found in the configuration")]
    KeyNotFound(String),

    /// Intermediate key-path segment missing, or present but not a mapping.
    #[error("key `{0}` not found or is not a mapping")]
    NotAMapping(String),

    #[error("empty key path")]
    EmptyKeyPath,

    /// Operation needs a document but the store is empty (load failed).
    #[error("no configuration document loaded")]
    NoDocument,
}
