//! Configuration store: one loaded document, its source path, its backups.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── backup       # Timestamped backup artifacts
//! ├── document     # Format detection, parsing, serialization
//! ├── environment  # Environment tags (development/staging/production)
//! ├── error        # StoreError
//! ├── keypath      # Key paths and nested-value traversal
//! └── mod.rs       # ConfigStore (this file)
//! ```
//!
//! # Operations
//!
//! | Operation              | Behavior                                        |
//! |------------------------|-------------------------------------------------|
//! | `open`                 | load + automatic backup; never fails            |
//! | `validate`             | document present and top-level mapping          |
//! | `get`                  | read-only lookup by key path                    |
//! | `update_value`         | replace nested value, persist immediately       |
//! | `save` / `write`       | serialize back to the source path               |
//! | `backup`               | fresh timestamped copy of the source file       |
//! | `describe_environment` | display-only environment report                 |
//!
//! Every operation reports a human-readable outcome through the logger and
//! additionally returns a typed result, so embedding code can branch without
//! parsing output.

mod backup;
mod document;
mod environment;
mod error;
mod keypath;

pub use backup::{BACKUP_PREFIX, DEFAULT_BACKUP_ROOT};
pub use document::Format;
pub use environment::Environment;
pub use error::StoreError;
pub use keypath::KeyPath;

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{debug, log};

// ============================================================================
// ConfigStore
// ============================================================================

/// Owns one configuration document and the path it was loaded from.
#[derive(Debug)]
pub struct ConfigStore {
    /// Source path; writes go back here.
    path: PathBuf,

    /// Environment tag, display only.
    env: Environment,

    /// Root directory timestamped backups are written under.
    backup_root: PathBuf,

    /// Loaded document. `None` after a failed load; operations that need a
    /// document then fail with `StoreError::NoDocument`.
    document: Option<Value>,
}

impl ConfigStore {
    /// Open a store: load the document at `path` and, on success, back up
    /// the source file.
    ///
    /// Construction never fails. Load and backup errors are reported and
    /// leave the store usable-but-empty.
    pub fn open(path: impl Into<PathBuf>, env: Environment) -> Self {
        Self::open_with_backup_root(path, env, None)
    }

    /// Like [`open`](Self::open) with an explicit backup root. `None` puts
    /// backups in `backups/` next to the configuration file.
    pub fn open_with_backup_root(
        path: impl Into<PathBuf>,
        env: Environment,
        backup_root: Option<PathBuf>,
    ) -> Self {
        let path = normalize_path(&path.into());
        let backup_root = backup_root.unwrap_or_else(|| default_backup_root(&path));

        let document = document::load(&path).map_err(report).ok();
        if document.is_some() {
            debug!("load"; "loaded configuration from {}", path.display());
        }

        let store = Self {
            path,
            env,
            backup_root,
            document,
        };
        if store.document.is_some() {
            let _ = store.backup();
        }
        store
    }

    // ========================================================================
    // accessors
    // ========================================================================

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn environment(&self) -> Environment {
        self.env
    }

    pub fn backup_root(&self) -> &Path {
        &self.backup_root
    }

    /// The current document, if one was loaded.
    pub fn document(&self) -> Option<&Value> {
        self.document.as_ref()
    }

    /// Borrow the value at `path`; the empty path yields the whole document.
    pub fn get(&self, path: &KeyPath) -> Option<&Value> {
        keypath::get_in(self.document.as_ref()?, path)
    }

    // ========================================================================
    // operations
    // ========================================================================

    /// True iff a document is loaded and its top-level value is a mapping.
    pub fn validate(&self) -> bool {
        match &self.document {
            Some(Value::Object(_)) => {
                log!("validate"; "configuration file is valid");
                true
            }
            Some(_) => {
                log!("validate"; "configuration file is not in the proper format");
                false
            }
            None => {
                log!("validate"; "no configuration document loaded");
                false
            }
        }
    }

    /// Replace the value at `path` and persist the whole document.
    ///
    /// Fails without touching the document when any path segment is missing
    /// or names a non-mapping. The success message is only reported once the
    /// document hit the disk.
    pub fn update_value(&mut self, path: &KeyPath, new_value: Value) -> Result<(), StoreError> {
        let Some(document) = self.document.as_mut() else {
            return Err(report(StoreError::NoDocument));
        };

        keypath::update_in(document, path, new_value).map_err(report)?;
        self.save()?;
        log!("update"; "value updated successfully");
        Ok(())
    }

    /// Re-serialize the current document to the source path.
    pub fn save(&self) -> Result<(), StoreError> {
        match &self.document {
            Some(document) => self.write(document),
            None => Err(report(StoreError::NoDocument)),
        }
    }

    /// Serialize `document` to the source path, format chosen by extension.
    pub fn write(&self, document: &Value) -> Result<(), StoreError> {
        document::write(&self.path, document).map_err(report)
    }

    /// Copy the source file into a fresh timestamped backup directory.
    pub fn backup(&self) -> Result<PathBuf, StoreError> {
        let dir = backup::create(&self.path, &self.backup_root).map_err(report)?;
        log!("backup"; "backup created at {}", dir.display());
        Ok(dir)
    }

    /// Report which environment this store serves.
    pub fn describe_environment(&self) {
        log!("env"; "{} configuration store at {}", self.env, self.path.display());
    }
}

// ============================================================================
// helpers
// ============================================================================

/// Log an error at the store boundary before handing it to the caller.
fn report(err: StoreError) -> StoreError {
    log!("error"; "{err}");
    err
}

/// Normalize to an absolute path, resolving symlinks when possible.
fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    }
}

/// `backups/` next to the configuration file.
fn default_backup_root(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(DEFAULT_BACKUP_ROOT),
        _ => PathBuf::from(DEFAULT_BACKUP_ROOT),
    }
}

// ============================================================================
// tests
// ============================================================================
