//! Timestamped backups of the source configuration file.
//!
//! Each backup is a full copy of the config file inside a fresh
//! `backup_<YYYYMMDDHHMMSS>` directory (local time, second resolution)
//! under the store's backup root. Backups are never read back and never
//! evicted.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;

use super::error::StoreError;

/// Directory name prefix for every backup.
pub const BACKUP_PREFIX: &str = "backup_";

/// Default root directory, resolved next to the configuration file.
pub const DEFAULT_BACKUP_ROOT: &str = "backups";

/// Copy `source` into a fresh timestamped directory under `root`.
///
/// The copy keeps the original filename. Returns the backup directory.
/// The directory is created before the copy, so a failed copy can leave
/// an empty backup directory behind; there is no rollback.
pub fn create(source: &Path, root: &Path) -> Result<PathBuf, StoreError> {
    let timestamp = Local::now().format("%Y%m%d%H%M%S");
    let dir = root.join(format!("{BACKUP_PREFIX}{timestamp}"));

    fs::create_dir_all(&dir).map_err(|err| StoreError::Io(dir.clone(), err))?;

    let Some(file_name) = source.file_name() else {
        return Err(StoreError::NotFound(source.to_path_buf()));
    };
    let dest = dir.join(file_name);

    fs::copy(source, &dest).map_err(|err| match err.kind() {
        ErrorKind::NotFound => StoreError::NotFound(source.to_path_buf()),
        _ => StoreError::Io(dest.clone(), err),
    })?;

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_backup_copies_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("app.json");
        fs::write(&source, "{\"a\": 1}").unwrap();

        let root = dir.path().join("backups");
        let backup_dir = create(&source, &root).unwrap();

        assert!(backup_dir.starts_with(&root));
        let name = backup_dir.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with(BACKUP_PREFIX));
        // backup_ + YYYYMMDDHHMMSS
        assert_eq!(name.len(), BACKUP_PREFIX.len() + 14);

        let copy = backup_dir.join("app.json");
        assert_eq!(
            fs::read(&copy).unwrap(),
            fs::read(&source).unwrap(),
            "backup must be a byte-identical copy"
        );
    }

    #[test]
    fn test_create_backup_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("gone.json");
        let root = dir.path().join("backups");

        let err = create(&source, &root).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(path) if path == source));

        // the timestamped directory was already created; that is documented
        assert_eq!(fs::read_dir(&root).unwrap().count(), 1);
    }
}
