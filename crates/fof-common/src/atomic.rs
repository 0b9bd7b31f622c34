//! Atomic whole-file replacement.
//!
//! Writes go to a `<name>.tmp` sibling which is synced and then renamed over
//! the destination, so readers never observe a partially written file and a
//! crash mid-write leaves the original untouched.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtomicWriteError {
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The temp file was written but could not replace the destination.
    #[error("failed to replace {target_path} with {temp_path}: {source}")]
    Rename {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AtomicWriteError {
    /// Path of the file the failing operation touched.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
            Self::Rename { target_path, .. } => target_path,
        }
    }
}

/// Sibling temp path used while writing `path`.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("unnamed"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace `path` with `bytes`, creating parent directories as needed.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), AtomicWriteError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| AtomicWriteError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = temp_path_for(path);
    let result = write_temp(&temp_path, bytes).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|source| AtomicWriteError::Rename {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source,
        })
    });

    if let Err(error) = result {
        if let Err(cleanup) = fs::remove_file(&temp_path)
            && cleanup.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(
                path = %temp_path.display(),
                error = %cleanup,
                "could not remove temp file after failed write"
            );
        }
        return Err(error);
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote file atomically");
    Ok(())
}

fn write_temp(temp_path: &Path, bytes: &[u8]) -> Result<(), AtomicWriteError> {
    let io_error = |operation: &'static str| {
        move |source: std::io::Error| AtomicWriteError::Io {
            operation,
            path: temp_path.to_path_buf(),
            source,
        }
    };

    let mut file = File::create(temp_path).map_err(io_error("create"))?;
    file.write_all(bytes).map_err(io_error("write"))?;
    file.sync_all().map_err(io_error("sync"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn temp_path_appends_suffix() {
        assert_eq!(
            temp_path_for(Path::new("/data/players.csv")),
            PathBuf::from("/data/players.csv.tmp")
        );
    }

    #[test]
    fn writes_and_replaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("out.txt");

        write_atomic(&path, b"nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = tempdir().unwrap();
        // A non-empty directory at the destination cannot be replaced by a file.
        let path = dir.path().join("occupied");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), b"x").unwrap();

        let err = write_atomic(&path, b"data").unwrap_err();

        assert!(matches!(err, AtomicWriteError::Rename { .. }));
        assert_eq!(err.path(), path.as_path());
        assert!(!temp_path_for(&path).exists());
        assert!(path.join("keep.txt").exists());
    }

    #[test]
    fn failed_create_reports_path() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"not a directory").unwrap();
        let path = blocker.join("child.txt");

        let err = write_atomic(&path, b"data").unwrap_err();

        assert!(matches!(
            err,
            AtomicWriteError::Io {
                operation: "create directory",
                ..
            }
        ));
    }
}
