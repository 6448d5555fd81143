//! Error type for checksum computation.

use std::io;
use std::path::{Path, PathBuf};

/// I/O failure while hashing a file. Kept apart from [`super::Checksum`] so a
/// message can never be mistaken for a digest.
#[derive(Debug, thiserror::Error)]
pub enum ChecksumError {
    /// The file could not be opened (not found, permission denied, ...).
    #[error("cannot open {}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    /// Reading failed part-way; no partial digest is produced.
    #[error("cannot read {}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    /// File metadata (size) could not be queried.
    #[error("cannot stat {}", .path.display())]
    Metadata { path: PathBuf, source: io::Error },
}

impl ChecksumError {
    pub(crate) fn open(path: &Path, source: io::Error) -> Self {
        ChecksumError::Open {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        ChecksumError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn metadata(path: &Path, source: io::Error) -> Self {
        ChecksumError::Metadata {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ChecksumError::Open { path, .. }
            | ChecksumError::Read { path, .. }
            | ChecksumError::Metadata { path, .. } => path,
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            ChecksumError::Open { source, .. }
            | ChecksumError::Read { source, .. }
            | ChecksumError::Metadata { source, .. } => source,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.io_error().kind()
    }

    /// Status-line rendering, e.g. `Error: cannot open a.iso: No such file or directory (os error 2)`.
    pub fn user_message(&self) -> String {
        format!("Error: {}: {}", self, self.io_error())
    }
}
