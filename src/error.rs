//! Error taxonomy for cleaning runs
//!
//! Input-side I/O failures are split by kind so callers can tell a vanished
//! file from an unreadable one. Every output-side failure is a [`CleanError::Write`].

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while cleaning a document tree
#[derive(Debug, Error)]
pub enum CleanError {
    /// Input path does not exist
    #[error("not found: {0}")]
    NotFound(PathBuf),

    /// Input path exists but cannot be read
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Any other failure while reading input
    #[error("failed to read {path}: {source}")]
    Read {
        /// The path being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Output directory or file could not be created or written
    #[error("failed to write {path}: {source}")]
    Write {
        /// The path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Source and destination resolve to the same file
    #[error("{0} is the same file as its destination")]
    SameFile(PathBuf),

    /// Input root exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Error walking the input tree
    #[error("walkdir error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A line pattern failed to compile
    #[error("invalid {name} pattern: {source}")]
    InvalidPattern {
        /// Which pattern (header or footer)
        name: &'static str,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Configuration file could not be loaded
    #[error("config error in {path}: {message}")]
    Config {
        /// The config file path
        path: PathBuf,
        /// What went wrong
        message: String,
    },
}

impl CleanError {
    /// Map an I/O error raised while reading `path`
    #[must_use]
    pub fn from_read(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Read {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Wrap an I/O error raised while writing `path`
    #[must_use]
    pub fn from_write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether this failure affects a single file and the run may continue
    #[must_use]
    pub const fn is_per_file(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::PermissionDenied(_)
                | Self::Read { .. }
                | Self::Write { .. }
                | Self::SameFile(_)
        )
    }
}
