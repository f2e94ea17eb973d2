//! Error types for assetgz
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for assetgz operations
pub type AssetgzResult<T> = Result<T, AssetgzError>;

/// Main error type for assetgz operations
#[derive(Error, Debug)]
pub enum AssetgzError {
    /// Reading a source asset or artifact failed
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing an artifact failed
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Removing an artifact failed
    #[error("failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading file metadata (size, mtime) failed
    #[error("failed to stat {path}: {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },

    /// Bare IO error (compression streams)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Compression level outside 0-9
    #[error("invalid compression level {level} (expected 0-9)")]
    InvalidLevel { level: u32 },

    /// Extension cannot be part of the allow-set
    #[error("invalid extension '{extension}': {reason}")]
    InvalidExtension { extension: String, reason: String },

    /// `.assetgzignore` could not be loaded
    #[error("{0}")]
    Ignore(#[from] crate::domain::value_objects::IgnoreError),
}

impl AssetgzError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn metadata(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Metadata {
            path: path.into(),
            source,
        }
    }
}
