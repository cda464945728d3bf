//! Global error handling for tidyfs
//!
//! Fatal conditions abort the run and surface as the payload's top-level
//! `error` field; everything else is recorded per operation and the run
//! continues.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for tidyfs operations
#[derive(Error, Debug)]
pub enum TidyFsError {
    /// The target directory could not be opened for enumeration
    #[error("failed to read directory {}: {source}", path.display())]
    DirectoryOpen { path: PathBuf, source: io::Error },

    /// The populate directory could not be created
    #[error("failed to create directory {}: {source}", path.display())]
    DirectoryCreate { path: PathBuf, source: io::Error },

    /// Asset-mode populate found nothing to copy
    #[error("no usable assets under {}", .0.display())]
    NoAssets(PathBuf),

    /// Invalid argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON processing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Specialized Result type for tidyfs operations
pub type Result<T> = std::result::Result<T, TidyFsError>;
