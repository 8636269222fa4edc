//! Error types for the snapshot builder.

use std::path::PathBuf;
use thiserror::Error;

/// Traversal-related errors
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Walk I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Crate-level errors surfaced to the CLI
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Root directory not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Walk error: {0}")]
    WalkError(#[from] WalkError),

    #[error("Sink I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    ArchiveError(#[from] zip::result::ZipError),
}
