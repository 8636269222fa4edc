//! Snapshot construction
//!
//! A snapshot run is a filtered tree walk feeding per-file (path, content)
//! pairs into an output sink. The data model here is shared by the builder
//! and both sink implementations.

pub mod builder;

pub use builder::{SnapshotBuilder, TraversalRequest};

use serde::Serialize;
use std::path::PathBuf;

/// Result of reading one matched file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// UTF-8 decoded file content
    Text(String),
    /// The file could not be read or decoded; carries a human-readable
    /// message rendered by the sink instead of content
    Unreadable(String),
}

/// A file selected by the traversal, addressed relative to the workspace
/// root (never absolute)
#[derive(Debug, Clone)]
pub struct MatchedFile {
    pub relative_path: PathBuf,
    pub content: FileContent,
}

/// Summary of one snapshot run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Files forwarded to the sink, unreadable ones included
    pub files_processed: usize,
    /// Per-file read failures, in emission order
    pub errors: Vec<FileError>,
}

/// One per-file read failure
#[derive(Debug, Clone, Serialize)]
pub struct FileError {
    pub relative_path: String,
    pub message: String,
}
