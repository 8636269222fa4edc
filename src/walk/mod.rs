//! Filtered filesystem traversal
//!
//! Enumerates snapshot candidates under a workspace root, pruning excluded
//! directory names before descent and normalizing paths for entry names.

pub mod path;
pub mod walker;
