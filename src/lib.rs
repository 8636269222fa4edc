//! Treepack: Filtered Project Tree Snapshots
//!
//! Walks a project directory tree, filters files by extension or an explicit
//! pattern list, and renders the selection either as a single delimited text
//! file or as a deflate-compressed zip archive.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod selector;
pub mod sink;
pub mod snapshot;
pub mod walk;
