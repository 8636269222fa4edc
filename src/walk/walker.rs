//! Filesystem walker for enumerating snapshot candidates

use crate::error::WalkError;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false; a cycle cannot
    /// form when links are never traversed)
    pub follow_symlinks: bool,
    /// Directory names pruned before descent (e.g. "build", ".git")
    pub excluded_dirs: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            excluded_dirs: crate::config::DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            max_depth: None,
        }
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Enumerate all files under the root.
    ///
    /// Subdirectories whose name is in `excluded_dirs` are pruned before
    /// descent, so nothing beneath them is ever read. Returns paths sorted
    /// for determinism.
    pub fn files(&self) -> Result<Vec<PathBuf>, WalkError> {
        let excluded = self.config.excluded_dirs.clone();
        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .into_iter()
            .filter_entry(move |entry| !is_excluded_dir(entry, &excluded));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                WalkError::IoError(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Failed to walk directory: {}", e),
                ))
            })?;
            if entry.file_type().is_file() {
                files.push(entry.path().to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Enumerate all files beneath `dir`, skipping any file or directory
    /// whose name starts with '.'. Used for pattern expansion, where the
    /// exclusion list does not apply. Returns paths sorted for determinism.
    pub fn visible_files_under(dir: &Path) -> Result<Vec<PathBuf>, WalkError> {
        let walker = WalkDir::new(dir)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !is_hidden(entry));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                WalkError::IoError(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Failed to walk directory: {}", e),
                ))
            })?;
            if entry.file_type().is_file() {
                files.push(entry.path().to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }
}

/// A subdirectory is pruned when its own name matches an excluded name.
/// The root itself (depth 0) is never pruned, even if its name matches.
fn is_excluded_dir(entry: &DirEntry, excluded: &[String]) -> bool {
    entry.file_type().is_dir()
        && entry.depth() > 0
        && excluded
            .iter()
            .any(|name| entry.file_name().to_string_lossy() == name.as_str())
}

/// Hidden entries have a name starting with '.'; the walk root is exempt.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}
