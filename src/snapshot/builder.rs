//! Snapshot builder: filtered traversal, content acquisition, sink feed

use crate::error::SnapshotError;
use crate::selector::FileSelector;
use crate::sink::OutputSink;
use crate::snapshot::{FileContent, FileError, MatchedFile, RunSummary};
use crate::walk::path as walk_path;
use crate::walk::walker::{Walker, WalkerConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Inputs for one snapshot run. Immutable for the duration of the run.
#[derive(Debug, Clone)]
pub struct TraversalRequest {
    /// Workspace root; canonicalized before the walk starts
    pub root: PathBuf,
    /// Directory names pruned before descent. Consulted only by
    /// extension-selected runs; pattern expansion skips hidden names instead.
    pub excluded_dirs: Vec<String>,
    pub selector: FileSelector,
}

/// Drives one run: traversal, filtering, per-file reads, and the sink.
pub struct SnapshotBuilder {
    request: TraversalRequest,
}

impl SnapshotBuilder {
    pub fn new(request: TraversalRequest) -> Self {
        Self { request }
    }

    /// Run the traversal and forward every matched file to the sink.
    ///
    /// A file that cannot be read or decoded becomes a
    /// [`FileContent::Unreadable`] emission and a `RunSummary` error entry;
    /// it never aborts the run. Fatal failures (missing root, sink I/O)
    /// propagate. Files already written to the sink stay written.
    pub fn build(&self, sink: &mut dyn OutputSink) -> Result<RunSummary, SnapshotError> {
        let root = walk_path::canonicalize_root(&self.request.root)
            .map_err(|_| SnapshotError::RootNotFound(self.request.root.clone()))?;

        let matched = self.matched_paths(&root)?;
        debug!(count = matched.len(), "traversal complete");

        let mut summary = RunSummary {
            files_processed: 0,
            errors: Vec::new(),
        };

        for path in matched {
            let relative = walk_path::relative_to_root(&path, &root)?;
            let content = read_content(&path);
            if let FileContent::Unreadable(ref message) = content {
                warn!(path = %relative.display(), "failed to read file: {}", message);
                summary.errors.push(FileError {
                    relative_path: walk_path::to_posix(&relative),
                    message: message.clone(),
                });
            }
            sink.write(&MatchedFile {
                relative_path: relative,
                content,
            })?;
            summary.files_processed += 1;
        }

        sink.finish()?;
        Ok(summary)
    }

    /// Enumerate the workspace-relative paths a run would emit, in emission
    /// order, without reading contents or opening a sink. Used by dry runs.
    pub fn preview(&self) -> Result<Vec<String>, SnapshotError> {
        let root = walk_path::canonicalize_root(&self.request.root)
            .map_err(|_| SnapshotError::RootNotFound(self.request.root.clone()))?;
        let mut entries = Vec::new();
        for path in self.matched_paths(&root)? {
            let relative = walk_path::relative_to_root(&path, &root)?;
            entries.push(walk_path::to_posix(&relative));
        }
        Ok(entries)
    }

    /// Absolute paths of matched files, in emission order.
    fn matched_paths(&self, root: &Path) -> Result<Vec<PathBuf>, SnapshotError> {
        match &self.request.selector {
            FileSelector::Extensions { .. } => self.matched_by_extension(root),
            FileSelector::Patterns { patterns } => self.matched_by_patterns(root, patterns),
        }
    }

    fn matched_by_extension(&self, root: &Path) -> Result<Vec<PathBuf>, SnapshotError> {
        let config = WalkerConfig {
            excluded_dirs: self.request.excluded_dirs.clone(),
            ..WalkerConfig::default()
        };
        let walker = Walker::with_config(root.to_path_buf(), config);

        let mut matched = Vec::new();
        for path in walker.files()? {
            let name = match path.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => continue,
            };
            if self.request.selector.matches_file_name(&name) {
                matched.push(path);
            }
        }
        Ok(matched)
    }

    /// Resolve each pattern in declaration order. A directory pattern
    /// expands to its non-hidden files (sorted); a file pattern yields that
    /// file, hidden or not. A file reachable via several pattern occurrences
    /// is emitted once per occurrence. Patterns resolving to nothing are
    /// skipped.
    fn matched_by_patterns(
        &self,
        root: &Path,
        patterns: &[String],
    ) -> Result<Vec<PathBuf>, SnapshotError> {
        let mut matched = Vec::new();
        for pattern in patterns {
            let resolved = root.join(pattern);
            if resolved.is_dir() {
                matched.extend(Walker::visible_files_under(&resolved)?);
            } else if resolved.is_file() {
                matched.push(resolved);
            } else {
                debug!(pattern = %pattern, "pattern matched nothing, skipping");
            }
        }
        Ok(matched)
    }
}

/// Read and UTF-8 decode a file. Any I/O or decode failure becomes an
/// `Unreadable` marker; the caller decides how to render it.
fn read_content(path: &Path) -> FileContent {
    match std::fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => FileContent::Text(text),
            Err(e) => FileContent::Unreadable(format!("invalid UTF-8: {}", e)),
        },
        Err(e) => FileContent::Unreadable(e.to_string()),
    }
}
