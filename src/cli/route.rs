//! CLI route: single route table and run context. Dispatches to the
//! snapshot builder and presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation::{format_dry_run, format_run_summary};
use crate::config::{ConfigLoader, TreepackConfig};
use crate::error::SnapshotError;
use crate::selector::FileSelector;
use crate::sink::{ArchiveSink, TextConcatSink};
use crate::snapshot::{SnapshotBuilder, TraversalRequest};
use crate::walk::path as walk_path;
use std::path::{Path, PathBuf};
use tracing::info;

/// Which configured selector a command falls back to when no --ext or
/// --pattern flags are given
enum SelectorDefault {
    Extensions,
    Patterns,
}

/// Runtime context for CLI execution: workspace root and loaded config.
/// Built from the workspace path and optional config path using ConfigLoader.
pub struct RunContext {
    workspace_root: PathBuf,
    config: TreepackConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, SnapshotError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            SnapshotError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        let workspace_root = config
            .workspace_root
            .clone()
            .unwrap_or(workspace_root);
        let workspace_root = walk_path::canonicalize_root(&workspace_root)
            .map_err(|_| SnapshotError::RootNotFound(workspace_root))?;

        Ok(Self {
            workspace_root,
            config,
        })
    }

    /// Workspace root after canonicalization.
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, SnapshotError> {
        match command {
            Commands::Text {
                output,
                extensions,
                patterns,
                excluded_dirs,
                dry_run,
                format,
            } => {
                let request =
                    self.request(extensions, patterns, excluded_dirs, SelectorDefault::Extensions);
                if *dry_run {
                    let entries = SnapshotBuilder::new(request).preview()?;
                    return format_dry_run(&entries, format);
                }
                let out = self.resolve_output(output.as_deref(), &self.config.snapshot.text_output);
                info!(output = %out.display(), "writing text snapshot");
                let mut sink = TextConcatSink::create(&out)?;
                let summary = SnapshotBuilder::new(request).build(&mut sink)?;
                format_run_summary(&out, &summary, format)
            }
            Commands::Archive {
                output,
                patterns,
                extensions,
                excluded_dirs,
                dry_run,
                format,
            } => {
                let request =
                    self.request(extensions, patterns, excluded_dirs, SelectorDefault::Patterns);
                if *dry_run {
                    let entries = SnapshotBuilder::new(request).preview()?;
                    return format_dry_run(&entries, format);
                }
                let out =
                    self.resolve_output(output.as_deref(), &self.config.snapshot.archive_output);
                info!(output = %out.display(), "writing archive snapshot");
                let mut sink = ArchiveSink::create(&out)?;
                let summary = SnapshotBuilder::new(request).build(&mut sink)?;
                format_run_summary(&out, &summary, format)
            }
        }
    }

    /// Assemble the traversal request from CLI flags, falling back to the
    /// configured selector for the command.
    fn request(
        &self,
        extensions: &[String],
        patterns: &[String],
        excluded_dirs: &[String],
        default: SelectorDefault,
    ) -> TraversalRequest {
        let selector = if !extensions.is_empty() {
            FileSelector::extensions(extensions.iter().map(|e| normalize_extension(e)))
        } else if !patterns.is_empty() {
            FileSelector::patterns(patterns.iter().cloned())
        } else {
            match default {
                SelectorDefault::Extensions => {
                    FileSelector::extensions(self.config.snapshot.extensions.iter().cloned())
                }
                SelectorDefault::Patterns => {
                    FileSelector::patterns(self.config.snapshot.patterns.iter().cloned())
                }
            }
        };

        let excluded = if excluded_dirs.is_empty() {
            self.config.snapshot.excluded_dirs.clone()
        } else {
            excluded_dirs.to_vec()
        };

        TraversalRequest {
            root: self.workspace_root.clone(),
            excluded_dirs: excluded,
            selector,
        }
    }

    /// Relative output paths land inside the workspace root.
    fn resolve_output(&self, flag: Option<&Path>, configured: &Path) -> PathBuf {
        let chosen = flag.unwrap_or(configured);
        if chosen.is_absolute() {
            chosen.to_path_buf()
        } else {
            self.workspace_root.join(chosen)
        }
    }
}

/// Accept "--ext dart" as well as "--ext .dart".
fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}
