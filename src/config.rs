//! Configuration System
//!
//! TOML-backed configuration for snapshot runs: excluded directories,
//! selector defaults, output paths, and logging. A workspace `treepack.toml`
//! overrides the built-in defaults; CLI flags override both.

use crate::error::SnapshotError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory names pruned by default: VCS metadata, build artifacts, and
/// platform-specific generated trees.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".dart_tool",
    "build",
    "ios",
    "android",
    "windows",
    "linux",
    "macos",
];

/// Extensions included by default in extension-selected runs
pub const DEFAULT_EXTENSIONS: &[&str] = &[".dart", ".yaml", ".json"];

/// Patterns included by default in pattern-selected runs
pub const DEFAULT_PATTERNS: &[&str] = &[
    "lib/main.dart",
    "pubspec.yaml",
    "analysis_options.yaml",
    "README.md",
];

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreepackConfig {
    /// Workspace root path (defaults to the CLI --workspace value)
    pub workspace_root: Option<PathBuf>,

    /// Snapshot defaults
    #[serde(default)]
    pub snapshot: SnapshotConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Snapshot run defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Directory names pruned before descent
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    /// Default extension set for extension-selected runs
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Default pattern list for pattern-selected runs
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,

    /// Default text snapshot destination
    #[serde(default = "default_text_output")]
    pub text_output: PathBuf,

    /// Default archive snapshot destination
    #[serde(default = "default_archive_output")]
    pub archive_output: PathBuf,
}

fn default_excluded_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(|s| (*s).to_string()).collect()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect()
}

fn default_patterns() -> Vec<String> {
    DEFAULT_PATTERNS.iter().map(|s| (*s).to_string()).collect()
}

fn default_text_output() -> PathBuf {
    PathBuf::from("all_code.txt")
}

fn default_archive_output() -> PathBuf {
    PathBuf::from("snapshot.zip")
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: default_excluded_dirs(),
            extensions: default_extensions(),
            patterns: default_patterns(),
            text_output: default_text_output(),
            archive_output: default_archive_output(),
        }
    }
}

impl Default for TreepackConfig {
    fn default() -> Self {
        Self {
            workspace_root: None,
            snapshot: SnapshotConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Snapshot(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Snapshot(msg) => write!(f, "Snapshot: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl SnapshotConfig {
    /// Validate snapshot defaults
    pub fn validate(&self) -> Result<(), String> {
        for ext in &self.extensions {
            if ext.is_empty() {
                return Err("Extension cannot be empty".to_string());
            }
            if !ext.starts_with('.') {
                return Err(format!("Extension '{}' must start with '.'", ext));
            }
        }
        for pattern in &self.patterns {
            if pattern.is_empty() {
                return Err("Pattern cannot be empty".to_string());
            }
            if Path::new(pattern).is_absolute() {
                return Err(format!("Pattern '{}' must be workspace-relative", pattern));
            }
        }
        if self.text_output.as_os_str().is_empty() {
            return Err("Text output path cannot be empty".to_string());
        }
        if self.archive_output.as_os_str().is_empty() {
            return Err("Archive output path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl TreepackConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.snapshot.validate() {
            errors.push(ValidationError::Snapshot(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Loads configuration from the workspace or an explicit file
pub struct ConfigLoader;

impl ConfigLoader {
    /// Workspace configuration file name
    pub const WORKSPACE_CONFIG_FILE: &'static str = "treepack.toml";

    /// Load configuration for a workspace: `<root>/treepack.toml` when
    /// present, built-in defaults otherwise.
    pub fn load(workspace_root: &Path) -> Result<TreepackConfig, SnapshotError> {
        let path = workspace_root.join(Self::WORKSPACE_CONFIG_FILE);
        if path.is_file() {
            Self::load_from_file(&path)
        } else {
            Ok(TreepackConfig::default())
        }
    }

    /// Load configuration from an explicit file path
    pub fn load_from_file(path: &Path) -> Result<TreepackConfig, SnapshotError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SnapshotError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&contents).map_err(|e| {
            SnapshotError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }
}
