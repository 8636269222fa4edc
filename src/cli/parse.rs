//! CLI parse: clap types for treepack. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Treepack CLI - filtered project tree snapshots
#[derive(Parser)]
#[command(name = "treepack")]
#[command(about = "Bundle a filtered project tree into a text file or zip archive")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging output
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a delimited text snapshot of the filtered tree
    Text {
        /// Output file (default: configured text_output)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Extension to include, e.g. ".dart" (repeatable; default: configured set)
        #[arg(long = "ext")]
        extensions: Vec<String>,

        /// Workspace-relative file or directory to include (repeatable)
        #[arg(long = "pattern", conflicts_with = "extensions")]
        patterns: Vec<String>,

        /// Directory name to exclude from the walk (repeatable; default: configured set)
        #[arg(long = "exclude")]
        excluded_dirs: Vec<String>,

        /// List matched files without writing the snapshot
        #[arg(long)]
        dry_run: bool,

        /// Run summary format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Write a zip snapshot of the filtered tree
    Archive {
        /// Output file (default: configured archive_output)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Workspace-relative file or directory to include (repeatable; default: configured list)
        #[arg(long = "pattern")]
        patterns: Vec<String>,

        /// Extension to include, e.g. ".dart" (repeatable)
        #[arg(long = "ext", conflicts_with = "patterns")]
        extensions: Vec<String>,

        /// Directory name to exclude from the walk (repeatable; extension mode only)
        #[arg(long = "exclude")]
        excluded_dirs: Vec<String>,

        /// List matched files without writing the snapshot
        #[arg(long)]
        dry_run: bool,

        /// Run summary format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
