//! Presentation: run summary and dry-run formatters.

use crate::error::SnapshotError;
use crate::snapshot::RunSummary;
use serde_json::json;
use std::path::Path;

/// Format the completion message for a finished run.
pub fn format_run_summary(
    output: &Path,
    summary: &RunSummary,
    format: &str,
) -> Result<String, SnapshotError> {
    match format {
        "json" => serde_json::to_string_pretty(&json!({
            "output": output.display().to_string(),
            "files_processed": summary.files_processed,
            "errors": summary.errors,
        }))
        .map_err(|e| SnapshotError::ConfigError(e.to_string())),
        _ => {
            let mut s = format!(
                "Snapshot written: {} ({} files)",
                output.display(),
                summary.files_processed
            );
            if !summary.errors.is_empty() {
                s.push_str(&format!("\n\nUnreadable files ({}):", summary.errors.len()));
                for e in &summary.errors {
                    s.push_str(&format!("\n  - {}: {}", e.relative_path, e.message));
                }
            }
            Ok(s)
        }
    }
}

/// Format the matched-file listing for a dry run.
pub fn format_dry_run(entries: &[String], format: &str) -> Result<String, SnapshotError> {
    match format {
        "json" => serde_json::to_string_pretty(&json!({ "would_include": entries }))
            .map_err(|e| SnapshotError::ConfigError(e.to_string())),
        _ => {
            if entries.is_empty() {
                Ok("No files matched.".to_string())
            } else {
                let mut lines: Vec<String> = entries
                    .iter()
                    .enumerate()
                    .map(|(i, p)| format!("  {}. {}", i + 1, p))
                    .collect();
                lines.insert(0, format!("Would include ({} files):", entries.len()));
                Ok(lines.join("\n"))
            }
        }
    }
}
