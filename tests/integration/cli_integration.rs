//! CLI integration: parsing, routing, config file precedence

use clap::Parser;
use std::fs;
use tempfile::TempDir;
use treepack::cli::{Cli, Commands, RunContext};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn test_parse_text_command_flags() {
    let cli = parse(&[
        "treepack",
        "--workspace",
        "/tmp/ws",
        "text",
        "--ext",
        ".dart",
        "--ext",
        ".yaml",
        "--exclude",
        "build",
        "--output",
        "out.txt",
    ]);

    match cli.command {
        Commands::Text {
            extensions,
            excluded_dirs,
            output,
            dry_run,
            ..
        } => {
            assert_eq!(extensions, vec![".dart", ".yaml"]);
            assert_eq!(excluded_dirs, vec!["build"]);
            assert_eq!(output.unwrap().to_string_lossy(), "out.txt");
            assert!(!dry_run);
        }
        _ => panic!("expected text command"),
    }
}

#[test]
fn test_ext_and_pattern_conflict() {
    let result = Cli::try_parse_from([
        "treepack",
        "text",
        "--ext",
        ".dart",
        "--pattern",
        "lib",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_execute_text_writes_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("main.dart"), "void main() {}").unwrap();

    let context = RunContext::new(root.to_path_buf(), None).unwrap();
    let cli = parse(&["treepack", "text", "--ext", ".dart"]);
    let message = context.execute(&cli.command).unwrap();

    assert!(message.contains("Snapshot written:"));
    assert!(message.contains("(1 files)"));
    let output = fs::read_to_string(root.join("all_code.txt")).unwrap();
    assert!(output.contains("--- FILE: main.dart ---"));
}

#[test]
fn test_execute_archive_uses_configured_patterns() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("lib")).unwrap();
    fs::write(root.join("lib").join("main.dart"), "m").unwrap();
    fs::write(root.join("pubspec.yaml"), "name: x").unwrap();
    fs::write(
        root.join("treepack.toml"),
        r#"
[snapshot]
patterns = ["lib", "pubspec.yaml"]
archive_output = "bundle.zip"
"#,
    )
    .unwrap();

    let context = RunContext::new(root.to_path_buf(), None).unwrap();
    let cli = parse(&["treepack", "archive"]);
    let message = context.execute(&cli.command).unwrap();

    assert!(message.contains("bundle.zip"));
    let archive =
        zip::ZipArchive::new(fs::File::open(root.join("bundle.zip")).unwrap()).unwrap();
    let mut names: Vec<_> = archive.file_names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["lib/main.dart", "pubspec.yaml"]);
}

#[test]
fn test_dry_run_lists_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("main.dart"), "m").unwrap();

    let context = RunContext::new(root.to_path_buf(), None).unwrap();
    let cli = parse(&["treepack", "text", "--ext", ".dart", "--dry-run"]);
    let message = context.execute(&cli.command).unwrap();

    assert!(message.contains("Would include (1 files):"));
    assert!(message.contains("main.dart"));
    assert!(!root.join("all_code.txt").exists());
}

#[test]
fn test_json_summary_format() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("main.dart"), "m").unwrap();

    let context = RunContext::new(root.to_path_buf(), None).unwrap();
    let cli = parse(&["treepack", "text", "--ext", ".dart", "--format", "json"]);
    let message = context.execute(&cli.command).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&message).unwrap();
    assert_eq!(parsed["files_processed"], 1);
}

#[test]
fn test_explicit_config_file_overrides_workspace() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("script.py"), "print('hi')").unwrap();
    // Workspace config selects .dart; the explicit file selects .py
    fs::write(
        root.join("treepack.toml"),
        "[snapshot]\nextensions = [\".dart\"]\n",
    )
    .unwrap();
    let alt_config = root.join("alt.toml");
    fs::write(&alt_config, "[snapshot]\nextensions = [\".py\"]\n").unwrap();

    let context = RunContext::new(root.to_path_buf(), Some(alt_config)).unwrap();
    let cli = parse(&["treepack", "text", "--dry-run"]);
    let message = context.execute(&cli.command).unwrap();

    assert!(message.contains("script.py"));
}
