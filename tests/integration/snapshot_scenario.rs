//! End-to-end snapshot scenario: mixed tree with an excluded directory and
//! an unreadable file

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use treepack::selector::FileSelector;
use treepack::sink::TextConcatSink;
use treepack::snapshot::{SnapshotBuilder, TraversalRequest};

/// Flutter-shaped tree: two good files, one excluded, one unreadable
fn setup_project(root: &Path) {
    fs::create_dir(root.join("lib")).unwrap();
    fs::write(root.join("lib").join("main.dart"), "void main() {}\n").unwrap();
    fs::write(root.join("pubspec.yaml"), "name: kakeibo\n").unwrap();
    fs::create_dir(root.join("build")).unwrap();
    fs::write(root.join("build").join("generated.dart"), "// generated\n").unwrap();
    fs::write(root.join("lib").join("broken.dart"), [0xFF, 0xFE, 0x80]).unwrap();
}

fn run_text_snapshot(root: &Path, out: &Path) -> treepack::snapshot::RunSummary {
    let request = TraversalRequest {
        root: root.to_path_buf(),
        excluded_dirs: vec!["build".to_string()],
        selector: FileSelector::extensions([".dart", ".yaml"]),
    };
    let mut sink = TextConcatSink::create(out).unwrap();
    SnapshotBuilder::new(request).build(&mut sink).unwrap()
}

#[test]
fn test_scenario_sections_and_exclusions() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    setup_project(root);

    let out = root.join("all_code.txt");
    let summary = run_text_snapshot(root, &out);
    let output = fs::read_to_string(&out).unwrap();

    // Three matched files: main.dart, pubspec.yaml, broken.dart
    assert_eq!(summary.files_processed, 3);
    assert_eq!(summary.errors.len(), 1);
    assert_eq!(summary.errors[0].relative_path, "lib/broken.dart");

    assert!(output.contains("--- FILE: lib/main.dart ---"));
    assert!(output.contains("```dart\nvoid main() {}\n"));
    assert!(output.contains("--- FILE: pubspec.yaml ---"));
    assert!(output.contains("```yaml\nname: kakeibo\n"));

    // Unreadable file surfaces as a placeholder, not an abort
    assert!(output.contains("--- FILE: lib/broken.dart ---"));
    assert!(output.contains("// Error reading file:"));

    // Nothing beneath the excluded directory appears anywhere
    assert!(!output.contains("generated.dart"));
    assert!(!output.contains("build/"));
}

#[test]
fn test_two_runs_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    setup_project(root);

    let out1 = root.join("run1.txt");
    let out2 = root.join("run2.txt");
    run_text_snapshot(root, &out1);
    run_text_snapshot(root, &out2);

    // run1.txt matches neither extension, so the second walk sees the same set
    let bytes1 = fs::read(&out1).unwrap();
    let bytes2 = fs::read(&out2).unwrap();
    assert_eq!(bytes1, bytes2);
}

#[test]
fn test_summary_counts_only_matched_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    setup_project(root);
    fs::write(root.join("notes.txt"), "not matched").unwrap();

    let out = root.join("all_code.txt");
    let summary = run_text_snapshot(root, &out);

    assert_eq!(summary.files_processed, 3);
    let output = fs::read_to_string(&out).unwrap();
    assert!(!output.contains("notes.txt"));
}
