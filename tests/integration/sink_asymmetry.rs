//! Sink asymmetry: the same matched sequence yields a placeholder in text
//! output and a silent omission in archive output

use std::fs;
use std::fs::File;
use std::io::Read;
use tempfile::TempDir;
use treepack::selector::FileSelector;
use treepack::sink::{ArchiveSink, TextConcatSink};
use treepack::snapshot::{SnapshotBuilder, TraversalRequest};
use zip::ZipArchive;

fn setup_tree(root: &std::path::Path) -> TraversalRequest {
    fs::write(root.join("good.dart"), "void main() {}").unwrap();
    fs::write(root.join("broken.dart"), [0xC0, 0x80]).unwrap();
    TraversalRequest {
        root: root.to_path_buf(),
        excluded_dirs: Vec::new(),
        selector: FileSelector::extensions([".dart"]),
    }
}

#[test]
fn test_text_sink_renders_placeholder_for_unreadable() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let request = setup_tree(root);

    let out = root.join("snapshot.txt");
    let mut sink = TextConcatSink::create(&out).unwrap();
    let summary = SnapshotBuilder::new(request).build(&mut sink).unwrap();

    assert_eq!(summary.files_processed, 2);
    assert_eq!(summary.errors.len(), 1);

    let output = fs::read_to_string(&out).unwrap();
    assert!(output.contains("--- FILE: broken.dart ---"));
    assert!(output.contains("// Error reading file:"));
    assert!(output.contains("--- FILE: good.dart ---"));
}

#[test]
fn test_archive_sink_omits_unreadable() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let request = setup_tree(root);

    let out = root.join("snapshot.zip");
    let mut sink = ArchiveSink::create(&out).unwrap();
    let summary = SnapshotBuilder::new(request).build(&mut sink).unwrap();

    // The unreadable file still counts as processed and as an error
    assert_eq!(summary.files_processed, 2);
    assert_eq!(summary.errors.len(), 1);

    let mut archive = ZipArchive::new(File::open(&out).unwrap()).unwrap();
    assert_eq!(archive.len(), 1);

    let mut entry = archive.by_name("good.dart").unwrap();
    let mut contents = String::new();
    entry.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "void main() {}");
}

#[test]
fn test_both_sinks_report_identical_summaries() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let request = setup_tree(root);

    let text_out = root.join("snapshot.txt");
    let mut text_sink = TextConcatSink::create(&text_out).unwrap();
    let text_summary = SnapshotBuilder::new(request.clone())
        .build(&mut text_sink)
        .unwrap();

    // Remove the text artifact so the second walk sees the original tree
    fs::remove_file(&text_out).unwrap();

    let zip_out = root.join("snapshot.zip");
    let mut zip_sink = ArchiveSink::create(&zip_out).unwrap();
    let zip_summary = SnapshotBuilder::new(request).build(&mut zip_sink).unwrap();

    assert_eq!(text_summary.files_processed, zip_summary.files_processed);
    assert_eq!(text_summary.errors.len(), zip_summary.errors.len());
    assert_eq!(
        text_summary.errors[0].relative_path,
        zip_summary.errors[0].relative_path
    );
}

#[test]
fn test_archive_entries_use_posix_paths() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("lib").join("src")).unwrap();
    fs::write(root.join("lib").join("src").join("a.dart"), "a").unwrap();

    let request = TraversalRequest {
        root: root.to_path_buf(),
        excluded_dirs: Vec::new(),
        selector: FileSelector::extensions([".dart"]),
    };

    let out = root.join("snapshot.zip");
    let mut sink = ArchiveSink::create(&out).unwrap();
    SnapshotBuilder::new(request).build(&mut sink).unwrap();

    let archive = ZipArchive::new(File::open(&out).unwrap()).unwrap();
    let names: Vec<_> = archive.file_names().collect();
    assert_eq!(names, vec!["lib/src/a.dart"]);
}
