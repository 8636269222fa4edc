//! Zip archive sink: one compressed entry per readable file

use crate::error::SnapshotError;
use crate::sink::OutputSink;
use crate::snapshot::{FileContent, MatchedFile};
use crate::walk::path::to_posix;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writes one deflate-compressed entry per readable file, named by its
/// POSIX-style relative path. Unreadable files produce no entry at all: an
/// archive has no placeholder concept, unlike the text sink.
pub struct ArchiveSink {
    // Taken by finish(); ZipWriter::finish consumes the writer to emit the
    // central directory.
    writer: Option<ZipWriter<File>>,
}

impl ArchiveSink {
    pub fn create(path: &Path) -> Result<Self, SnapshotError> {
        let file = File::create(path)?;
        Ok(Self {
            writer: Some(ZipWriter::new(file)),
        })
    }

    fn entry_options() -> SimpleFileOptions {
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
    }

    fn writer(&mut self) -> Result<&mut ZipWriter<File>, SnapshotError> {
        self.writer.as_mut().ok_or_else(|| {
            SnapshotError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                "archive sink already closed",
            ))
        })
    }
}

impl OutputSink for ArchiveSink {
    fn write(&mut self, file: &MatchedFile) -> Result<(), SnapshotError> {
        match &file.content {
            FileContent::Text(text) => {
                let entry_name = to_posix(&file.relative_path);
                let writer = self.writer()?;
                writer.start_file(entry_name, Self::entry_options())?;
                writer.write_all(text.as_bytes())?;
            }
            FileContent::Unreadable(message) => {
                debug!(
                    path = %file.relative_path.display(),
                    "skipping unreadable file: {}", message
                );
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SnapshotError> {
        if let Some(writer) = self.writer.take() {
            writer.finish()?;
        }
        Ok(())
    }
}
