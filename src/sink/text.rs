//! Delimited text sink: one fenced section per file

use crate::error::SnapshotError;
use crate::sink::OutputSink;
use crate::snapshot::{FileContent, MatchedFile};
use crate::walk::path::to_posix;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Fence language tags for known source extensions
const LANGUAGE_TAGS: &[(&str, &str)] = &[
    (".dart", "dart"),
    (".rs", "rust"),
    (".py", "python"),
    (".json", "json"),
    (".yaml", "yaml"),
    (".yml", "yaml"),
    (".toml", "toml"),
    (".js", "javascript"),
    (".ts", "typescript"),
    (".md", "markdown"),
    (".sh", "bash"),
    (".html", "html"),
    (".css", "css"),
];

fn language_tag(file_name: &str) -> Option<&'static str> {
    LANGUAGE_TAGS
        .iter()
        .find(|(ext, _)| file_name.ends_with(ext))
        .map(|(_, tag)| *tag)
}

/// Appends one delimited section per file: a `--- FILE: <path> ---` header
/// line followed by a backtick-fenced block (tagged when the extension is a
/// known language) holding the file content.
///
/// The destination is opened once at construction and written in a single
/// pass. An unreadable file gets an inline error comment in place of
/// content, inside an untagged fence.
pub struct TextConcatSink {
    writer: BufWriter<File>,
}

impl TextConcatSink {
    pub fn create(path: &Path) -> Result<Self, SnapshotError> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl OutputSink for TextConcatSink {
    fn write(&mut self, file: &MatchedFile) -> Result<(), SnapshotError> {
        write!(
            self.writer,
            "\n\n--- FILE: {} ---\n",
            to_posix(&file.relative_path)
        )?;
        match &file.content {
            FileContent::Text(text) => {
                let name = file
                    .relative_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                match language_tag(&name) {
                    Some(tag) => writeln!(self.writer, "```{}", tag)?,
                    None => writeln!(self.writer, "```")?,
                }
                self.writer.write_all(text.as_bytes())?;
                write!(self.writer, "\n```\n")?;
            }
            FileContent::Unreadable(message) => {
                writeln!(self.writer, "```")?;
                write!(self.writer, "// Error reading file: {}", message)?;
                write!(self.writer, "\n```\n")?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SnapshotError> {
        self.writer.flush()?;
        Ok(())
    }
}
