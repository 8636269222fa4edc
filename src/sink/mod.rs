//! Output sinks
//!
//! A sink owns the run's destination handle: opened once at construction,
//! appended to sequentially, closed exactly once via `finish`.

pub mod archive;
pub mod text;

pub use archive::ArchiveSink;
pub use text::TextConcatSink;

use crate::error::SnapshotError;
use crate::snapshot::MatchedFile;

/// Destination for matched files. The builder calls `write` once per file
/// in emission order, then `finish` exactly once after the last write.
pub trait OutputSink {
    fn write(&mut self, file: &MatchedFile) -> Result<(), SnapshotError>;

    /// Flush and close the destination.
    fn finish(&mut self) -> Result<(), SnapshotError>;
}
