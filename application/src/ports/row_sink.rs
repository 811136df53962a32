//! Row sink port
//!
//! The single output destination of a run. Rows are written strictly in
//! traversal order by one writer.

use farlex_domain::FlashcardRow;
use thiserror::Error;

/// Errors that can occur while writing rows
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Cannot open output {location}: {message}")]
    Open { location: String, message: String },

    #[error("Cannot write to {location}: {message}")]
    Write { location: String, message: String },
}

/// Destination for flashcard rows
pub trait RowSink: Send {
    /// Append one row
    fn write_row(&mut self, row: &FlashcardRow) -> Result<(), SinkError>;

    /// Flush everything written so far
    fn finish(&mut self) -> Result<(), SinkError>;

    /// Human-readable location (file path) of this sink
    fn location(&self) -> &str;
}

/// Opens the output destination for a run
pub trait RowSinkFactory: Send + Sync {
    /// Open (truncating) the destination named by `stem`
    fn open(&self, stem: &str) -> Result<Box<dyn RowSink>, SinkError>;
}
