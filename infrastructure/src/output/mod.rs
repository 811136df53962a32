//! Flashcard CSV output

mod csv_writer;

pub use csv_writer::{CSV_EXTENSION, CsvRowWriter, CsvSinkFactory};
