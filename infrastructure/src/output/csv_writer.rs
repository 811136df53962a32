//! CSV row sink
//!
//! Rows are written as three unnamed columns (`front`, `back`,
//! `reference`), minimally quoted and terminated by `\r\n`, which is what
//! flashcard importers expect from spreadsheet-style CSV.

use farlex_application::{RowSink, RowSinkFactory, SinkError};
use farlex_domain::FlashcardRow;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CSV_EXTENSION: &str = "csv";

/// [`RowSink`] writing to any byte stream
pub struct CsvRowWriter<W: Write> {
    writer: csv::Writer<W>,
    location: String,
    rows: usize,
}

impl<W: Write> CsvRowWriter<W> {
    pub fn new(inner: W, location: impl Into<String>) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(inner);
        Self {
            writer,
            location: location.into(),
            rows: 0,
        }
    }

    /// Rows written so far
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying stream
    pub fn into_inner(self) -> Result<W, SinkError> {
        let location = self.location;
        self.writer
            .into_inner()
            .map_err(|e| SinkError::Write {
                location,
                message: e.error().to_string(),
            })
    }

    fn write_error(&self, message: impl ToString) -> SinkError {
        SinkError::Write {
            location: self.location.clone(),
            message: message.to_string(),
        }
    }
}

impl CsvRowWriter<File> {
    /// Create (truncating) a CSV file
    pub fn create(path: &Path) -> Result<Self, SinkError> {
        let location = path.display().to_string();
        let file = File::create(path).map_err(|e| SinkError::Open {
            location: location.clone(),
            message: e.to_string(),
        })?;
        Ok(Self::new(file, location))
    }
}

impl<W: Write + Send> RowSink for CsvRowWriter<W> {
    fn write_row(&mut self, row: &FlashcardRow) -> Result<(), SinkError> {
        self.writer
            .write_record(row.columns())
            .map_err(|e| self.write_error(e))?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.writer.flush().map_err(|e| self.write_error(e))?;
        debug!("Flushed {} rows to {}", self.rows, self.location);
        Ok(())
    }

    fn location(&self) -> &str {
        &self.location
    }
}

/// Opens `<dir>/<stem>.csv` files
#[derive(Debug, Clone)]
pub struct CsvSinkFactory {
    dir: PathBuf,
}

impl CsvSinkFactory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output path for a stem; path separators in the stem are replaced
    pub fn path_for(&self, stem: &str) -> PathBuf {
        let file_stem = stem.replace(['/', '\\'], "_");
        self.dir.join(format!("{file_stem}.{CSV_EXTENSION}"))
    }
}

impl RowSinkFactory for CsvSinkFactory {
    fn open(&self, stem: &str) -> Result<Box<dyn RowSink>, SinkError> {
        let path = self.path_for(stem);
        info!("Writing flashcards to {}", path.display());
        Ok(Box::new(CsvRowWriter::create(&path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farlex_domain::{Choice, Question};
    use tempfile::TempDir;

    fn row(front: &str, back: &str) -> FlashcardRow {
        FlashcardRow {
            front: front.to_string(),
            back: back.to_string(),
            reference: "<a href=\"u\">u</a>".to_string(),
        }
    }

    #[test]
    fn test_rows_without_header_crlf_terminated() {
        let mut writer = CsvRowWriter::new(Vec::new(), "memory");
        writer.write_row(&row("Q<br><br>a. x", "a.")).unwrap();
        writer.write_row(&row("R", "")).unwrap();
        writer.finish().unwrap();
        assert_eq!(writer.rows(), 2);

        let bytes = writer.into_inner().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Q<br><br>a. x,a.,\"<a href=\"\"u\"\">u</a>\"\r\nR,,\"<a href=\"\"u\"\">u</a>\"\r\n"
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut writer = CsvRowWriter::new(Vec::new(), "memory");
        writer.write_row(&row("Yes, or no?", "b.")).unwrap();

        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert!(text.starts_with("\"Yes, or no?\",b.,"));
    }

    #[test]
    fn test_factory_writes_named_file() {
        let dir = TempDir::new().unwrap();
        let factory = CsvSinkFactory::new(dir.path());
        let question = Question::new("Pick one")
            .with_choice(Choice::new("a. this", false))
            .with_choice(Choice::new("b. that", true));

        let mut sink = factory.open("Grammar").unwrap();
        sink.write_row(&FlashcardRow::from_question(
            &question,
            "https://example.test/Nouns.htm",
        ))
        .unwrap();
        sink.finish().unwrap();

        let path = dir.path().join("Grammar.csv");
        assert_eq!(sink.location(), path.display().to_string());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .unwrap();
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "Pick one<br><br>a. this<br>b. that");
        assert_eq!(&records[0][1], "b.");
        assert_eq!(
            &records[0][2],
            "<a href=\"https://example.test/Nouns.htm\">https://example.test/Nouns.htm</a>"
        );
    }

    #[test]
    fn test_factory_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Nouns.csv"), "stale\r\n").unwrap();
        let factory = CsvSinkFactory::new(dir.path());

        let mut sink = factory.open("Nouns").unwrap();
        sink.finish().unwrap();

        assert_eq!(std::fs::read_to_string(dir.path().join("Nouns.csv")).unwrap(), "");
    }

    #[test]
    fn test_stem_separators_are_replaced() {
        let factory = CsvSinkFactory::new("quizzes");
        assert_eq!(
            factory.path_for("Spelling/Pronunciation"),
            PathBuf::from("quizzes").join("Spelling_Pronunciation.csv")
        );
    }

    #[test]
    fn test_missing_directory_is_an_open_error() {
        let dir = TempDir::new().unwrap();
        let factory = CsvSinkFactory::new(dir.path().join("missing"));

        let err = factory.open("Nouns").err().unwrap();
        assert!(matches!(err, SinkError::Open { .. }));
    }
}
