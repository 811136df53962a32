//! Scrape Page use case
//!
//! Fetches one page, extracts its quiz and writes one flashcard row per
//! question. This is the single-page path and the unit of work of a
//! section walk.

use crate::ports::page_parser::{PageParseError, PageParser};
use crate::ports::page_source::{FetchError, PageSource};
use crate::ports::row_sink::{RowSink, SinkError};
use farlex_domain::{FlashcardRow, PageId, Quiz, extract_quiz};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort an export run
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Unexpected document shape: {0}")]
    Parse(#[from] PageParseError),

    #[error("Output failed: {0}")]
    Sink(#[from] SinkError),
}

/// What happened to one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    pub page: PageId,
    /// Served from the page cache (no network I/O, no politeness pause)
    pub was_cached: bool,
    /// Number of questions found, `None` when the page has no quiz region
    pub questions: Option<usize>,
    /// Rows written to the sink
    pub rows_written: usize,
    /// Rows written with an empty answer (no choice marked correct)
    pub unanswered: usize,
    /// Politeness pause taken after this page, if any
    pub pause: Option<Duration>,
}

impl PageOutcome {
    pub fn has_quiz(&self) -> bool {
        self.questions.is_some()
    }
}

/// A fetched page's extraction result
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    pub quiz: Option<Quiz>,
    pub was_cached: bool,
}

/// Use case for turning one page into flashcard rows
pub struct ScrapePageUseCase {
    source: Arc<dyn PageSource>,
    parser: Arc<dyn PageParser>,
}

impl ScrapePageUseCase {
    pub fn new(source: Arc<dyn PageSource>, parser: Arc<dyn PageParser>) -> Self {
        Self { source, parser }
    }

    /// Fetch a page and extract its quiz without writing anything
    pub async fn extract(&self, page: &PageId) -> Result<ExtractedPage, ExportError> {
        info!("Fetching quizzes from {}", page);
        let fetched = self.source.fetch(page).await?;
        if fetched.was_cached {
            debug!("{} served from cache", page);
        }

        let nodes = self.parser.quiz_nodes(&fetched.content);
        debug!("{}: {} quiz nodes", page, nodes.len());

        Ok(ExtractedPage {
            quiz: extract_quiz(&nodes),
            was_cached: fetched.was_cached,
        })
    }

    /// Fetch, extract and write a page's quiz to `sink`.
    ///
    /// Pages without a quiz region write nothing and are not an error.
    pub async fn execute(
        &self,
        page: &PageId,
        sink: &mut dyn RowSink,
    ) -> Result<PageOutcome, ExportError> {
        let extracted = self.extract(page).await?;

        let mut outcome = PageOutcome {
            page: page.clone(),
            was_cached: extracted.was_cached,
            questions: None,
            rows_written: 0,
            unanswered: 0,
            pause: None,
        };

        let Some(quiz) = extracted.quiz else {
            debug!("{} has no quiz", page);
            return Ok(outcome);
        };

        outcome.questions = Some(quiz.len());
        let url = self.source.page_url(page);
        for question in &quiz {
            let row = FlashcardRow::from_question(question, &url);
            if !row.has_answer() {
                warn!(
                    "{}: no choice marked correct for {:?}",
                    page,
                    farlex_domain::string::truncate(&question.text, 60)
                );
                outcome.unanswered += 1;
            }
            sink.write_row(&row)?;
            outcome.rows_written += 1;
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::testing::{MemorySink, MockParser, MockSource, quiz_page};
    use farlex_domain::QuizNode;

    fn page(slug: &str) -> PageId {
        PageId::new(slug).unwrap()
    }

    fn use_case(source: Arc<MockSource>) -> ScrapePageUseCase {
        ScrapePageUseCase::new(source, Arc::new(MockParser::default()))
    }

    #[tokio::test]
    async fn test_two_questions_become_two_rows() {
        let source = Arc::new(MockSource::new().with_remote(
            "Nouns",
            quiz_page(&[
                QuizNode::marker("1. Capital of France?"),
                QuizNode::radio(true),
                QuizNode::label("a. Paris"),
                QuizNode::radio(false),
                QuizNode::label("b. Lyon"),
                QuizNode::marker("2. Largest planet?"),
                QuizNode::radio(false),
                QuizNode::label("a. Mars"),
                QuizNode::radio(true),
                QuizNode::label("b. Jupiter"),
            ]),
        ));
        let mut sink = MemorySink::default();

        let outcome = use_case(source)
            .execute(&page("Nouns"), &mut sink)
            .await
            .unwrap();

        assert_eq!(outcome.questions, Some(2));
        assert_eq!(outcome.rows_written, 2);
        assert!(!outcome.was_cached);
        let backs: Vec<&str> = sink.rows.iter().map(|r| r.back.as_str()).collect();
        assert_eq!(backs, vec!["a.", "b."]);
        assert_eq!(
            sink.rows[0].reference,
            r#"<a href="https://example.test/Nouns.htm">https://example.test/Nouns.htm</a>"#
        );
    }

    #[tokio::test]
    async fn test_page_without_quiz_writes_nothing() {
        let source = Arc::new(MockSource::new().with_remote("Verbs", quiz_page(&[])));
        let mut sink = MemorySink::default();

        let outcome = use_case(source)
            .execute(&page("Verbs"), &mut sink)
            .await
            .unwrap();

        assert!(!outcome.has_quiz());
        assert_eq!(outcome.rows_written, 0);
        assert!(sink.rows.is_empty());
    }

    #[tokio::test]
    async fn test_unanswered_question_still_written() {
        let source = Arc::new(MockSource::new().with_remote(
            "Broken",
            quiz_page(&[
                QuizNode::marker("1. No answer"),
                QuizNode::radio(false),
                QuizNode::label("a. x"),
            ]),
        ));
        let mut sink = MemorySink::default();

        let outcome = use_case(source)
            .execute(&page("Broken"), &mut sink)
            .await
            .unwrap();

        assert_eq!(outcome.rows_written, 1);
        assert_eq!(outcome.unanswered, 1);
        assert_eq!(sink.rows[0].back, "");
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let source = Arc::new(MockSource::new());
        let mut sink = MemorySink::default();

        let err = use_case(source)
            .execute(&page("Missing"), &mut sink)
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::Fetch(FetchError::Transport { .. })));
    }

    #[tokio::test]
    async fn test_second_run_hits_cache_with_identical_rows() {
        let source = Arc::new(MockSource::new().with_remote(
            "Nouns",
            quiz_page(&[
                QuizNode::marker("1. Q"),
                QuizNode::radio(true),
                QuizNode::label("a. yes"),
            ]),
        ));
        let use_case = use_case(source.clone());

        let mut first = MemorySink::default();
        let first_outcome = use_case.execute(&page("Nouns"), &mut first).await.unwrap();
        let mut second = MemorySink::default();
        let second_outcome = use_case.execute(&page("Nouns"), &mut second).await.unwrap();

        assert!(!first_outcome.was_cached);
        assert!(second_outcome.was_cached);
        assert_eq!(first.rows, second.rows);
        assert_eq!(source.network_requests(), 1);
    }
}
