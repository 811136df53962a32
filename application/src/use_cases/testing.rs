//! In-memory port fakes shared by the use case tests.

use crate::ports::pacer::Pacer;
use crate::ports::page_parser::{PageParseError, PageParser};
use crate::ports::page_source::{FetchError, FetchedPage, PageSource};
use crate::ports::progress::ProgressNotifier;
use crate::ports::row_sink::{RowSink, RowSinkFactory, SinkError};
use crate::use_cases::scrape_page::PageOutcome;
use async_trait::async_trait;
use farlex_domain::{FlashcardRow, PageId, QuizNode, Section};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ==================== Fake documents ====================

/// Stand-in for page markup: the fake parser reads this JSON back.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FakeDocument {
    #[serde(default)]
    quiz: Vec<QuizNode>,
    #[serde(default)]
    sections: Vec<FakeSection>,
}

#[derive(Debug, Serialize, Deserialize)]
struct FakeSection {
    number: u8,
    title: String,
    pages: Vec<String>,
}

pub fn quiz_page(nodes: &[QuizNode]) -> String {
    serde_json::to_string(&FakeDocument {
        quiz: nodes.to_vec(),
        sections: vec![],
    })
    .unwrap()
}

pub fn contents_page(sections: &[(Section, &str, &[&str])]) -> String {
    serde_json::to_string(&FakeDocument {
        quiz: vec![],
        sections: sections
            .iter()
            .map(|(section, title, pages)| FakeSection {
                number: section.number(),
                title: title.to_string(),
                pages: pages.iter().map(|p| p.to_string()).collect(),
            })
            .collect(),
    })
    .unwrap()
}

pub fn one_question_page(answer: &str) -> String {
    quiz_page(&[
        QuizNode::marker("1. Pick one"),
        QuizNode::radio(true),
        QuizNode::label(answer),
    ])
}

// ==================== Page source ====================

/// Remote pages plus a simulated cache that fills on first fetch
pub struct MockSource {
    remote: HashMap<String, String>,
    cached: Mutex<HashSet<String>>,
    requests: AtomicUsize,
}

impl MockSource {
    pub fn new() -> Self {
        Self {
            remote: HashMap::new(),
            cached: Mutex::new(HashSet::new()),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn with_remote(mut self, slug: &str, content: String) -> Self {
        self.remote.insert(slug.to_string(), content);
        self
    }

    pub fn with_cached(self, slug: &str) -> Self {
        self.cached.lock().unwrap().insert(slug.to_string());
        self
    }

    pub fn network_requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSource for MockSource {
    async fn fetch(&self, page: &PageId) -> Result<FetchedPage, FetchError> {
        let content = self
            .remote
            .get(page.as_str())
            .cloned()
            .ok_or_else(|| FetchError::Transport {
                page: page.clone(),
                message: "connection refused".to_string(),
            })?;

        let mut cached = self.cached.lock().unwrap();
        if cached.contains(page.as_str()) {
            return Ok(FetchedPage::cached(content));
        }
        self.requests.fetch_add(1, Ordering::SeqCst);
        cached.insert(page.as_str().to_string());
        Ok(FetchedPage::fetched(content))
    }

    fn page_url(&self, page: &PageId) -> String {
        page.url("https://example.test")
    }
}

// ==================== Parser ====================

#[derive(Default)]
pub struct MockParser;

impl MockParser {
    fn document(html: &str) -> FakeDocument {
        serde_json::from_str(html).unwrap_or_default()
    }

    fn section(html: &str, section: Section) -> Result<FakeSection, PageParseError> {
        Self::document(html)
            .sections
            .into_iter()
            .find(|s| s.number == section.number())
            .ok_or_else(|| PageParseError::MissingElement {
                selector: section.contents_selector(),
            })
    }
}

impl PageParser for MockParser {
    fn quiz_nodes(&self, html: &str) -> Vec<QuizNode> {
        Self::document(html).quiz
    }

    fn section_pages(
        &self,
        contents_html: &str,
        section: Section,
    ) -> Result<Vec<PageId>, PageParseError> {
        Ok(Self::section(contents_html, section)?
            .pages
            .iter()
            .map(|p| PageId::new(p.as_str()).unwrap())
            .collect())
    }

    fn section_title(
        &self,
        contents_html: &str,
        section: Section,
    ) -> Result<String, PageParseError> {
        Self::section(contents_html, section).map(|s| s.title)
    }
}

// ==================== Sinks ====================

#[derive(Default)]
pub struct MemorySink {
    pub rows: Vec<FlashcardRow>,
    pub finished: bool,
}

impl RowSink for MemorySink {
    fn write_row(&mut self, row: &FlashcardRow) -> Result<(), SinkError> {
        self.rows.push(row.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.finished = true;
        Ok(())
    }

    fn location(&self) -> &str {
        "memory"
    }
}

/// Sink whose rows outlive it, keyed by the stem it was opened with
struct SharedSink {
    location: String,
    rows: Arc<Mutex<Vec<FlashcardRow>>>,
}

impl RowSink for SharedSink {
    fn write_row(&mut self, row: &FlashcardRow) -> Result<(), SinkError> {
        self.rows.lock().unwrap().push(row.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        Ok(())
    }

    fn location(&self) -> &str {
        &self.location
    }
}

#[derive(Default)]
pub struct MockSinkFactory {
    outputs: Mutex<Vec<(String, Arc<Mutex<Vec<FlashcardRow>>>)>>,
}

impl MockSinkFactory {
    /// Stems opened so far, in order
    pub fn opened(&self) -> Vec<String> {
        self.outputs
            .lock()
            .unwrap()
            .iter()
            .map(|(stem, _)| stem.clone())
            .collect()
    }

    /// Rows of the most recently opened output named `stem`
    pub fn rows(&self, stem: &str) -> Vec<FlashcardRow> {
        self.outputs
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(s, _)| s == stem)
            .map(|(_, rows)| rows.lock().unwrap().clone())
            .unwrap_or_default()
    }
}

impl RowSinkFactory for MockSinkFactory {
    fn open(&self, stem: &str) -> Result<Box<dyn RowSink>, SinkError> {
        let rows = Arc::new(Mutex::new(Vec::new()));
        self.outputs
            .lock()
            .unwrap()
            .push((stem.to_string(), rows.clone()));
        Ok(Box::new(SharedSink {
            location: format!("{stem}.csv"),
            rows,
        }))
    }
}

// ==================== Pacer ====================

pub const PAUSE: Duration = Duration::from_secs(3);

#[derive(Default)]
pub struct CountingPacer {
    pauses: AtomicUsize,
}

impl CountingPacer {
    pub fn pauses(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Pacer for CountingPacer {
    async fn pause(&self) -> Duration {
        self.pauses.fetch_add(1, Ordering::SeqCst);
        PAUSE
    }
}

// ==================== Progress ====================

#[derive(Default)]
pub struct RecordingProgress {
    pub events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_section_start(&self, section: Section, total_pages: usize) {
        self.push(format!("section:{}:{}", section.number(), total_pages));
    }

    fn on_page_start(&self, page: &PageId) {
        self.push(format!("page:{page}"));
    }

    fn on_page_complete(&self, outcome: &PageOutcome) {
        self.push(format!(
            "done:{}:{}",
            outcome.page,
            if outcome.was_cached { "cached" } else { "fetched" }
        ));
    }

    fn on_section_complete(&self, section: Section) {
        self.push(format!("end:{}", section.number()));
    }

    fn on_pause(&self, duration: Duration) {
        self.push(format!("pause:{}", duration.as_secs()));
    }
}
