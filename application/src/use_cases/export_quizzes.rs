//! Export Quizzes use case
//!
//! Resolves what the user asked for (one page, one section, everything)
//! into calls on [`ScrapePageUseCase`] / [`WalkSectionUseCase`], writing
//! every row of the run to a single output opened up front.

use crate::config::ExportParams;
use crate::ports::pacer::Pacer;
use crate::ports::page_parser::PageParser;
use crate::ports::page_source::PageSource;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::row_sink::RowSinkFactory;
use crate::use_cases::scrape_page::{ExportError, PageOutcome, ScrapePageUseCase};
use crate::use_cases::walk_section::WalkSectionUseCase;
use farlex_domain::{PageId, Section, section_file_stem};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// What a run exports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportScope {
    /// One page, written to `<slug>.csv`
    Page(PageId),
    /// One section, written to `<Section_Name>.csv`
    Section(Section),
    /// Every section in canonical order, written to one combined file
    All,
}

impl fmt::Display for ExportScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportScope::Page(page) => write!(f, "page {page}"),
            ExportScope::Section(section) => write!(f, "section {section}"),
            ExportScope::All => write!(f, "all sections"),
        }
    }
}

/// Result of a completed run
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Where the rows went
    pub output: String,
    /// Every page visited, in traversal order
    pub pages: Vec<PageOutcome>,
}

impl ExportSummary {
    pub fn pages_visited(&self) -> usize {
        self.pages.len()
    }

    pub fn pages_cached(&self) -> usize {
        self.pages.iter().filter(|p| p.was_cached).count()
    }

    pub fn pages_with_quiz(&self) -> usize {
        self.pages.iter().filter(|p| p.has_quiz()).count()
    }

    pub fn rows_written(&self) -> usize {
        self.pages.iter().map(|p| p.rows_written).sum()
    }

    pub fn unanswered(&self) -> usize {
        self.pages.iter().map(|p| p.unanswered).sum()
    }

    pub fn total_pause(&self) -> Duration {
        self.pages.iter().filter_map(|p| p.pause).sum()
    }
}

/// Use case for a whole export run
pub struct ExportQuizzesUseCase {
    source: Arc<dyn PageSource>,
    parser: Arc<dyn PageParser>,
    sinks: Arc<dyn RowSinkFactory>,
    scrape: Arc<ScrapePageUseCase>,
    walk: WalkSectionUseCase,
    params: ExportParams,
}

impl ExportQuizzesUseCase {
    pub fn new(
        source: Arc<dyn PageSource>,
        parser: Arc<dyn PageParser>,
        pacer: Arc<dyn Pacer>,
        sinks: Arc<dyn RowSinkFactory>,
        params: ExportParams,
    ) -> Self {
        let scrape = Arc::new(ScrapePageUseCase::new(source.clone(), parser.clone()));
        let walk = WalkSectionUseCase::new(scrape.clone(), parser.clone(), pacer);
        Self {
            source,
            parser,
            sinks,
            scrape,
            walk,
            params,
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, scope: ExportScope) -> Result<ExportSummary, ExportError> {
        self.execute_with_progress(scope, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        scope: ExportScope,
        progress: &dyn ProgressNotifier,
    ) -> Result<ExportSummary, ExportError> {
        info!("Exporting {}", scope);

        let (mut sink, pages) = match scope {
            ExportScope::Page(page) => {
                let mut sink = self.sinks.open(page.as_str())?;
                progress.on_page_start(&page);
                let outcome = self.scrape.execute(&page, sink.as_mut()).await?;
                progress.on_page_complete(&outcome);
                (sink, vec![outcome])
            }
            ExportScope::Section(section) => {
                let contents = self.fetch_contents().await?;
                let stem = self.section_stem(&contents, section)?;
                let mut sink = self.sinks.open(&stem)?;
                let pages = self
                    .walk
                    .execute(&contents, section, sink.as_mut(), progress)
                    .await?;
                (sink, pages)
            }
            ExportScope::All => {
                let contents = self.fetch_contents().await?;
                let mut sink = self.sinks.open(&self.params.combined_stem)?;
                let mut pages = Vec::new();
                for section in Section::ALL {
                    let outcomes = self
                        .walk
                        .execute(&contents, section, sink.as_mut(), progress)
                        .await?;
                    pages.extend(outcomes);
                }
                (sink, pages)
            }
        };

        sink.finish()?;
        let summary = ExportSummary {
            output: sink.location().to_string(),
            pages,
        };
        info!(
            "Wrote {} rows from {} pages to {}",
            summary.rows_written(),
            summary.pages_visited(),
            summary.output
        );
        Ok(summary)
    }

    /// Fetch the table of contents once per run
    async fn fetch_contents(&self) -> Result<String, ExportError> {
        let fetched = self.source.fetch(&self.params.contents_page).await?;
        Ok(fetched.content)
    }

    /// Output stem for a section: its tab title, falling back to the
    /// built-in name when the tab is blank.
    fn section_stem(&self, contents: &str, section: Section) -> Result<String, ExportError> {
        let title = self.parser.section_title(contents, section)?;
        let stem = section_file_stem(&title);
        if stem.is_empty() {
            return Ok(section_file_stem(section.default_title()));
        }
        Ok(stem)
    }
}
