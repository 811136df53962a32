//! Walk Section use case
//!
//! Drives every page of one table-of-contents section through
//! fetch → extract → write, pausing politely after each genuine fetch.

use crate::ports::pacer::Pacer;
use crate::ports::page_parser::PageParser;
use crate::ports::progress::ProgressNotifier;
use crate::ports::row_sink::RowSink;
use crate::use_cases::scrape_page::{ExportError, PageOutcome, ScrapePageUseCase};
use farlex_domain::Section;
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for exporting all quizzes of one section
pub struct WalkSectionUseCase {
    scrape: Arc<ScrapePageUseCase>,
    parser: Arc<dyn PageParser>,
    pacer: Arc<dyn Pacer>,
}

impl WalkSectionUseCase {
    pub fn new(
        scrape: Arc<ScrapePageUseCase>,
        parser: Arc<dyn PageParser>,
        pacer: Arc<dyn Pacer>,
    ) -> Self {
        Self {
            scrape,
            parser,
            pacer,
        }
    }

    /// Walk `section` as listed on the already fetched contents page.
    ///
    /// Pages are processed strictly in link order. Cached pages incur no
    /// pause; every page that needed a network fetch is followed by exactly
    /// one pause, including the last one.
    pub async fn execute(
        &self,
        contents_html: &str,
        section: Section,
        sink: &mut dyn RowSink,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<PageOutcome>, ExportError> {
        let pages = self.parser.section_pages(contents_html, section)?;
        info!("Section {}: {} pages", section, pages.len());
        progress.on_section_start(section, pages.len());

        let mut outcomes = Vec::with_capacity(pages.len());
        for page in &pages {
            progress.on_page_start(page);
            let mut outcome = self.scrape.execute(page, sink).await?;

            if !outcome.was_cached {
                let pause = self.pacer.pause().await;
                debug!("Paused {:.1}s after fetching {}", pause.as_secs_f64(), page);
                outcome.pause = Some(pause);
            }

            progress.on_page_complete(&outcome);
            if let Some(pause) = outcome.pause {
                progress.on_pause(pause);
            }
            outcomes.push(outcome);
        }

        progress.on_section_complete(section);
        Ok(outcomes)
    }
}
