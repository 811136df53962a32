//! Progress notification port
//!
//! Defines the interface for reporting progress while pages are exported.

use crate::use_cases::scrape_page::PageOutcome;
use farlex_domain::{PageId, Section};
use std::time::Duration;

/// Callback for progress updates during an export
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a section walk starts
    fn on_section_start(&self, section: Section, total_pages: usize);

    /// Called before a page is fetched
    fn on_page_start(&self, page: &PageId);

    /// Called after a page has been fetched, parsed and written
    fn on_page_complete(&self, outcome: &PageOutcome);

    /// Called when a section walk ends
    fn on_section_complete(&self, section: Section);

    /// Called after each politeness pause
    fn on_pause(&self, _duration: Duration) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_section_start(&self, _section: Section, _total_pages: usize) {}
    fn on_page_start(&self, _page: &PageId) {}
    fn on_page_complete(&self, _outcome: &PageOutcome) {}
    fn on_section_complete(&self, _section: Section) {}
}
