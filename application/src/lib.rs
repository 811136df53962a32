//! Application layer for farlex-quizzes
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_COMBINED_STEM, DEFAULT_CONTENTS_PAGE, ExportParams};
pub use ports::{
    pacer::{NoPause, Pacer},
    page_parser::{PageParseError, PageParser},
    page_source::{FetchError, FetchedPage, PageSource},
    progress::{NoProgress, ProgressNotifier},
    row_sink::{RowSink, RowSinkFactory, SinkError},
};
pub use use_cases::export_quizzes::{ExportQuizzesUseCase, ExportScope, ExportSummary};
pub use use_cases::scrape_page::{ExportError, ExtractedPage, PageOutcome, ScrapePageUseCase};
pub use use_cases::walk_section::WalkSectionUseCase;
