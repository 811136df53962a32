//! Infrastructure layer for farlex-quizzes
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod html;
pub mod output;
pub mod pacing;
pub mod web;
pub mod workspace;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileCacheConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FilePolitenessConfig, FileSelectorsConfig, FileSiteConfig,
};
pub use html::ScraperPageParser;
pub use output::{CsvRowWriter, CsvSinkFactory};
pub use pacing::RandomPacer;
pub use web::{CachedPageFetcher, PageCache};
pub use workspace::{Workspace, WorkspaceError};
