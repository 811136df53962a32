//! Page source port
//!
//! Defines how use cases obtain the raw markup of a page.

use async_trait::async_trait;
use farlex_domain::PageId;
use thiserror::Error;

/// Errors that can occur while obtaining a page
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request for {page} failed: {message}")]
    Transport { page: PageId, message: String },

    #[error("Server answered {status} for {page}")]
    HttpStatus { page: PageId, status: u16 },

    #[error("Page cache error at {path}: {message}")]
    Cache { path: String, message: String },
}

/// Raw page content plus where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub content: String,
    /// `true` when served from the local cache without network I/O
    pub was_cached: bool,
}

impl FetchedPage {
    pub fn cached(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            was_cached: true,
        }
    }

    pub fn fetched(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            was_cached: false,
        }
    }
}

/// Source of page markup
///
/// Implementations (adapters) live in the infrastructure layer; the
/// default one reads from a disk cache and falls back to HTTP.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Return the page's raw content, fetching it only when not stored locally
    async fn fetch(&self, page: &PageId) -> Result<FetchedPage, FetchError>;

    /// Canonical URL of the page, used as the flashcard reference
    fn page_url(&self, page: &PageId) -> String;
}
