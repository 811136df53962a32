//! Page parser port
//!
//! Turns raw markup into what the use cases consume. Parsed documents never
//! cross this boundary: adapters hand back owned domain data.

use farlex_domain::{PageId, QuizNode, Section};
use thiserror::Error;

/// Errors raised when a document does not have the expected shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageParseError {
    #[error("Expected element not found: {selector}")]
    MissingElement { selector: String },

    #[error("Invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },
}

/// Markup parser
pub trait PageParser: Send + Sync {
    /// Flatten the page's quiz region into nodes, in document order.
    ///
    /// A page without a quiz region yields an empty sequence.
    fn quiz_nodes(&self, html: &str) -> Vec<QuizNode>;

    /// Pages linked from a section of the contents page, in link order
    fn section_pages(
        &self,
        contents_html: &str,
        section: Section,
    ) -> Result<Vec<PageId>, PageParseError>;

    /// Display name of a section as shown on the contents page
    fn section_title(&self, contents_html: &str, section: Section)
    -> Result<String, PageParseError>;
}
