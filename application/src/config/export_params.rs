//! Export parameters: contents page and output naming
//!
//! [`ExportParams`] groups the static parameters that the
//! [`ExportQuizzesUseCase`](crate::use_cases::export_quizzes::ExportQuizzesUseCase)
//! needs beyond its ports. These are application-layer concerns, not
//! domain policy.

use farlex_domain::PageId;

/// Slug of the grammar book's table-of-contents page
pub const DEFAULT_CONTENTS_PAGE: &str = "The-Farlex-Grammar-Book";

/// Output stem used when every section is exported into one file
pub const DEFAULT_COMBINED_STEM: &str = "all_quizzes";

/// Export control parameters.
#[derive(Debug, Clone)]
pub struct ExportParams {
    /// Table-of-contents page listing every section's pages.
    pub contents_page: PageId,
    /// Output stem for a full (all sections) run.
    pub combined_stem: String,
}

impl ExportParams {
    pub fn new(contents_page: PageId) -> Self {
        Self {
            contents_page,
            combined_stem: DEFAULT_COMBINED_STEM.to_string(),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_contents_page(mut self, page: PageId) -> Self {
        self.contents_page = page;
        self
    }

    pub fn with_combined_stem(mut self, stem: impl Into<String>) -> Self {
        self.combined_stem = stem.into();
        self
    }
}
