//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod export_quizzes;
pub mod scrape_page;
pub mod walk_section;

#[cfg(test)]
pub(crate) mod testing;
