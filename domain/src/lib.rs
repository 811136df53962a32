//! Domain layer for farlex-quizzes
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Pages and Sections
//!
//! - **PageId**: URL slug naming one page of the grammar book
//! - **Section**: top-level table-of-contents grouping (Grammar, Punctuation,
//!   Spelling and Pronunciation)
//!
//! ## Quiz
//!
//! - **QuizNode**: flattened quiz markup (question markers, radio inputs, labels)
//! - **Quiz / Question / Choice**: the structured result of [`extract_quiz`]
//!
//! ## Flashcards
//!
//! - **FlashcardRow**: `(front, back, reference)` row for flashcard import

pub mod card;
pub mod core;
pub mod page;
pub mod quiz;

// Re-export commonly used types
pub use card::{BREAK_MARKER, FlashcardRow, reference_anchor};
pub use crate::core::{error::DomainError, string};
pub use page::{
    page_id::PageId,
    section::{Section, section_file_stem},
};
pub use quiz::{Choice, Question, Quiz, QuizNode, extract_quiz};
