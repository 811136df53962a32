//! Flashcard rows ready for import into spaced-repetition tools.

pub mod row;

pub use row::{BREAK_MARKER, FlashcardRow, reference_anchor};
