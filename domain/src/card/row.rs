//! Flashcard row value object

use crate::quiz::Question;
use serde::{Deserialize, Serialize};

/// Line-break marker used inside the `front` HTML fragment
pub const BREAK_MARKER: &str = "<br>";

/// Flattened, writer-ready form of one question (Value Object)
///
/// Serializes in column order `front, back, reference`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardRow {
    /// Question followed by every choice, separated by `<br>`
    pub front: String,
    /// Answer label of the correct choice ("a."), empty if none is marked
    pub back: String,
    /// HTML anchor pointing at the source page
    pub reference: String,
}

impl FlashcardRow {
    /// Build the row for one question of the page at `source_url`.
    ///
    /// The correct choice is not distinguished in `front`.
    pub fn from_question(question: &Question, source_url: &str) -> Self {
        let mut front = String::with_capacity(question.text.len() + 64);
        front.push_str(&question.text);
        front.push_str(BREAK_MARKER);
        for choice in &question.choices {
            front.push_str(BREAK_MARKER);
            front.push_str(&choice.text);
        }

        let back = question
            .correct_choice()
            .map(|c| c.answer_label().to_string())
            .unwrap_or_default();

        Self {
            front,
            back,
            reference: reference_anchor(source_url),
        }
    }

    pub fn has_answer(&self) -> bool {
        !self.back.is_empty()
    }

    /// Columns in output order
    pub fn columns(&self) -> [&str; 3] {
        [&self.front, &self.back, &self.reference]
    }
}

/// Anchor whose href and visible text are both `url`
pub fn reference_anchor(url: &str) -> String {
    format!(r#"<a href="{url}">{url}</a>"#)
}
