//! Flattened quiz markup

use serde::{Deserialize, Serialize};

/// One relevant node of a page's quiz region, in document order.
///
/// Everything that is not a question marker, a radio input or a label is
/// dropped while flattening, so the sequence only carries what the
/// extraction state machine reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuizNode {
    /// Top-level question paragraph; `text` still carries its `"1. "` label
    Marker { text: String },
    /// `<input type="radio">`; `correct` when it carries the correct-answer class
    Radio { correct: bool },
    /// `<label>` text, belonging to the most recent radio input
    Label { text: String },
}

impl QuizNode {
    pub fn marker(text: impl Into<String>) -> Self {
        QuizNode::Marker { text: text.into() }
    }

    pub fn radio(correct: bool) -> Self {
        QuizNode::Radio { correct }
    }

    pub fn label(text: impl Into<String>) -> Self {
        QuizNode::Label { text: text.into() }
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, QuizNode::Marker { .. })
    }
}
