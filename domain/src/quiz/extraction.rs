//! Quiz extraction state machine
//!
//! Pure domain logic: no HTML, no I/O. Input is the flattened node
//! sequence of a page's quiz region, output is the structured [`Quiz`].

use super::entities::{Choice, Question, Quiz};
use super::node::QuizNode;
use crate::core::string::skip_chars;

/// Width of the numbering label in front of each question ("1. ")
pub const QUESTION_LABEL_WIDTH: usize = 3;

/// Extract a quiz from a flattened node sequence.
///
/// Returns `None` when the sequence holds no question marker at all ("not a
/// quiz page"), which is distinct from `Some` of a quiz whose questions
/// turned out to have no choices.
///
/// Each question owns the nodes strictly between its marker and the next
/// marker; the last question ends with the sequence itself. Nodes before
/// the first marker are ignored.
pub fn extract_quiz(nodes: &[QuizNode]) -> Option<Quiz> {
    let markers: Vec<(usize, &str)> = nodes
        .iter()
        .enumerate()
        .filter_map(|(idx, node)| match node {
            QuizNode::Marker { text } => Some((idx, text.as_str())),
            _ => None,
        })
        .collect();

    if markers.is_empty() {
        return None;
    }

    let questions = markers
        .iter()
        .enumerate()
        .map(|(n, &(start, text))| {
            let end = markers.get(n + 1).map_or(nodes.len(), |&(next, _)| next);
            scan_question(text, &nodes[start + 1..end])
        })
        .collect();

    Some(Quiz::new(questions))
}

/// Walk the nodes owned by one question marker.
fn scan_question(marker_text: &str, body: &[QuizNode]) -> Question {
    let mut builder = QuestionBuilder::start(marker_text);
    for node in body {
        match node {
            QuizNode::Radio { correct } => builder.open_choice(*correct),
            QuizNode::Label { text } => builder.label(text),
            // Bounded by the caller; a marker never appears inside a body.
            QuizNode::Marker { .. } => break,
        }
    }
    builder.finish()
}

/// In-progress question threaded through the scan.
///
/// `pending` is the choice opened by the most recent radio input; it is
/// committed when the next radio input opens or when the question ends.
#[derive(Debug)]
struct QuestionBuilder {
    text: String,
    choices: Vec<Choice>,
    pending: Option<Choice>,
}

impl QuestionBuilder {
    fn start(marker_text: &str) -> Self {
        Self {
            text: skip_chars(marker_text, QUESTION_LABEL_WIDTH).to_string(),
            choices: Vec::new(),
            pending: None,
        }
    }

    fn open_choice(&mut self, is_correct: bool) {
        self.commit();
        self.pending = Some(Choice::new(String::new(), is_correct));
    }

    /// Labels before any radio input have nothing to describe and are dropped.
    fn label(&mut self, text: &str) {
        if let Some(choice) = self.pending.as_mut() {
            choice.text = text.to_string();
        }
    }

    fn commit(&mut self) {
        if let Some(choice) = self.pending.take() {
            self.choices.push(choice);
        }
    }

    fn finish(mut self) -> Question {
        self.commit();
        Question {
            text: self.text,
            choices: self.choices,
        }
    }
}
