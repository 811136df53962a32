//! Quiz domain
//!
//! A grammar page may embed a multiple-choice quiz. The infrastructure
//! layer flattens the page markup into a sequence of [`QuizNode`]s; this
//! module turns that sequence into a [`Quiz`] without touching HTML.
//!
//! ```text
//! Marker("1. Pick the noun")  ─┐
//! Radio { correct: false }     │  Question 1
//! Label("a. run")              │
//! Radio { correct: true }      │
//! Label("b. dog")             ─┘
//! Marker("2. ...")            ─┐  Question 2
//! ...                         ─┘  (ends at end of sequence)
//! ```

pub mod entities;
pub mod extraction;
pub mod node;

pub use entities::{Choice, Question, Quiz};
pub use extraction::{QUESTION_LABEL_WIDTH, extract_quiz};
pub use node::QuizNode;
