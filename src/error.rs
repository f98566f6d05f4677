//! Error types for loading, scoring and rendering assessments

use thiserror::Error;

/// Errors emitted by the question store, the scorer and the renderers.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssessmentError {
    /// Questions could not be fetched or failed the shape check
    #[error("{0}")]
    Load(String),
    /// Scoring was requested before every question had an answer
    #[error("Please answer all questions ({} unanswered)", missing.len())]
    IncompleteAnswers { missing: Vec<usize> },
    /// A selection points past the end of a question's options
    #[error("Question {question} has no option {option} ({available} available)")]
    InvalidSelection {
        question: usize,
        option: usize,
        available: usize,
    },
    /// Adding a selected score pushed a total past the `i64` range
    #[error("Score total overflows at question {question}")]
    ScoreOverflow { question: usize },
    /// Malformed question data discovered while rendering
    #[error("{0}")]
    Render(String),
}

impl AssessmentError {
    pub fn load(message: impl Into<String>) -> Self {
        AssessmentError::Load(message.into())
    }

    pub fn render(message: impl Into<String>) -> Self {
        AssessmentError::Render(message.into())
    }
}
