//! Reporter module for output formatting

pub mod console;
pub mod html;
pub mod json;

pub use console::ConsoleReporter;
pub use html::HtmlReporter;
pub use json::JsonReporter;

use crate::{AssessmentError, Question};

/// Check that every question can be presented as a single-choice input:
/// non-empty text and category, at least one option.
pub fn check_renderable(questions: &[Question]) -> Result<(), AssessmentError> {
    for (index, question) in questions.iter().enumerate() {
        let problem = if question.text.trim().is_empty() {
            Some("has no question text")
        } else if question.category.trim().is_empty() {
            Some("has no category")
        } else if question.options.is_empty() {
            Some("has no options")
        } else {
            None
        };

        if let Some(reason) = problem {
            tracing::error!("Error rendering question {}: {}", index, reason);
            return Err(AssessmentError::render(format!(
                "Failed to render questions. Question {} {}.",
                index, reason
            )));
        }
    }
    Ok(())
}
