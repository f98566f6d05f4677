//! JSON reporter for machine-readable output

use crate::{Assessment, QuestionSet};
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a scored assessment as JSON
    pub fn report(&self, assessment: &Assessment) -> String {
        self.encode(assessment, "{}")
    }

    /// Report the questionnaire itself (wire format, one object per question)
    pub fn report_questions(&self, questions: &QuestionSet) -> String {
        self.encode(questions.questions(), "[]")
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.unwrap_or_else(|_| fallback.to_string())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}
