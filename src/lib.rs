//! Riskcheck: Vendor Risk Assessment Questionnaire
//!
//! This library loads a questionnaire of scored single-choice questions,
//! totals the selected answers overall and per category, and classifies
//! the result into a risk tier with per-category advice.

pub mod answers;
pub mod assessment;
pub mod config;
pub mod error;
pub mod logging;
pub mod questions;
pub mod reporter;

pub use answers::AnswerSet;
pub use assessment::{advise, assess, classify, score, Advice, CategoryScores, ScoreCard};
pub use error::AssessmentError;
pub use questions::{load_questions, QuestionSet, QuestionSource};

use serde::{Deserialize, Serialize};

/// A single risk-assessment prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Prompt text shown to the user
    #[serde(rename = "question")]
    pub text: String,
    /// Grouping label used to aggregate scores and select advice
    pub category: String,
    /// Selectable answers, in display order
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(text: &str, category: &str, options: Vec<AnswerOption>) -> Self {
        Self {
            text: text.to_string(),
            category: category.to_string(),
            options,
        }
    }
}

/// One selectable answer and the score it contributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub score: i64,
}

impl AnswerOption {
    pub fn new(text: &str, score: i64) -> Self {
        Self {
            text: text.to_string(),
            score,
        }
    }
}

/// Three-level classification used both for the overall tier and for
/// per-category severity badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Lowercase name, as used in CSS classes and config values
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::Low => write!(f, "Low"),
            RiskTier::Medium => write!(f, "Medium"),
            RiskTier::High => write!(f, "High"),
        }
    }
}

impl std::str::FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(RiskTier::Low),
            "medium" => Ok(RiskTier::Medium),
            "high" => Ok(RiskTier::High),
            other => Err(format!(
                "unknown risk tier '{}' (expected low, medium or high)",
                other
            )),
        }
    }
}

/// Advice and severity badge for one category of a scored assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAdvice {
    pub category: String,
    pub subtotal: i64,
    pub severity: RiskTier,
    /// Empty when no advice is known for the category
    pub text: String,
}

/// The complete result of scoring one answer set
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub total_score: i64,
    pub tier: RiskTier,
    pub category_scores: CategoryScores,
    pub advice: Vec<CategoryAdvice>,
    pub question_count: usize,
    /// RFC 3339 UTC timestamp
    pub assessed_at: String,
    /// Hex SHA-256 of the questions document the answers were scored against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questionnaire_digest: Option<String>,
}
