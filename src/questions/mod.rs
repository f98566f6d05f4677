//! Question store: loading and shape-checking questionnaires

pub mod remote;

use crate::{AnswerOption, AssessmentError, Question};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::ops::Deref;
use std::path::{Path, PathBuf};

pub const DEFAULT_QUESTIONS_FILENAME: &str = "questions.json";

/// Starter questionnaire written by `riskcheck init`
pub const SAMPLE_QUESTIONS: &str = include_str!("sample.json");

/// Where a questionnaire is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    File(PathBuf),
    Url(String),
}

impl QuestionSource {
    /// Treat `http://` and `https://` locations as URLs, anything else as a path
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            QuestionSource::Url(location.to_string())
        } else {
            QuestionSource::File(PathBuf::from(location))
        }
    }

    /// Resolve relative file paths against `base`
    pub fn relative_to(self, base: &Path) -> Self {
        match self {
            QuestionSource::File(path) if path.is_relative() => {
                QuestionSource::File(base.join(path))
            }
            other => other,
        }
    }
}

impl std::fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionSource::File(path) => write!(f, "{}", path.display()),
            QuestionSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// An immutable, ordered questionnaire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
    digest: Option<String>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            digest: None,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Hex SHA-256 of the document this set was parsed from
    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }
}

impl Deref for QuestionSet {
    type Target = [Question];

    fn deref(&self) -> &Self::Target {
        &self.questions
    }
}

/// Load and validate a questionnaire. Either every record passes the shape
/// check or nothing is returned.
pub fn load_questions(source: &QuestionSource) -> Result<QuestionSet, AssessmentError> {
    tracing::info!("Loading questions from {}", source);

    let raw = match source {
        QuestionSource::File(path) => std::fs::read_to_string(path).map_err(|e| {
            tracing::error!(error = %e, "Read error for {}", path.display());
            AssessmentError::load(format!(
                "Failed to load questions from {} ({})",
                path.display(),
                e
            ))
        })?,
        QuestionSource::Url(url) => remote::fetch(url)?,
    };

    let set = parse_questions(&raw)?;
    tracing::info!("Loaded {} questions successfully", set.len());
    Ok(set)
}

/// Parse a questions document: a JSON array of
/// `{ "question": str, "category": str, "options": [{ "text": str, "score": int }] }`.
pub fn parse_questions(raw: &str) -> Result<QuestionSet, AssessmentError> {
    let data: Value = serde_json::from_str(raw).map_err(|e| {
        tracing::error!(error = %e, "Parsing error");
        AssessmentError::load(format!(
            "Error processing questions data. Please check the format. ({})",
            e
        ))
    })?;

    let Value::Array(records) = data else {
        return Err(AssessmentError::load(
            "Invalid data format: Expected an array of questions.",
        ));
    };

    let questions = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            parse_record(record).map_err(|reason| {
                tracing::error!("Question {} rejected: {}", index, reason);
                AssessmentError::load(format!(
                    "Question format invalid at index {}: {}",
                    index, reason
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QuestionSet {
        questions,
        digest: Some(hex::encode(Sha256::digest(raw.as_bytes()))),
    })
}

fn parse_record(record: &Value) -> Result<Question, String> {
    let text = record
        .get("question")
        .and_then(Value::as_str)
        .filter(|t| !t.trim().is_empty())
        .ok_or("missing question text")?;

    let category = record
        .get("category")
        .and_then(Value::as_str)
        .ok_or("missing category")?;

    let options = record
        .get("options")
        .and_then(Value::as_array)
        .ok_or("options must be an array")?
        .iter()
        .enumerate()
        .map(|(n, option)| parse_option(option).map_err(|reason| format!("option {}: {}", n, reason)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Question::new(text, category, options))
}

fn parse_option(option: &Value) -> Result<AnswerOption, &'static str> {
    let text = option
        .get("text")
        .and_then(Value::as_str)
        .ok_or("missing text")?;
    let score = option
        .get("score")
        .and_then(Value::as_i64)
        .ok_or("score must be an integer")?;
    Ok(AnswerOption::new(text, score))
}
