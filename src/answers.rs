//! Answer collection: selections from an answers file or an interactive prompt

use crate::{AssessmentError, Question};
use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::Path;

/// Selected score per question index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    scores: BTreeMap<usize, i64>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-resolved `(question index, score)` pairs
    pub fn from_scores(scores: impl IntoIterator<Item = (usize, i64)>) -> Self {
        Self {
            scores: scores.into_iter().collect(),
        }
    }

    /// Build from `(question index, option index)` pairs, resolving each
    /// selection to the chosen option's score.
    pub fn from_selections(
        questions: &[Question],
        selections: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, AssessmentError> {
        let mut answers = Self::new();
        for (question, option) in selections {
            answers.select(questions, question, option)?;
        }
        Ok(answers)
    }

    /// Record the option chosen for one question, replacing any earlier choice
    pub fn select(
        &mut self,
        questions: &[Question],
        question: usize,
        option: usize,
    ) -> Result<(), AssessmentError> {
        let available = questions.get(question).map_or(0, |q| q.options.len());
        let chosen = questions
            .get(question)
            .and_then(|q| q.options.get(option))
            .ok_or(AssessmentError::InvalidSelection {
                question,
                option,
                available,
            })?;
        self.scores.insert(question, chosen.score);
        Ok(())
    }

    pub fn get(&self, question: usize) -> Option<i64> {
        self.scores.get(&question).copied()
    }

    /// Question indices below `question_count` with no answer
    pub fn missing(&self, question_count: usize) -> Vec<usize> {
        (0..question_count)
            .filter(|i| !self.scores.contains_key(i))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Read an answers file. See [`parse_answers`] for the accepted shapes.
pub fn load_answers(path: &Path, questions: &[Question]) -> Result<AnswerSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers: {}", path.display()))?;
    parse_answers(&content, questions)
        .with_context(|| format!("Invalid answers file: {}", path.display()))
}

/// Parse selections given as option indices (0-based).
///
/// Accepts either an array with one entry per question (`null` = unanswered)
/// or an object keyed by question index: `{"0": 2, "3": 1}`.
pub fn parse_answers(content: &str, questions: &[Question]) -> Result<AnswerSet> {
    let value: Value = serde_json::from_str(content).context("Answers must be valid JSON")?;

    let selections: Vec<(usize, usize)> = match value {
        Value::Array(entries) => entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.is_null())
            .map(|(question, entry)| -> Result<(usize, usize)> {
                Ok((question, option_index(question, entry)?))
            })
            .collect::<Result<_>>()?,
        Value::Object(entries) => entries
            .iter()
            .filter(|(_, entry)| !entry.is_null())
            .map(|(key, entry)| -> Result<(usize, usize)> {
                let question: usize = key
                    .parse()
                    .with_context(|| format!("Answer key '{}' is not a question index", key))?;
                Ok((question, option_index(question, entry)?))
            })
            .collect::<Result<_>>()?,
        _ => anyhow::bail!("Expected an array or object of selections"),
    };

    Ok(AnswerSet::from_selections(questions, selections)?)
}

fn option_index(question: usize, entry: &Value) -> Result<usize> {
    entry
        .as_u64()
        .map(|i| i as usize)
        .with_context(|| format!("Selection for question {} must be an option index", question))
}

/// Ask each question on `output` and read a 1-based choice from `input`.
///
/// Invalid input re-prompts. End of input stops collection and leaves the
/// remaining questions unanswered.
pub fn prompt_answers<R: BufRead, W: Write>(
    questions: &[Question],
    mut input: R,
    mut output: W,
) -> std::io::Result<AnswerSet> {
    let mut answers = AnswerSet::new();

    'questions: for (index, question) in questions.iter().enumerate() {
        writeln!(output)?;
        writeln!(
            output,
            "{} {}",
            format!("[{}/{}]", index + 1, questions.len()).dimmed(),
            question.text.bold()
        )?;
        for (n, option) in question.options.iter().enumerate() {
            writeln!(output, "   {}. {}", n + 1, option.text)?;
        }

        loop {
            write!(output, "   Choice (1-{}): ", question.options.len())?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("input closed at question {}", index);
                break 'questions;
            }

            match line.trim().parse::<usize>() {
                Ok(choice) if choice >= 1 && answers.select(questions, index, choice - 1).is_ok() => {
                    continue 'questions;
                }
                _ => writeln!(output, "   {}", "Please pick one of the listed options.".yellow())?,
            }
        }
    }

    Ok(answers)
}
