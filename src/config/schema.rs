//! Config schema and deserialization

use crate::questions::{QuestionSource, DEFAULT_QUESTIONS_FILENAME};
use crate::RiskTier;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Root config structure for .riskcheckrc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Questionnaire location: file path (relative to the config) or URL
    #[serde(default)]
    pub questions: Option<String>,

    /// Exit 1 when the overall tier is at or above this tier
    #[serde(default)]
    pub fail_on: Option<RiskTier>,

    /// Extra or replacement advice text, keyed by exact category name
    #[serde(default)]
    pub advice: HashMap<String, String>,

    /// Directory of the config file this was loaded from
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_questions: Option<&str>, cli_fail_on: Option<RiskTier>) -> Self {
        if let Some(questions) = cli_questions {
            self.questions = Some(questions.to_string());
            // CLI paths are relative to the working directory, not the config
            self.base_dir = None;
        }
        if cli_fail_on.is_some() {
            self.fail_on = cli_fail_on;
        }
        self
    }

    /// Where to load questions from, resolving relative paths against the
    /// config's directory (or `work_dir` when none applies)
    pub fn question_source(&self, work_dir: &Path) -> QuestionSource {
        let location = self.questions.as_deref().unwrap_or(DEFAULT_QUESTIONS_FILENAME);
        let base = self.base_dir.as_deref().unwrap_or(work_dir);
        QuestionSource::parse(location).relative_to(base)
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        if self.questions.is_none() && base.questions.is_some() {
            self.questions = base.questions;
            self.base_dir = base.base_dir;
        }
        if self.fail_on.is_none() {
            self.fail_on = base.fail_on;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }

        // This config's advice takes precedence
        for (category, text) in base.advice {
            self.advice.entry(category).or_insert(text);
        }
    }

    /// Whether a tier should fail the run
    pub fn fails(&self, tier: RiskTier) -> bool {
        self.fail_on.is_some_and(|threshold| tier >= threshold)
    }
}
