//! Score aggregation and overall risk classification

use crate::{AnswerSet, AssessmentError, Question, RiskTier};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Highest total still classified as Low
pub const LOW_TIER_MAX: i64 = 15;
/// Highest total still classified as Medium
pub const MEDIUM_TIER_MAX: i64 = 35;

/// Per-category subtotals, kept in order of first appearance.
///
/// Looking up a category that never received a score yields 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryScores {
    entries: Vec<(String, i64)>,
}

impl CategoryScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `score` to the category's subtotal, starting it at 0 if unseen.
    /// Returns the new subtotal, or `None` (subtotal unchanged) on overflow.
    pub fn add(&mut self, category: &str, score: i64) -> Option<i64> {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, subtotal)) => {
                *subtotal = subtotal.checked_add(score)?;
                Some(*subtotal)
            }
            None => {
                self.entries.push((category.to_string(), score));
                Some(score)
            }
        }
    }

    pub fn get(&self, category: &str) -> i64 {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, subtotal)| *subtotal)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(name, subtotal)| (name.as_str(), *subtotal))
    }

    /// Sum of all subtotals, `None` on overflow
    pub fn total(&self) -> Option<i64> {
        self.entries
            .iter()
            .try_fold(0i64, |sum, (_, subtotal)| sum.checked_add(*subtotal))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CategoryScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, subtotal) in &self.entries {
            map.serialize_entry(name, subtotal)?;
        }
        map.end()
    }
}

/// Total score and per-category subtotals for a complete answer set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    pub total: i64,
    pub categories: CategoryScores,
}

/// Sum the selected scores overall and per category.
///
/// Fails with `IncompleteAnswers` listing every unanswered question index,
/// or with `ScoreOverflow` when a total leaves the `i64` range. No partial
/// card is produced.
pub fn score(questions: &[Question], answers: &AnswerSet) -> Result<ScoreCard, AssessmentError> {
    let missing = answers.missing(questions.len());
    if !missing.is_empty() {
        tracing::debug!("{} of {} questions unanswered", missing.len(), questions.len());
        return Err(AssessmentError::IncompleteAnswers { missing });
    }

    let mut total: i64 = 0;
    let mut categories = CategoryScores::new();
    for (index, question) in questions.iter().enumerate() {
        // Every index below questions.len() is answered past the check above
        let selected = answers
            .get(index)
            .ok_or(AssessmentError::IncompleteAnswers { missing: vec![index] })?;
        let overflow = || {
            tracing::error!("Score overflow at question {}", index);
            AssessmentError::ScoreOverflow { question: index }
        };
        total = total.checked_add(selected).ok_or_else(overflow)?;
        categories
            .add(&question.category, selected)
            .ok_or_else(overflow)?;
    }

    Ok(ScoreCard { total, categories })
}

/// Map a total score onto the overall risk tier. Negative totals are Low.
pub fn classify(total: i64) -> RiskTier {
    if total <= LOW_TIER_MAX {
        RiskTier::Low
    } else if total <= MEDIUM_TIER_MAX {
        RiskTier::Medium
    } else {
        RiskTier::High
    }
}

/// One-line description of what a tier means for the vendor
pub fn tier_description(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Low => "Low - Standard onboarding controls are sufficient",
        RiskTier::Medium => "Medium - Additional due diligence recommended before onboarding",
        RiskTier::High => "High - Security review and compensating controls required",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnswerOption;

    fn question(category: &str) -> Question {
        Question::new(
            "Does the vendor process personal data?",
            category,
            vec![
                AnswerOption::new("No", 0),
                AnswerOption::new("Some", 2),
                AnswerOption::new("Extensive", 5),
            ],
        )
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(15), RiskTier::Low);
        assert_eq!(classify(16), RiskTier::Medium);
        assert_eq!(classify(35), RiskTier::Medium);
        assert_eq!(classify(36), RiskTier::High);
    }

    #[test]
    fn test_classify_negative_and_zero_are_low() {
        assert_eq!(classify(0), RiskTier::Low);
        assert_eq!(classify(-40), RiskTier::Low);
        assert_eq!(classify(i64::MIN), RiskTier::Low);
        assert_eq!(classify(i64::MAX), RiskTier::High);
    }

    #[test]
    fn test_score_sums_total_and_categories() {
        let questions = vec![
            question("Data Sensitivity"),
            question("Internet Exposure"),
            question("Data Sensitivity"),
        ];
        let answers = AnswerSet::from_scores([(0, 5), (1, 2), (2, 2)]);
        let card = score(&questions, &answers).unwrap();
        assert_eq!(card.total, 9);
        assert_eq!(card.categories.get("Data Sensitivity"), 7);
        assert_eq!(card.categories.get("Internet Exposure"), 2);
        assert_eq!(card.categories.len(), 2);
        assert_eq!(card.categories.total(), Some(card.total));
    }

    #[test]
    fn test_score_reports_every_missing_index() {
        let questions = vec![question("A"), question("B"), question("C")];
        let answers = AnswerSet::from_scores([(1, 2)]);
        let err = score(&questions, &answers).unwrap_err();
        assert_eq!(err, AssessmentError::IncompleteAnswers { missing: vec![0, 2] });
    }

    #[test]
    fn test_score_empty_questionnaire() {
        let card = score(&[], &AnswerSet::new()).unwrap();
        assert_eq!(card.total, 0);
        assert!(card.categories.is_empty());
    }

    #[test]
    fn test_score_negative_options() {
        let questions = vec![Question::new(
            "Is the vendor ISO 27001 certified?",
            "Vendor Security Posture",
            vec![AnswerOption::new("Yes", -3), AnswerOption::new("No", 3)],
        )];
        let card = score(&questions, &AnswerSet::from_scores([(0, -3)])).unwrap();
        assert_eq!(card.total, -3);
        assert_eq!(classify(card.total), RiskTier::Low);
    }

    #[test]
    fn test_score_overflow_is_error() {
        let questions = vec![
            Question::new("A", "Data Sensitivity", vec![AnswerOption::new("max", i64::MAX)]),
            Question::new("B", "Vendor Location", vec![AnswerOption::new("one", 1)]),
        ];
        let answers = AnswerSet::from_scores([(0, i64::MAX), (1, 1)]);
        let err = score(&questions, &answers).unwrap_err();
        assert_eq!(err, AssessmentError::ScoreOverflow { question: 1 });
    }

    #[test]
    fn test_score_category_overflow_is_error() {
        // The overall total stays in range; only the category subtotal overflows
        let questions = vec![
            Question::new("A", "Vendor Location", vec![AnswerOption::new("offset", -5)]),
            Question::new("B", "Data Sensitivity", vec![AnswerOption::new("max", i64::MAX)]),
            Question::new("C", "Data Sensitivity", vec![AnswerOption::new("one", 1)]),
        ];
        let answers = AnswerSet::from_scores([(0, -5), (1, i64::MAX), (2, 1)]);
        let err = score(&questions, &answers).unwrap_err();
        assert_eq!(err, AssessmentError::ScoreOverflow { question: 2 });
    }

    #[test]
    fn test_category_scores_add_reports_overflow() {
        let mut scores = CategoryScores::new();
        assert_eq!(scores.add("A", i64::MAX), Some(i64::MAX));
        assert_eq!(scores.add("A", 1), None);
        assert_eq!(scores.get("A"), i64::MAX);
        assert_eq!(scores.add("B", 1), Some(1));
        assert_eq!(scores.total(), None);
    }

    #[test]
    fn test_category_scores_missing_key_is_zero() {
        let mut scores = CategoryScores::new();
        assert_eq!(scores.get("Vendor Location"), 0);
        scores.add("Vendor Location", 3);
        scores.add("Vendor Location", 1);
        assert_eq!(scores.get("Vendor Location"), 4);
    }

    #[test]
    fn test_category_scores_keep_first_appearance_order() {
        let mut scores = CategoryScores::new();
        scores.add("B", 1);
        scores.add("A", 1);
        scores.add("B", 1);
        let names: Vec<&str> = scores.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["B", "A"]);
        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, r#"{"B":2,"A":1}"#);
    }

    #[test]
    fn test_tier_description_all_tiers() {
        assert!(tier_description(RiskTier::Low).starts_with("Low"));
        assert!(tier_description(RiskTier::Medium).starts_with("Medium"));
        assert!(tier_description(RiskTier::High).starts_with("High"));
    }
}
