//! Assessment module - scoring, classification and advice

pub mod advisor;
pub mod scoring;

pub use advisor::{advise, severity_for, Advice, Advisor};
pub use scoring::{classify, score, tier_description, CategoryScores, ScoreCard};

use crate::{AnswerSet, Assessment, AssessmentError, CategoryAdvice, QuestionSet};

/// Score an answer set against a questionnaire and attach tier and advice.
pub fn assess(
    questions: &QuestionSet,
    answers: &AnswerSet,
    advisor: &Advisor,
) -> Result<Assessment, AssessmentError> {
    let card = score(questions.questions(), answers)?;
    let tier = classify(card.total);

    let advice = card
        .categories
        .iter()
        .map(|(category, subtotal)| {
            let Advice { severity, text } = advisor.advise(category, subtotal);
            CategoryAdvice {
                category: category.to_string(),
                subtotal,
                severity,
                text,
            }
        })
        .collect();

    tracing::info!(
        "Scored {} answers: total {} ({})",
        questions.len(),
        card.total,
        tier
    );

    Ok(Assessment {
        total_score: card.total,
        tier,
        category_scores: card.categories,
        advice,
        question_count: questions.len(),
        assessed_at: chrono::Utc::now().to_rfc3339(),
        questionnaire_digest: questions.digest().map(str::to_string),
    })
}
