//! Integration tests: full assessment pipeline against test-data/

use riskcheck::answers::load_answers;
use riskcheck::assessment::{assess, Advisor};
use riskcheck::questions::{load_questions, parse_questions, QuestionSource, SAMPLE_QUESTIONS};
use riskcheck::reporter::HtmlReporter;
use riskcheck::{AnswerSet, AssessmentError, QuestionSet, RiskTier};
use std::path::Path;

fn load(path: &str) -> QuestionSet {
    load_questions(&QuestionSource::File(path.into()))
        .unwrap_or_else(|e| panic!("load({}) failed: {}", path, e))
}

#[test]
fn highest_options_on_three_questions_is_low() {
    let questions = load("test-data/three-questions.json");
    let answers = load_answers(Path::new("test-data/answers-highest.json"), &questions).unwrap();
    let result = assess(&questions, &answers, &Advisor::new()).unwrap();

    assert_eq!(result.total_score, 9);
    assert_eq!(result.tier, RiskTier::Low);
    assert_eq!(result.advice.len(), 3);
    for entry in &result.advice {
        assert_eq!(entry.subtotal, 3);
        assert_eq!(entry.severity, RiskTier::Medium);
        assert!(!entry.text.is_empty(), "{} should have advice", entry.category);
    }
    assert_eq!(
        result.questionnaire_digest.as_deref(),
        questions.digest(),
        "report is tied to the loaded document"
    );
}

#[test]
fn partial_answers_are_incomplete() {
    let questions = load("test-data/three-questions.json");
    let answers = load_answers(Path::new("test-data/answers-partial.json"), &questions).unwrap();
    let err = assess(&questions, &answers, &Advisor::new()).unwrap_err();
    assert_eq!(err, AssessmentError::IncompleteAnswers { missing: vec![1, 2] });
}

#[test]
fn missing_options_is_load_error() {
    let err = load_questions(&QuestionSource::File("test-data/missing-options.json".into()))
        .unwrap_err();
    assert!(matches!(err, AssessmentError::Load(_)));
    assert!(err.to_string().contains("index 1"));
}

#[test]
fn empty_options_load_but_do_not_render() {
    let questions = load("test-data/empty-options.json");
    assert_eq!(questions.len(), 1);
    let err = HtmlReporter::new().render_form(&questions).unwrap_err();
    assert!(matches!(err, AssessmentError::Render(_)));
}

#[test]
fn sample_questionnaire_worst_case_is_high() {
    let questions = parse_questions(SAMPLE_QUESTIONS).unwrap();
    let worst = AnswerSet::from_selections(
        &questions,
        questions
            .iter()
            .enumerate()
            .map(|(i, q)| (i, q.options.len() - 1)),
    )
    .unwrap();
    let result = assess(&questions, &worst, &Advisor::new()).unwrap();
    assert_eq!(result.total_score, 38);
    assert_eq!(result.tier, RiskTier::High);

    let posture = result
        .advice
        .iter()
        .find(|a| a.category == "Vendor Security Posture")
        .unwrap();
    assert_eq!(posture.subtotal, 8);
    assert_eq!(posture.severity, RiskTier::High);
}

#[test]
fn sample_questionnaire_best_case_is_low() {
    let questions = parse_questions(SAMPLE_QUESTIONS).unwrap();
    let best =
        AnswerSet::from_selections(&questions, (0..questions.len()).map(|i| (i, 0))).unwrap();
    let result = assess(&questions, &best, &Advisor::new()).unwrap();
    assert_eq!(result.total_score, 0);
    assert_eq!(result.tier, RiskTier::Low);
    assert!(result.advice.iter().all(|a| a.severity == RiskTier::Low));
}

#[test]
fn overflowing_scores_are_an_error_not_a_wrap() {
    let questions = load("test-data/overflow-scores.json");
    assert_eq!(questions[0].options[0].score, i64::MAX);
    let answers = AnswerSet::from_selections(&questions, [(0, 0), (1, 0)]).unwrap();
    let err = assess(&questions, &answers, &Advisor::new()).unwrap_err();
    assert_eq!(err, AssessmentError::ScoreOverflow { question: 1 });
}
