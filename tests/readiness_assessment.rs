use serde_json::json;
use studypath::{
    describe_category, validate_and_normalize, AreaCategory, ReadinessEngine, ReadinessStage,
    ValidationError,
};

fn submission(symbols: &str) -> Vec<String> {
    symbols.chars().map(|symbol| symbol.to_string()).collect()
}

#[test]
fn assesses_a_mixed_case_submission_end_to_end() {
    let engine = ReadinessEngine::default();

    let result = engine
        .assess(submission("aBcDabCdAbcd"))
        .expect("mixed case submission is valid");

    assert_eq!(result.total_score, 750);
    assert_eq!(result.stage, ReadinessStage::Mid);
    assert_eq!(result.areas.len(), 4);
}

#[test]
fn rejects_a_submission_with_the_wrong_length() {
    let engine = ReadinessEngine::default();

    let error = engine
        .assess(submission("ABCDABCDABCDA"))
        .expect_err("thirteen answers must fail");

    assert!(matches!(
        error,
        ValidationError::AnswerCount { found: 13, .. }
    ));
    assert_eq!(error.to_string(), "expected 12 answers, received 13");
}

#[test]
fn surfaces_the_offending_question_in_the_error_message() {
    let error = validate_and_normalize(submission("ABCDEFABCDEA")).expect_err("'F' must fail");

    assert_eq!(
        error.to_string(),
        "question 6: 'F' is not one of the answer choices A-E"
    );
}

#[test]
fn strong_submission_reaches_late_stage() {
    let result = ReadinessEngine::default()
        .assess(submission("DDDDDDDDDDDD"))
        .expect("valid submission");

    assert_eq!(result.total_score, 1200);
    assert_eq!(result.stage, ReadinessStage::Late);
    assert!(result
        .areas
        .values()
        .all(|area| area.score == 300 && area.category == AreaCategory::Proficiency));
}

#[test]
fn unanswered_submission_is_flagged_not_scored_low() {
    let result = ReadinessEngine::default()
        .assess(submission("EEEEEEEEEEEE"))
        .expect("valid submission");

    assert_eq!(result.total_score, 0);
    assert_eq!(result.stage, ReadinessStage::InsufficientData);
    assert!(result
        .areas
        .values()
        .all(|area| area.category == AreaCategory::InsufficientData));
    assert_eq!(
        describe_category(AreaCategory::InsufficientData.label()),
        AreaCategory::InsufficientData.description()
    );
}

#[test]
fn persisted_shape_is_stable() {
    let result = ReadinessEngine::default()
        .assess(submission("EAAEAAEAAEAA"))
        .expect("valid submission");

    let value = serde_json::to_value(&result).expect("result serializes");

    assert_eq!(
        value,
        json!({
            "areas": {
                "clarity": { "score": 50, "category": "development" },
                "engagement": { "score": 50, "category": "development" },
                "preparation": { "score": 50, "category": "development" },
                "support": { "score": 50, "category": "development" },
            },
            "total_score": 200,
            "stage": "early",
        })
    );
}

#[test]
fn persisted_results_round_trip() {
    let result = ReadinessEngine::default()
        .assess(submission("BCDBCDBCDBCD"))
        .expect("valid submission");

    let stored = serde_json::to_string(&result).expect("result serializes");
    let restored: studypath::AssessmentResult =
        serde_json::from_str(&stored).expect("stored result deserializes");

    assert_eq!(restored, result);
}
