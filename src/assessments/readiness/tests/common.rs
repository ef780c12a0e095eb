use crate::assessments::readiness::domain::{AnswerChoice, AnswerVector, QUESTION_COUNT};
use crate::assessments::readiness::ReadinessEngine;

pub(super) fn engine() -> ReadinessEngine {
    ReadinessEngine::default()
}

/// Build a validated vector from a twelve-symbol string such as
/// `"AADAADAADAAD"`. Panics on malformed input; tests own their fixtures.
pub(super) fn vector(symbols: &str) -> AnswerVector {
    let answers: Vec<AnswerChoice> = symbols
        .chars()
        .map(|symbol| {
            AnswerChoice::from_symbol(&symbol.to_string()).expect("fixture uses valid symbols")
        })
        .collect();
    let answers: [AnswerChoice; QUESTION_COUNT] =
        answers.try_into().expect("fixture has twelve symbols");
    AnswerVector::new(answers)
}

pub(super) fn uniform(choice: AnswerChoice) -> AnswerVector {
    AnswerVector::new([choice; QUESTION_COUNT])
}

pub(super) fn raw(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
