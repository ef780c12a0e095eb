use super::domain::{AnswerChoice, AnswerVector, QUESTION_COUNT};

/// Validation errors raised while normalizing a submitted answer sheet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("expected {expected} answers, received {found}")]
    AnswerCount { expected: usize, found: usize },
    #[error("question {question}: '{value}' is not one of the answer choices A-E")]
    InvalidAnswer { question: usize, value: String },
}

/// Convert raw submitted values into a validated [`AnswerVector`].
///
/// Values are matched case-insensitively against the answer alphabet and
/// normalized to their uppercase form; order is preserved. Errors carry the
/// 1-based question number so the caller can point at the offending field.
pub fn validate_and_normalize<I>(raw: I) -> Result<AnswerVector, ValidationError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let raw: Vec<_> = raw.into_iter().collect();
    if raw.len() != QUESTION_COUNT {
        return Err(ValidationError::AnswerCount {
            expected: QUESTION_COUNT,
            found: raw.len(),
        });
    }

    let mut answers = [AnswerChoice::E; QUESTION_COUNT];
    for (position, value) in raw.iter().enumerate() {
        let value = value.as_ref();
        answers[position] =
            AnswerChoice::from_symbol(value).ok_or_else(|| ValidationError::InvalidAnswer {
                question: position + 1,
                value: value.to_string(),
            })?;
    }

    Ok(AnswerVector::new(answers))
}
