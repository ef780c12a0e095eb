//! Readiness assessment scoring and classification.
//!
//! A submission is twelve answers, three per area. Intake normalizes and
//! validates the raw values, `rules` turns the validated sheet into numeric
//! scores, and `policy` bands those scores into categories and a stage. A
//! submission dominated by no-signal answers is reported as insufficient
//! data instead of being classified on misleading numbers.

mod config;
pub mod domain;
mod intake;
mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use config::ScoringConfig;
pub use domain::{
    AnswerChoice, AnswerVector, Area, AreaCategory, AreaScore, AssessmentResult, ReadinessStage,
    QUESTION_COUNT,
};
pub use intake::{validate_and_normalize, ValidationError};
pub use policy::describe_category;

/// Stateless engine applying the rubric configuration to validated answers.
pub struct ReadinessEngine {
    config: ScoringConfig,
}

impl ReadinessEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a validated answer sheet. Total over its domain; cannot fail.
    pub fn score(&self, answers: &AnswerVector) -> AssessmentResult {
        let (area_scores, total_score, signals) = rules::score_answers(answers, &self.config);

        // One determination covers both the per-area labels and the stage.
        let insufficient = signals.no_signal_answers >= self.config.no_signal_cutoff;

        let areas = area_scores
            .into_iter()
            .map(|(area, score)| {
                let category = if insufficient {
                    AreaCategory::InsufficientData
                } else {
                    policy::categorize_area(score, &self.config)
                };
                (area, AreaScore { score, category })
            })
            .collect();

        let stage = if insufficient {
            ReadinessStage::InsufficientData
        } else {
            policy::classify_stage(total_score, &self.config)
        };

        tracing::debug!(
            total_score,
            stage = stage.label(),
            no_signal_answers = signals.no_signal_answers,
            "scored readiness assessment"
        );

        AssessmentResult {
            areas,
            total_score,
            stage,
        }
    }

    /// Validate raw submitted values and score them in one call.
    pub fn assess<I>(&self, raw: I) -> Result<AssessmentResult, ValidationError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let answers = validate_and_normalize(raw)?;
        Ok(self.score(&answers))
    }
}

impl Default for ReadinessEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
