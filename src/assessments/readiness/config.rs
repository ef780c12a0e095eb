use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{AnswerChoice, Area, QUESTIONS_PER_AREA};

/// Rubric configuration backing the readiness scoring engine.
///
/// The question partition and point table are data rather than code so a
/// future question-set revision stays a configuration change. The `Default`
/// impl carries the current questionnaire's constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points awarded per answer choice.
    pub answer_points: BTreeMap<AnswerChoice, u16>,
    /// Question positions (0-based) feeding each area.
    pub area_questions: BTreeMap<Area, [usize; QUESTIONS_PER_AREA]>,
    /// The choice that carries no signal about readiness.
    pub no_signal_choice: AnswerChoice,
    /// Submissions with at least this many no-signal answers are
    /// unclassifiable regardless of their numeric scores.
    pub no_signal_cutoff: usize,
    /// Area scores at or below this are Development; above it, Balanced.
    pub development_ceiling: u16,
    /// Area scores at or below this (and above the development ceiling) are
    /// Balanced; above it, Proficiency.
    pub balanced_ceiling: u16,
    /// Totals at or below this are Early; above it, Mid.
    pub early_ceiling: u16,
    /// Totals at or below this (and above the early ceiling) are Mid; above
    /// it, Late.
    pub mid_ceiling: u16,
}

impl ScoringConfig {
    pub fn points_for(&self, choice: AnswerChoice) -> u16 {
        self.answer_points.get(&choice).copied().unwrap_or(0)
    }

    /// Highest score a single area can reach with this point table.
    pub fn area_score_cap(&self) -> u16 {
        let max_points = self
            .answer_points
            .values()
            .copied()
            .max()
            .unwrap_or(0);
        max_points * QUESTIONS_PER_AREA as u16
    }

    /// Highest total score across all areas.
    pub fn total_score_cap(&self) -> u16 {
        self.area_score_cap() * self.area_questions.len() as u16
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let answer_points = BTreeMap::from([
            (AnswerChoice::A, 25),
            (AnswerChoice::B, 50),
            (AnswerChoice::C, 75),
            (AnswerChoice::D, 100),
            (AnswerChoice::E, 0),
        ]);

        let area_questions = BTreeMap::from([
            (Area::Clarity, [0, 1, 2]),
            (Area::Engagement, [3, 4, 5]),
            (Area::Preparation, [6, 7, 8]),
            (Area::Support, [9, 10, 11]),
        ]);

        Self {
            answer_points,
            area_questions,
            no_signal_choice: AnswerChoice::E,
            no_signal_cutoff: 7,
            development_ceiling: 150,
            balanced_ceiling: 225,
            early_ceiling: 600,
            mid_ceiling: 900,
        }
    }
}
