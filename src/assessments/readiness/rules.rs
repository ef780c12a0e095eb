use std::collections::BTreeMap;

use super::config::ScoringConfig;
use super::domain::{AnswerVector, Area};

/// Raw facts extracted during scoring that the policy layer consumes.
pub(crate) struct ScoreSignals {
    pub no_signal_answers: usize,
}

/// Sum each area's answers per the point table, clamped to the table's caps.
///
/// The total is the sum of the clamped per-area scores. Question positions
/// outside the vector contribute nothing.
pub(crate) fn score_answers(
    answers: &AnswerVector,
    config: &ScoringConfig,
) -> (BTreeMap<Area, u16>, u16, ScoreSignals) {
    let area_cap = config.area_score_cap();
    let mut area_scores = BTreeMap::new();
    let mut total: u16 = 0;

    for (&area, questions) in &config.area_questions {
        let raw: u16 = questions
            .iter()
            .filter_map(|&position| answers.answer(position))
            .map(|choice| config.points_for(choice))
            .sum();
        let score = raw.min(area_cap);
        area_scores.insert(area, score);
        total = total.saturating_add(score);
    }

    let total = total.min(config.total_score_cap());
    let signals = ScoreSignals {
        no_signal_answers: answers.count_of(config.no_signal_choice),
    };

    (area_scores, total, signals)
}
