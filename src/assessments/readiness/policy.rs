use super::config::ScoringConfig;
use super::domain::{AreaCategory, ReadinessStage};

/// Band an area score. Callers must have already ruled out the
/// insufficient-data override.
pub(crate) fn categorize_area(score: u16, config: &ScoringConfig) -> AreaCategory {
    if score <= config.development_ceiling {
        AreaCategory::Development
    } else if score <= config.balanced_ceiling {
        AreaCategory::Balanced
    } else {
        AreaCategory::Proficiency
    }
}

/// Band a total score into a readiness stage. Same caveat as
/// [`categorize_area`]: the insufficient-data override wins before this runs.
pub(crate) fn classify_stage(total_score: u16, config: &ScoringConfig) -> ReadinessStage {
    if total_score <= config.early_ceiling {
        ReadinessStage::Early
    } else if total_score <= config.mid_ceiling {
        ReadinessStage::Mid
    } else {
        ReadinessStage::Late
    }
}

/// Look up the one-line description for a category's display label.
///
/// Unrecognized labels map to an empty string; persisted records may carry
/// labels from a newer rubric than this build knows about.
pub fn describe_category(label: &str) -> &'static str {
    [
        AreaCategory::Development,
        AreaCategory::Balanced,
        AreaCategory::Proficiency,
        AreaCategory::InsufficientData,
    ]
    .into_iter()
    .find(|category| category.label() == label)
    .map(AreaCategory::description)
    .unwrap_or("")
}
