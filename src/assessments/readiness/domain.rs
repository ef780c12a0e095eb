use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of questions on the readiness questionnaire.
pub const QUESTION_COUNT: usize = 12;

/// Questions contributing to each assessment area.
pub const QUESTIONS_PER_AREA: usize = 3;

/// Single response drawn from the questionnaire's five-letter alphabet.
///
/// `E` is the no-signal choice ("I don't know / not applicable"); enough of
/// them invalidates the whole submission rather than dragging scores down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnswerChoice {
    A,
    B,
    C,
    D,
    E,
}

impl AnswerChoice {
    pub const ALL: [AnswerChoice; 5] = [
        AnswerChoice::A,
        AnswerChoice::B,
        AnswerChoice::C,
        AnswerChoice::D,
        AnswerChoice::E,
    ];

    /// Parse a raw submitted value, folding case.
    pub fn from_symbol(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "A" => Some(AnswerChoice::A),
            "B" => Some(AnswerChoice::B),
            "C" => Some(AnswerChoice::C),
            "D" => Some(AnswerChoice::D),
            "E" => Some(AnswerChoice::E),
            _ => None,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            AnswerChoice::A => "A",
            AnswerChoice::B => "B",
            AnswerChoice::C => "C",
            AnswerChoice::D => "D",
            AnswerChoice::E => "E",
        }
    }
}

/// Assessment dimension covered by three questionnaire items each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    Clarity,
    Engagement,
    Preparation,
    Support,
}

impl Area {
    pub const ALL: [Area; 4] = [
        Area::Clarity,
        Area::Engagement,
        Area::Preparation,
        Area::Support,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Area::Clarity => "clarity",
            Area::Engagement => "engagement",
            Area::Preparation => "preparation",
            Area::Support => "support",
        }
    }
}

/// Validated, uppercase-normalized answer sheet.
///
/// Length and alphabet invariants are carried by the type; the only fallible
/// way to build one from raw input is [`validate_and_normalize`].
///
/// [`validate_and_normalize`]: super::validate_and_normalize
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerVector([AnswerChoice; QUESTION_COUNT]);

impl AnswerVector {
    pub fn new(answers: [AnswerChoice; QUESTION_COUNT]) -> Self {
        Self(answers)
    }

    pub fn answers(&self) -> &[AnswerChoice; QUESTION_COUNT] {
        &self.0
    }

    /// Answer at a question position, if the position exists.
    pub fn answer(&self, position: usize) -> Option<AnswerChoice> {
        self.0.get(position).copied()
    }

    /// How many answers equal the given choice.
    pub fn count_of(&self, choice: AnswerChoice) -> usize {
        self.0.iter().filter(|answer| **answer == choice).count()
    }
}

impl From<[AnswerChoice; QUESTION_COUNT]> for AnswerVector {
    fn from(answers: [AnswerChoice; QUESTION_COUNT]) -> Self {
        Self::new(answers)
    }
}

/// Category assigned to an area once its score is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaCategory {
    Development,
    Balanced,
    Proficiency,
    InsufficientData,
}

impl AreaCategory {
    pub const fn label(self) -> &'static str {
        match self {
            AreaCategory::Development => "Development Area",
            AreaCategory::Balanced => "Balanced Zone",
            AreaCategory::Proficiency => "Proficiency Area",
            AreaCategory::InsufficientData => "Insufficient Data",
        }
    }

    /// One-line description surfaced next to the category label.
    pub const fn description(self) -> &'static str {
        match self {
            AreaCategory::Development => {
                "This area needs focused attention before it can support your goals."
            }
            AreaCategory::Balanced => {
                "This area is steady; targeted practice will move it forward."
            }
            AreaCategory::Proficiency => "This area is a strength you can build on.",
            AreaCategory::InsufficientData => {
                "Too many questions went unanswered to assess this area reliably."
            }
        }
    }
}

/// Overall readiness classification derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStage {
    Early,
    Mid,
    Late,
    InsufficientData,
}

impl ReadinessStage {
    pub const fn label(self) -> &'static str {
        match self {
            ReadinessStage::Early => "Early",
            ReadinessStage::Mid => "Mid",
            ReadinessStage::Late => "Late",
            ReadinessStage::InsufficientData => "Insufficient Data",
        }
    }
}

/// Per-area score with its classification label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaScore {
    pub score: u16,
    pub category: AreaCategory,
}

/// Aggregated outcome for one questionnaire submission.
///
/// The caller owns persistence; this type only fixes the shape it embeds
/// (four keyed area scores, a total, a stage).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub areas: BTreeMap<Area, AreaScore>,
    pub total_score: u16,
    pub stage: ReadinessStage,
}

impl AssessmentResult {
    pub fn area(&self, area: Area) -> Option<&AreaScore> {
        self.areas.get(&area)
    }
}
