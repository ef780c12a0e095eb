//! Core domain library for the StudyPath academic planning platform.
//!
//! The web and persistence layers live elsewhere; this crate holds the pure
//! scoring logic they call into. Everything here is side-effect-free value
//! plumbing: validated inputs in, classified results out.

pub mod assessments;

pub use assessments::readiness::{
    describe_category, validate_and_normalize, AnswerChoice, AnswerVector, Area, AreaCategory,
    AreaScore, AssessmentResult, ReadinessEngine, ReadinessStage, ScoringConfig, ValidationError,
};
