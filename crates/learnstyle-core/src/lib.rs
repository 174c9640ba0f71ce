//! # learnstyle-core
//!
//! Deterministic engine for the Kolb learning-style inventory.
//!
//! This crate owns everything that can be computed without the external
//! classifier:
//! - The question inventory and the respondent's answers
//! - Answer aggregation into raw and normalized axis scores
//! - The style table (the four style/axis-pair mappings)
//! - The result contract and its JSON Schema validation
//! - The demonstration and degraded fallback results
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **No network calls**: Aggregation and validation are pure
//! 3. **Clamped**: Normalized scores always lie in `[0, 100]`
//!
//! ## Example
//!
//! ```rust,ignore
//! use learnstyle_core::{score, AnswerSet, Choice, QuestionBank};
//!
//! let bank = QuestionBank::builtin();
//! let mut answers = AnswerSet::new();
//! answers.record(1, Choice::A);
//!
//! let (raw, normalized) = score(&bank, &answers);
//! assert_eq!(raw.total(), 1);
//! ```

pub mod analysis;
pub mod inventory;
pub mod profile;
pub mod scoring;
pub mod styles;

// Re-export main types at crate root
pub use analysis::{
    analysis_schema, is_valid_analysis, validate_analysis_schema, AnalysisResult, SchemaError,
};
pub use inventory::{
    AnswerSet, Choice, InventoryError, Question, QuestionBank, QuestionOption,
};
pub use profile::{EducationalContext, ProfileError, RespondentProfile, MIN_AGE};
pub use scoring::{normalize, tally, AxisData, RawScores, AMPLIFICATION};
pub use styles::{Axis, LearningStyle};

/// Aggregate an answer set into raw and normalized axis scores.
///
/// Convenience over [`tally`] and [`normalize`]; pure function of its
/// inputs.
pub fn score(bank: &QuestionBank, answers: &AnswerSet) -> (RawScores, AxisData) {
    let raw = tally(bank, answers);
    let normalized = normalize(&raw);
    (raw, normalized)
}
