//! The result contract: the validated data shape presentation consumes.
//!
//! An [`AnalysisResult`] is produced either by the external classifier or
//! by one of the local fallback constructors. It is never mutated after
//! creation and not persisted beyond the session.

mod schema;

pub use schema::{analysis_schema, is_valid_analysis, validate_analysis_schema, SchemaError};

use serde::{Deserialize, Serialize};

use crate::scoring::AxisData;
use crate::styles::LearningStyle;

/// A complete learning-style analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// The identified Kolb learning style
    pub style: LearningStyle,

    /// Concise description of the respondent's learning personality
    pub description: String,

    /// 3-4 key strengths
    pub strengths: Vec<String>,

    /// 4-5 tailored study or work strategies
    pub recommendations: Vec<String>,

    /// Normalized per-axis scores for the radar chart
    #[serde(rename = "axisData")]
    pub axis_data: AxisData,
}

impl AnalysisResult {
    /// The fixed demonstration result returned when no service credential
    /// is configured. Deterministic sample values; clearly generic, but a
    /// fully populated contract.
    pub fn demonstration() -> Self {
        Self {
            style: LearningStyle::Divergent,
            description: "Demonstration result (no service credential configured): you tend to \
                          view concrete situations from many perspectives and generate ideas \
                          freely."
                .to_string(),
            strengths: vec![
                "Imagination".to_string(),
                "Brainstorming".to_string(),
                "Open-mindedness".to_string(),
            ],
            recommendations: vec![
                "Group discussion and brainstorming sessions".to_string(),
                "Mind maps and visual summaries".to_string(),
                "Personalized feedback from mentors".to_string(),
                "Case studies drawn from real situations".to_string(),
            ],
            axis_data: AxisData {
                ce: 80,
                ro: 70,
                ac: 30,
                ae: 40,
            },
        }
    }

    /// The degraded result returned when the classifier was reached but
    /// did not produce a usable answer.
    ///
    /// The narrative text is static, but `axis_data` carries the scores
    /// computed locally from the respondent's actual answers, so the
    /// chart stays truthful even when the words are generic.
    pub fn degraded(axis_data: AxisData) -> Self {
        Self {
            style: LearningStyle::Divergent,
            description: "The analysis service could not produce a reading this time. The chart \
                          below reflects your actual answers; the text is general guidance. \
                          Please submit the analysis again for a personalized narrative."
                .to_string(),
            strengths: vec![
                "You completed the full inventory".to_string(),
                "Your axis chart shows where your preferences lean".to_string(),
                "Your answers are ready to re-submit at any time".to_string(),
            ],
            recommendations: vec![
                "Submit the analysis again in a few minutes".to_string(),
                "Compare the four axes on your chart and note which two lead".to_string(),
                "Read a short overview of the four Kolb styles and find your pairing".to_string(),
                "Retake the inventory later to check how stable your preferences are".to_string(),
            ],
            axis_data,
        }
    }
}
