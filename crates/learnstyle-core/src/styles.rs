//! The four Kolb axes and the style table.
//!
//! The style table is the single source of truth for the style/axis-pair
//! mapping. The prompt text sent to the classifier and any local checks
//! are both generated from [`LearningStyle::dominant_axes`] — the pairing
//! rules are never written out twice.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four orthogonal learning-preference dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Concrete Experience (feeling)
    #[serde(rename = "CE")]
    ConcreteExperience,

    /// Reflective Observation (watching)
    #[serde(rename = "RO")]
    ReflectiveObservation,

    /// Abstract Conceptualization (thinking)
    #[serde(rename = "AC")]
    AbstractConceptualization,

    /// Active Experimentation (doing)
    #[serde(rename = "AE")]
    ActiveExperimentation,
}

impl Axis {
    /// All four axes, in canonical order.
    pub const ALL: [Axis; 4] = [
        Axis::ConcreteExperience,
        Axis::ReflectiveObservation,
        Axis::AbstractConceptualization,
        Axis::ActiveExperimentation,
    ];

    /// Two-letter code used in question files and prompt text.
    pub fn code(&self) -> &'static str {
        match self {
            Axis::ConcreteExperience => "CE",
            Axis::ReflectiveObservation => "RO",
            Axis::AbstractConceptualization => "AC",
            Axis::ActiveExperimentation => "AE",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Axis::ConcreteExperience => "Concrete Experience",
            Axis::ReflectiveObservation => "Reflective Observation",
            Axis::AbstractConceptualization => "Abstract Conceptualization",
            Axis::ActiveExperimentation => "Active Experimentation",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One of the four labeled combinations of two dominant axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearningStyle {
    Divergent,
    Assimilator,
    Convergent,
    Accommodator,
}

impl LearningStyle {
    /// All four styles, in canonical order.
    pub const ALL: [LearningStyle; 4] = [
        LearningStyle::Divergent,
        LearningStyle::Assimilator,
        LearningStyle::Convergent,
        LearningStyle::Accommodator,
    ];

    /// The fixed pair of dominant axes that defines this style.
    ///
    /// Divergent = CE+RO, Assimilator = AC+RO, Convergent = AC+AE,
    /// Accommodator = CE+AE. These pairings are part of the external
    /// contract, not a suggestion.
    pub fn dominant_axes(&self) -> (Axis, Axis) {
        match self {
            LearningStyle::Divergent => (Axis::ConcreteExperience, Axis::ReflectiveObservation),
            LearningStyle::Assimilator => {
                (Axis::AbstractConceptualization, Axis::ReflectiveObservation)
            }
            LearningStyle::Convergent => {
                (Axis::AbstractConceptualization, Axis::ActiveExperimentation)
            }
            LearningStyle::Accommodator => (Axis::ConcreteExperience, Axis::ActiveExperimentation),
        }
    }

    /// Look up the style for an unordered pair of axes.
    ///
    /// Returns `None` for the two diagonal pairs (CE+AC, RO+AE), which do
    /// not name a style.
    pub fn from_axis_pair(a: Axis, b: Axis) -> Option<LearningStyle> {
        LearningStyle::ALL.into_iter().find(|style| {
            let (x, y) = style.dominant_axes();
            (x, y) == (a, b) || (x, y) == (b, a)
        })
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LearningStyle::Divergent => "Divergent",
            LearningStyle::Assimilator => "Assimilator",
            LearningStyle::Convergent => "Convergent",
            LearningStyle::Accommodator => "Accommodator",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_axis_codes_roundtrip_serde() {
        for axis in Axis::ALL {
            let json = serde_json::to_string(&axis).unwrap();
            assert_eq!(json, format!("\"{}\"", axis.code()));
            let back: Axis = serde_json::from_str(&json).unwrap();
            assert_eq!(back, axis);
        }
    }

    #[test]
    fn test_style_pairs_are_distinct_and_exhaustive() {
        // Four labels, four distinct unordered pairs, no reuse.
        let pairs: BTreeSet<(Axis, Axis)> = LearningStyle::ALL
            .into_iter()
            .map(|s| {
                let (a, b) = s.dominant_axes();
                if a <= b {
                    (a, b)
                } else {
                    (b, a)
                }
            })
            .collect();
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn test_from_axis_pair_is_order_insensitive() {
        for style in LearningStyle::ALL {
            let (a, b) = style.dominant_axes();
            assert_eq!(LearningStyle::from_axis_pair(a, b), Some(style));
            assert_eq!(LearningStyle::from_axis_pair(b, a), Some(style));
        }
    }

    #[test]
    fn test_diagonal_pairs_name_no_style() {
        assert_eq!(
            LearningStyle::from_axis_pair(
                Axis::ConcreteExperience,
                Axis::AbstractConceptualization
            ),
            None
        );
        assert_eq!(
            LearningStyle::from_axis_pair(
                Axis::ReflectiveObservation,
                Axis::ActiveExperimentation
            ),
            None
        );
    }

    #[test]
    fn test_style_serde_uses_display_names() {
        let json = serde_json::to_string(&LearningStyle::Accommodator).unwrap();
        assert_eq!(json, "\"Accommodator\"");
        let back: LearningStyle = serde_json::from_str("\"Divergent\"").unwrap();
        assert_eq!(back, LearningStyle::Divergent);
    }
}
