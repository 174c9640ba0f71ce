//! Answer aggregation: raw per-axis counts and normalized 0-100 scores.
//!
//! Pure functions of the inventory and the answer set. Same input always
//! produces same output.

use serde::{Deserialize, Serialize};

use crate::inventory::{AnswerSet, QuestionBank};
use crate::styles::Axis;

/// Amplification applied to normalized scores to widen the visual spread
/// on the radar chart. Tunable; the clamp to 100 holds for any value.
pub const AMPLIFICATION: f64 = 1.5;

/// Raw per-axis answer counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RawScores {
    pub ce: u32,
    pub ro: u32,
    pub ac: u32,
    pub ae: u32,
}

impl RawScores {
    /// Count for a single axis.
    pub fn get(&self, axis: Axis) -> u32 {
        match axis {
            Axis::ConcreteExperience => self.ce,
            Axis::ReflectiveObservation => self.ro,
            Axis::AbstractConceptualization => self.ac,
            Axis::ActiveExperimentation => self.ae,
        }
    }

    fn record(&mut self, axis: Axis) {
        match axis {
            Axis::ConcreteExperience => self.ce += 1,
            Axis::ReflectiveObservation => self.ro += 1,
            Axis::AbstractConceptualization => self.ac += 1,
            Axis::ActiveExperimentation => self.ae += 1,
        }
    }

    /// Total answers counted. Equals the number of answered questions
    /// whose ids exist in the bank.
    pub fn total(&self) -> u32 {
        self.ce + self.ro + self.ac + self.ae
    }
}

/// Normalized per-axis scores in `[0, 100]`, as consumed by the radar
/// chart and carried in the result contract's `axisData`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisData {
    pub ce: u8,
    pub ro: u8,
    pub ac: u8,
    pub ae: u8,
}

impl AxisData {
    /// Score for a single axis.
    pub fn get(&self, axis: Axis) -> u8 {
        match axis {
            Axis::ConcreteExperience => self.ce,
            Axis::ReflectiveObservation => self.ro,
            Axis::AbstractConceptualization => self.ac,
            Axis::ActiveExperimentation => self.ae,
        }
    }
}

/// Count one increment per answer whose chosen option's axis matches.
///
/// Answer ids not present in the bank are silently ignored. The bank is
/// static and ids are generated from it, so an unknown id is a stale
/// entry, not an error.
pub fn tally(bank: &QuestionBank, answers: &AnswerSet) -> RawScores {
    let mut raw = RawScores::default();

    for (id, choice) in answers.iter() {
        if let Some(question) = bank.question(id) {
            raw.record(question.chosen(choice).axis);
        }
    }

    raw
}

/// Rescale raw counts to `[0, 100]` with amplification and clamp.
///
/// `normalized = round(raw / total * 100 * AMPLIFICATION)`, clamped to
/// 100. A zero total is treated as 1, so an empty answer set yields
/// all-zero scores. Idempotent under re-clamping; never negative.
pub fn normalize(raw: &RawScores) -> AxisData {
    let total = raw.total().max(1) as f64;

    let scale = |count: u32| -> u8 {
        let value = (count as f64 / total * 100.0 * AMPLIFICATION).round();
        value.min(100.0) as u8
    };

    AxisData {
        ce: scale(raw.ce),
        ro: scale(raw.ro),
        ac: scale(raw.ac),
        ae: scale(raw.ae),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Choice;
    use proptest::prelude::*;

    #[test]
    fn test_worked_scenario_from_four_answers() {
        // Over the builtin bank: 1:A (CE), 2:B (AE), 3:A (AC), 4:B (AE).
        let bank = QuestionBank::builtin();
        let answers: AnswerSet = [
            (1, Choice::A),
            (2, Choice::B),
            (3, Choice::A),
            (4, Choice::B),
        ]
        .into_iter()
        .collect();

        let raw = tally(&bank, &answers);
        assert_eq!(raw, RawScores { ce: 1, ro: 0, ac: 1, ae: 2 });
        assert_eq!(raw.total(), 4);

        let normalized = normalize(&raw);
        assert_eq!(normalized, AxisData { ce: 38, ro: 0, ac: 38, ae: 75 });
    }

    #[test]
    fn test_empty_answers_yield_all_zero() {
        let bank = QuestionBank::builtin();
        let raw = tally(&bank, &AnswerSet::new());

        assert_eq!(raw, RawScores::default());
        assert_eq!(normalize(&raw), AxisData::default());
    }

    #[test]
    fn test_unknown_question_ids_are_ignored() {
        let bank = QuestionBank::builtin();
        let answers: AnswerSet = [(1, Choice::A), (99, Choice::B), (4000, Choice::A)]
            .into_iter()
            .collect();

        let raw = tally(&bank, &answers);
        assert_eq!(raw.total(), 1);
        assert_eq!(raw.ce, 1);
    }

    #[test]
    fn test_amplified_dominant_axis_clamps_to_100() {
        // Five answers, all landing on AC: 5/5 * 100 * 1.5 would be 150.
        let bank = QuestionBank::builtin();
        let answers: AnswerSet = [
            (1, Choice::B),
            (3, Choice::A),
            (5, Choice::B),
            (7, Choice::B),
            (8, Choice::B),
        ]
        .into_iter()
        .collect();

        let normalized = normalize(&tally(&bank, &answers));
        assert_eq!(normalized.ac, 100);
        for axis in Axis::ALL {
            assert!(normalized.get(axis) <= 100);
        }
    }

    fn arb_answers() -> impl Strategy<Value = AnswerSet> {
        proptest::collection::vec((1u32..=8, prop_oneof![Just(Choice::A), Just(Choice::B)]), 0..8)
            .prop_map(|entries| entries.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_raw_counts_sum_to_answer_count(answers in arb_answers()) {
            let bank = QuestionBank::builtin();
            let raw = tally(&bank, &answers);
            prop_assert_eq!(raw.total() as usize, answers.len());
        }

        #[test]
        fn prop_normalized_scores_stay_in_range(answers in arb_answers()) {
            let bank = QuestionBank::builtin();
            let normalized = normalize(&tally(&bank, &answers));
            for axis in Axis::ALL {
                prop_assert!(normalized.get(axis) <= 100);
            }
        }

        #[test]
        fn prop_scoring_is_deterministic(answers in arb_answers()) {
            let bank = QuestionBank::builtin();
            let first = normalize(&tally(&bank, &answers));
            let second = normalize(&tally(&bank, &answers));
            prop_assert_eq!(first, second);
        }
    }
}
