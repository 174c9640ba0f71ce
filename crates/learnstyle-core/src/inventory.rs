//! The question inventory and the respondent's answers.
//!
//! The inventory is a static ordered catalog of binary-choice questions,
//! each option tagged with one of the four Kolb axes. It is defined once
//! at process start and never mutated. A custom inventory can be loaded
//! from a YAML file; it is validated structurally before use.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::styles::Axis;

/// Errors that can occur when loading a question inventory.
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Failed to read inventory file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Inventory contains no questions")]
    Empty,

    #[error("Duplicate question id: {0}")]
    DuplicateId(u32),

    #[error("Question {0} has an empty prompt")]
    EmptyPrompt(u32),

    #[error("Question {0} has an empty option text")]
    EmptyOption(u32),
}

/// Which of a question's two options the respondent picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::A => write!(f, "A"),
            Choice::B => write!(f, "B"),
        }
    }
}

/// One of the two mutually exclusive options of a question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionOption {
    /// The option text shown to the respondent
    pub text: String,

    /// The Kolb axis this option expresses a preference for
    pub axis: Axis,
}

/// A single binary-choice inventory question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    /// Unique identifier within the inventory
    pub id: u32,

    /// The question prompt
    pub prompt: String,

    /// Option A
    pub option_a: QuestionOption,

    /// Option B
    pub option_b: QuestionOption,
}

impl Question {
    /// The option the given choice selects.
    pub fn chosen(&self, choice: Choice) -> &QuestionOption {
        match choice {
            Choice::A => &self.option_a,
            Choice::B => &self.option_b,
        }
    }

    /// The option the given choice passes over.
    pub fn rejected(&self, choice: Choice) -> &QuestionOption {
        match choice {
            Choice::A => &self.option_b,
            Choice::B => &self.option_a,
        }
    }
}

/// The respondent's answers, keyed by question id.
///
/// Grows monotonically as the respondent progresses; insertion order is
/// irrelevant. Backed by a `BTreeMap` so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet(BTreeMap<u32, Choice>);

impl AnswerSet {
    /// Create an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a choice for a question, replacing any earlier choice.
    pub fn record(&mut self, question_id: u32, choice: Choice) {
        self.0.insert(question_id, choice);
    }

    /// The recorded choice for a question, if any.
    pub fn choice(&self, question_id: u32) -> Option<Choice> {
        self.0.get(&question_id).copied()
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no questions have been answered yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (question id, choice) pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Choice)> + '_ {
        self.0.iter().map(|(id, choice)| (*id, *choice))
    }

    /// Whether every question in the bank has an answer.
    pub fn is_complete(&self, bank: &QuestionBank) -> bool {
        bank.questions().iter().all(|q| self.0.contains_key(&q.id))
    }
}

impl FromIterator<(u32, Choice)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (u32, Choice)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The static question inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// The built-in eight-question Kolb inventory.
    pub fn builtin() -> Self {
        fn q(
            id: u32,
            prompt: &str,
            a_text: &str,
            a_axis: Axis,
            b_text: &str,
            b_axis: Axis,
        ) -> Question {
            Question {
                id,
                prompt: prompt.to_string(),
                option_a: QuestionOption {
                    text: a_text.to_string(),
                    axis: a_axis,
                },
                option_b: QuestionOption {
                    text: b_text.to_string(),
                    axis: b_axis,
                },
            }
        }

        use Axis::*;
        Self {
            questions: vec![
                q(
                    1,
                    "When I am learning something new, I prefer to...",
                    "Trust my feelings and intuition.",
                    ConcreteExperience,
                    "Trust logic and reasoning.",
                    AbstractConceptualization,
                ),
                q(
                    2,
                    "In a group project, I tend to...",
                    "Observe and listen before acting.",
                    ReflectiveObservation,
                    "Take charge and try new things right away.",
                    ActiveExperimentation,
                ),
                q(
                    3,
                    "I learn best when...",
                    "I have clear theories and concepts to work from.",
                    AbstractConceptualization,
                    "I can practice and get hands-on.",
                    ActiveExperimentation,
                ),
                q(
                    4,
                    "Faced with a complex problem, I...",
                    "Look for different perspectives and meanings.",
                    ReflectiveObservation,
                    "Look for the quickest practical solution.",
                    ActiveExperimentation,
                ),
                q(
                    5,
                    "My greatest strength as a learner is...",
                    "Being imaginative and sensitive to feelings.",
                    ConcreteExperience,
                    "Being analytical and organized.",
                    AbstractConceptualization,
                ),
                q(
                    6,
                    "In general, I am a person who...",
                    "Observes and reflects.",
                    ReflectiveObservation,
                    "Does and participates.",
                    ActiveExperimentation,
                ),
                q(
                    7,
                    "I prefer teachers or mentors who...",
                    "Focus on real-life examples and experience.",
                    ConcreteExperience,
                    "Focus on logic, concepts, and structure.",
                    AbstractConceptualization,
                ),
                q(
                    8,
                    "To make an important decision, I...",
                    "Consider how it affects the people involved.",
                    ConcreteExperience,
                    "Weigh the pros and cons objectively.",
                    AbstractConceptualization,
                ),
            ],
        }
    }

    /// Parse an inventory from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, InventoryError> {
        let bank: QuestionBank = serde_yaml::from_str(yaml)?;
        bank.validate()?;
        tracing::debug!(questions = bank.len(), "Loaded question inventory");
        Ok(bank)
    }

    /// Parse an inventory from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Validate the inventory structure.
    fn validate(&self) -> Result<(), InventoryError> {
        if self.questions.is_empty() {
            return Err(InventoryError::Empty);
        }

        let mut seen = std::collections::BTreeSet::new();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(InventoryError::DuplicateId(question.id));
            }
            if question.prompt.trim().is_empty() {
                return Err(InventoryError::EmptyPrompt(question.id));
            }
            if question.option_a.text.trim().is_empty() || question.option_b.text.trim().is_empty()
            {
                return Err(InventoryError::EmptyOption(question.id));
            }
        }

        Ok(())
    }

    /// Look up a question by id.
    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// All questions, in inventory order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the inventory is empty. Always false for a validated bank.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The questions grouped into presentation steps of `size`.
    pub fn steps(&self, size: usize) -> impl Iterator<Item = &[Question]> {
        self.questions.chunks(size.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bank_is_valid() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 8);
        assert!(bank.validate().is_ok());
    }

    #[test]
    fn test_chosen_and_rejected_are_complementary() {
        let bank = QuestionBank::builtin();
        let q = bank.question(1).unwrap();

        assert_eq!(q.chosen(Choice::A).axis, Axis::ConcreteExperience);
        assert_eq!(q.rejected(Choice::A).axis, Axis::AbstractConceptualization);
        assert_eq!(q.chosen(Choice::B), q.rejected(Choice::A));
    }

    #[test]
    fn test_answer_set_completeness() {
        let bank = QuestionBank::builtin();
        let mut answers = AnswerSet::new();
        assert!(!answers.is_complete(&bank));

        for q in bank.questions() {
            answers.record(q.id, Choice::A);
        }
        assert!(answers.is_complete(&bank));
        assert_eq!(answers.len(), bank.len());
    }

    #[test]
    fn test_answer_set_replaces_earlier_choice() {
        let mut answers = AnswerSet::new();
        answers.record(3, Choice::A);
        answers.record(3, Choice::B);

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.choice(3), Some(Choice::B));
    }

    #[test]
    fn test_steps_batch_in_inventory_order() {
        let bank = QuestionBank::builtin();
        let steps: Vec<&[Question]> = bank.steps(4).collect();

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].len(), 4);
        assert_eq!(steps[0][0].id, 1);
        assert_eq!(steps[1][0].id, 5);
    }

    #[test]
    fn test_from_yaml_valid() {
        let yaml = r#"
questions:
  - id: 1
    prompt: "Pick one"
    option_a: { text: "Feel it out", axis: CE }
    option_b: { text: "Think it through", axis: AC }
"#;
        let bank = QuestionBank::from_yaml(yaml).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.question(1).unwrap().option_b.axis, Axis::AbstractConceptualization);
    }

    #[test]
    fn test_from_yaml_rejects_duplicate_ids() {
        let yaml = r#"
questions:
  - id: 1
    prompt: "First"
    option_a: { text: "a", axis: CE }
    option_b: { text: "b", axis: AC }
  - id: 1
    prompt: "Second"
    option_a: { text: "a", axis: RO }
    option_b: { text: "b", axis: AE }
"#;
        let result = QuestionBank::from_yaml(yaml);
        assert!(matches!(result, Err(InventoryError::DuplicateId(1))));
    }

    #[test]
    fn test_from_yaml_rejects_empty_inventory() {
        let result = QuestionBank::from_yaml("questions: []");
        assert!(matches!(result, Err(InventoryError::Empty)));
    }

    #[test]
    fn test_from_yaml_rejects_blank_prompt() {
        let yaml = r#"
questions:
  - id: 7
    prompt: "   "
    option_a: { text: "a", axis: CE }
    option_b: { text: "b", axis: AC }
"#;
        let result = QuestionBank::from_yaml(yaml);
        assert!(matches!(result, Err(InventoryError::EmptyPrompt(7))));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_axis() {
        let yaml = r#"
questions:
  - id: 1
    prompt: "Pick one"
    option_a: { text: "a", axis: XX }
    option_b: { text: "b", axis: AC }
"#;
        let result = QuestionBank::from_yaml(yaml);
        assert!(matches!(result, Err(InventoryError::YamlError(_))));
    }
}
