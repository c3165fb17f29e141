//! Questionnaire question definitions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;

/// How many options a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnswerCardinality {
    /// At most one option may be selected.
    Single,
    /// Any number of options may be selected.
    Multi,
}

/// One selectable option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Machine value stored in the answer set (and, for the service-type and
    /// functionality questions, used as a risk-factor identifier).
    pub value: String,
    /// Display label.
    pub label: String,
}

impl AnswerOption {
    /// Creates an option from its value and label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A questionnaire question. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
    pub cardinality: AnswerCardinality,
}

impl Question {
    /// Creates a multi-select question.
    pub fn multi(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
            cardinality: AnswerCardinality::Multi,
        }
    }

    /// Creates a single-select question.
    pub fn single(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
            cardinality: AnswerCardinality::Single,
        }
    }

    /// Returns true if the question accepts multiple selections.
    pub fn is_multi(&self) -> bool {
        self.cardinality == AnswerCardinality::Multi
    }

    /// Returns true if the question defines an option with the given value.
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question::multi(
            "q1",
            "Is your service any of the following service types?",
            vec![
                AnswerOption::new("socialMedia", "Social media service"),
                AnswerOption::new("gaming", "Gaming service"),
            ],
        )
    }

    #[test]
    fn multi_question_reports_cardinality() {
        assert!(sample_question().is_multi());
        assert!(!Question::single("q3", "How many users?", vec![]).is_multi());
    }

    #[test]
    fn has_option_matches_by_value() {
        let question = sample_question();
        assert!(question.has_option("gaming"));
        assert!(!question.has_option("Gaming service"));
        assert!(!question.has_option("marketplace"));
    }

    #[test]
    fn cardinality_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&AnswerCardinality::Multi).unwrap(),
            "\"multi\""
        );
    }
}
