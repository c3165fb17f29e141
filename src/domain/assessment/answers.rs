//! Answer set - the user's questionnaire selections.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::QuestionId;

/// Selected option values per question.
///
/// Produced by the questionnaire collaborator and consumed read-only by the
/// risk-factor derivation. An unanswered question is an empty selection, not
/// an error. Within one question the selection order is preserved, which
/// keeps the derived risk-factor list deterministic; no ordering is promised
/// across questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: HashMap<QuestionId, Vec<String>>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selections for a question wholesale.
    pub fn record(&mut self, question: impl Into<QuestionId>, selections: Vec<String>) {
        self.answers.insert(question.into(), selections);
    }

    /// Records a single-select answer.
    pub fn record_single(&mut self, question: impl Into<QuestionId>, value: impl Into<String>) {
        self.answers.insert(question.into(), vec![value.into()]);
    }

    /// Returns the selections for a question, empty if unanswered.
    pub fn selected(&self, question: &QuestionId) -> &[String] {
        self.answers
            .get(question)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if no question has been answered.
    pub fn is_empty(&self) -> bool {
        self.answers.values().all(Vec::is_empty)
    }
}
