//! In-memory assessment state store.
//!
//! This adapter provides an in-memory implementation of the
//! `AssessmentStateStore` port. Useful for:
//! - Development and testing environments
//! - Single-process deployments without persistence requirements
//! - Demonstration and prototyping
//!
//! Deployments needing durable state should implement the port over a real
//! key-value backend instead.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::assessment::{AnswerSet, SeverityLedger};
use crate::domain::foundation::{AssessmentId, Timestamp};
use crate::ports::{AssessmentStateStore, StateStoreError};

#[derive(Debug, Clone, Default)]
struct StoredAssessment {
    answers: Option<AnswerSet>,
    ledger: Option<SeverityLedger>,
    updated_at: Option<Timestamp>,
}

/// In-memory implementation of the AssessmentStateStore port.
///
/// Thread-safe via internal `Mutex`. Each assessment session's answers and
/// ledger are held independently; nothing is shared across sessions. Does not
/// persist data across restarts.
#[derive(Default)]
pub struct InMemoryAssessmentStore {
    states: Mutex<HashMap<AssessmentId, StoredAssessment>>,
}

impl InMemoryAssessmentStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of assessments with any stored state.
    pub fn len(&self) -> usize {
        self.states.lock().unwrap().len()
    }

    /// Returns true if no assessment has stored state.
    pub fn is_empty(&self) -> bool {
        self.states.lock().unwrap().is_empty()
    }

    /// Clears all stored state.
    ///
    /// Useful for testing scenarios that need a clean slate.
    pub fn clear(&self) {
        self.states.lock().unwrap().clear();
    }

    /// Returns when an assessment's state last changed, if it exists.
    pub fn updated_at(&self, id: &AssessmentId) -> Option<Timestamp> {
        self.states
            .lock()
            .unwrap()
            .get(id)
            .and_then(|s| s.updated_at)
    }
}

#[async_trait]
impl AssessmentStateStore for InMemoryAssessmentStore {
    async fn save_answers(
        &self,
        id: AssessmentId,
        answers: &AnswerSet,
    ) -> Result<(), StateStoreError> {
        let mut states = self.states.lock().unwrap();
        let entry = states.entry(id).or_default();
        entry.answers = Some(answers.clone());
        entry.updated_at = Some(Timestamp::now());
        Ok(())
    }

    async fn load_answers(&self, id: AssessmentId) -> Result<AnswerSet, StateStoreError> {
        self.states
            .lock()
            .unwrap()
            .get(&id)
            .and_then(|s| s.answers.clone())
            .ok_or(StateStoreError::NotFound(id))
    }

    async fn save_ledger(
        &self,
        id: AssessmentId,
        ledger: &SeverityLedger,
    ) -> Result<(), StateStoreError> {
        let mut states = self.states.lock().unwrap();
        let entry = states.entry(id).or_default();
        entry.ledger = Some(ledger.clone());
        entry.updated_at = Some(Timestamp::now());
        Ok(())
    }

    async fn load_ledger(&self, id: AssessmentId) -> Result<SeverityLedger, StateStoreError> {
        self.states
            .lock()
            .unwrap()
            .get(&id)
            .and_then(|s| s.ledger.clone())
            .ok_or(StateStoreError::NotFound(id))
    }

    async fn exists(&self, id: AssessmentId) -> Result<bool, StateStoreError> {
        Ok(self.states.lock().unwrap().contains_key(&id))
    }

    async fn delete(&self, id: AssessmentId) -> Result<(), StateStoreError> {
        self.states.lock().unwrap().remove(&id);
        Ok(())
    }
}
