//! Assessment State Store Port - Interface for persisting assessment state.
//!
//! The core pipeline is agnostic to how answers and severities are stored
//! between stages (e.g., across page loads); it only needs a key-value
//! read/write capability per assessment session. Implementations must
//! preserve key identity and selection order on round-trip.

use async_trait::async_trait;

use crate::domain::assessment::{AnswerSet, SeverityLedger};
use crate::domain::foundation::AssessmentId;

/// Errors that can occur during state store operations
#[derive(Debug, thiserror::Error)]
pub enum StateStoreError {
    #[error("No stored state for assessment: {0}")]
    NotFound(AssessmentId),

    #[error("Failed to serialize assessment state: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize assessment state: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for persisting and loading per-session assessment state
#[async_trait]
pub trait AssessmentStateStore: Send + Sync {
    /// Save the questionnaire answers, replacing any prior answers wholesale.
    ///
    /// # Errors
    /// Returns `StateStoreError` if the save fails
    async fn save_answers(
        &self,
        id: AssessmentId,
        answers: &AnswerSet,
    ) -> Result<(), StateStoreError>;

    /// Load the questionnaire answers.
    ///
    /// # Errors
    /// Returns `StateStoreError::NotFound` if no answers were saved
    async fn load_answers(&self, id: AssessmentId) -> Result<AnswerSet, StateStoreError>;

    /// Save the severity ledger, replacing any prior ledger.
    ///
    /// # Errors
    /// Returns `StateStoreError` if the save fails
    async fn save_ledger(
        &self,
        id: AssessmentId,
        ledger: &SeverityLedger,
    ) -> Result<(), StateStoreError>;

    /// Load the severity ledger.
    ///
    /// # Errors
    /// Returns `StateStoreError::NotFound` if no ledger was saved
    async fn load_ledger(&self, id: AssessmentId) -> Result<SeverityLedger, StateStoreError>;

    /// Check if any state exists for an assessment.
    async fn exists(&self, id: AssessmentId) -> Result<bool, StateStoreError>;

    /// Delete all state for an assessment.
    ///
    /// # Errors
    /// Returns `StateStoreError` if deletion fails
    async fn delete(&self, id: AssessmentId) -> Result<(), StateStoreError>;
}
