//! SubmitQuestionnaireHandler - Command handler for completed questionnaires.
//!
//! Each submission replaces the stored answer set wholesale and recomputes
//! the derived risk factors and applicable harms from scratch; derivation is
//! never patched incrementally.

use std::sync::Arc;

use tracing::debug;

use crate::domain::assessment::{AnswerSet, HarmAggregator, RiskProfile};
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{AssessmentId, HarmId};
use crate::ports::{AssessmentStateStore, StateStoreError};

/// Command carrying a session's full questionnaire answers.
#[derive(Debug, Clone)]
pub struct SubmitQuestionnaireCommand {
    pub assessment_id: AssessmentId,
    pub answers: AnswerSet,
}

/// Result of a questionnaire submission.
#[derive(Debug, Clone)]
pub struct SubmitQuestionnaireResult {
    /// The derived risk factors and large-service flag.
    pub profile: RiskProfile,
    /// The illegal harms the user must now assign severities to.
    pub applicable_harms: Vec<HarmId>,
}

/// Error type for questionnaire submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitQuestionnaireError {
    #[error(transparent)]
    Store(#[from] StateStoreError),
}

/// Handler for questionnaire submissions.
pub struct SubmitQuestionnaireHandler {
    catalog: Arc<Catalog>,
    store: Arc<dyn AssessmentStateStore>,
}

impl SubmitQuestionnaireHandler {
    /// Creates a new SubmitQuestionnaireHandler.
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn AssessmentStateStore>) -> Self {
        Self { catalog, store }
    }

    /// Persists the answers and returns the freshly derived profile and
    /// applicable harms.
    pub async fn handle(
        &self,
        command: SubmitQuestionnaireCommand,
    ) -> Result<SubmitQuestionnaireResult, SubmitQuestionnaireError> {
        self.store
            .save_answers(command.assessment_id, &command.answers)
            .await?;

        let profile = RiskProfile::derive(&command.answers);
        let applicable_harms = HarmAggregator::aggregate(&profile, &self.catalog);

        debug!(
            assessment_id = %command.assessment_id,
            risk_factors = profile.risk_factors().len(),
            harms = applicable_harms.len(),
            is_large_service = profile.is_large_service(),
            "Derived risk profile from questionnaire answers"
        );

        Ok(SubmitQuestionnaireResult {
            profile,
            applicable_harms,
        })
    }
}
