//! AssignSeverityHandler - Command handler for recording one severity.
//!
//! Severities are recorded one harm at a time as the user works through the
//! applicable set. The handler reports completeness against the current
//! applicable harms after each assignment, so callers know when evaluation
//! may proceed.

use std::sync::Arc;

use tracing::debug;

use crate::domain::assessment::{HarmAggregator, RiskProfile, SeverityLedger};
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{AssessmentId, HarmId, LedgerError, Severity};
use crate::ports::{AssessmentStateStore, StateStoreError};

/// Command to assign a severity level to one illegal harm.
#[derive(Debug, Clone)]
pub struct AssignSeverityCommand {
    pub assessment_id: AssessmentId,
    pub harm_id: HarmId,
    pub level: Severity,
}

/// Result of a severity assignment.
#[derive(Debug, Clone)]
pub struct AssignSeverityResult {
    /// True once every currently-applicable harm has a severity.
    pub is_complete: bool,
    /// Applicable harms still awaiting a severity, in display order.
    pub missing_harms: Vec<HarmId>,
}

/// Error type for severity assignment.
#[derive(Debug, thiserror::Error)]
pub enum AssignSeverityError {
    /// No questionnaire answers exist yet for this assessment.
    #[error("Assessment not found: {0}")]
    AssessmentNotFound(AssessmentId),

    /// The harm is not in the catalog; the ledger was not modified.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Store(StateStoreError),
}

/// Handler for severity assignments.
pub struct AssignSeverityHandler {
    catalog: Arc<Catalog>,
    store: Arc<dyn AssessmentStateStore>,
}

impl AssignSeverityHandler {
    /// Creates a new AssignSeverityHandler.
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn AssessmentStateStore>) -> Self {
        Self { catalog, store }
    }

    /// Records the severity and reports completeness against the current
    /// applicable harm set.
    pub async fn handle(
        &self,
        command: AssignSeverityCommand,
    ) -> Result<AssignSeverityResult, AssignSeverityError> {
        let id = command.assessment_id;

        let answers = match self.store.load_answers(id).await {
            Ok(answers) => answers,
            Err(StateStoreError::NotFound(_)) => {
                return Err(AssignSeverityError::AssessmentNotFound(id))
            }
            Err(e) => return Err(AssignSeverityError::Store(e)),
        };

        let mut ledger = match self.store.load_ledger(id).await {
            Ok(ledger) => ledger,
            Err(StateStoreError::NotFound(_)) => SeverityLedger::new(),
            Err(e) => return Err(AssignSeverityError::Store(e)),
        };

        ledger.set_severity(&self.catalog, command.harm_id.clone(), command.level)?;
        self.store
            .save_ledger(id, &ledger)
            .await
            .map_err(AssignSeverityError::Store)?;

        let profile = RiskProfile::derive(&answers);
        let applicable = HarmAggregator::aggregate(&profile, &self.catalog);
        let missing_harms = ledger.missing(&applicable);

        debug!(
            assessment_id = %id,
            harm_id = %command.harm_id,
            level = %command.level,
            remaining = missing_harms.len(),
            "Recorded severity level"
        );

        Ok(AssignSeverityResult {
            is_complete: missing_harms.is_empty(),
            missing_harms,
        })
    }
}
