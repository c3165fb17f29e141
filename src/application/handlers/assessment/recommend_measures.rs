//! RecommendMeasuresHandler - Command handler for the final evaluation step.
//!
//! Loads the session's answers and ledger, re-derives the risk profile and
//! applicable harms, and runs the measure evaluator. An incomplete ledger is
//! a normal outcome, not an error: the caller receives
//! [`Evaluation::Incomplete`] and directs the user back to the missing step.

use std::sync::Arc;

use tracing::debug;

use crate::domain::assessment::{
    Evaluation, HarmAggregator, MeasureEvaluator, RiskProfile, SeverityLedger,
};
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{AssessmentId, Timestamp};
use crate::ports::{AssessmentStateStore, StateStoreError};

/// Command to evaluate safety measures for an assessment.
#[derive(Debug, Clone)]
pub struct RecommendMeasuresCommand {
    pub assessment_id: AssessmentId,
}

/// Result of a measure evaluation.
#[derive(Debug, Clone)]
pub struct RecommendMeasuresResult {
    /// Incomplete, or the measures whose conditions hold in catalog order.
    pub evaluation: Evaluation,
    /// The derived profile the evaluation was based on.
    pub profile: RiskProfile,
    /// When the evaluation ran.
    pub evaluated_at: Timestamp,
}

/// Error type for measure evaluation.
#[derive(Debug, thiserror::Error)]
pub enum RecommendMeasuresError {
    /// No questionnaire answers exist yet for this assessment.
    #[error("Assessment not found: {0}")]
    AssessmentNotFound(AssessmentId),

    #[error(transparent)]
    Store(StateStoreError),
}

/// Handler for measure recommendations.
pub struct RecommendMeasuresHandler {
    catalog: Arc<Catalog>,
    store: Arc<dyn AssessmentStateStore>,
}

impl RecommendMeasuresHandler {
    /// Creates a new RecommendMeasuresHandler.
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn AssessmentStateStore>) -> Self {
        Self { catalog, store }
    }

    /// Re-derives the pipeline from stored state and evaluates all measures.
    pub async fn handle(
        &self,
        command: RecommendMeasuresCommand,
    ) -> Result<RecommendMeasuresResult, RecommendMeasuresError> {
        let id = command.assessment_id;

        let answers = match self.store.load_answers(id).await {
            Ok(answers) => answers,
            Err(StateStoreError::NotFound(_)) => {
                return Err(RecommendMeasuresError::AssessmentNotFound(id))
            }
            Err(e) => return Err(RecommendMeasuresError::Store(e)),
        };

        let ledger = match self.store.load_ledger(id).await {
            Ok(ledger) => ledger,
            Err(StateStoreError::NotFound(_)) => SeverityLedger::new(),
            Err(e) => return Err(RecommendMeasuresError::Store(e)),
        };

        let profile = RiskProfile::derive(&answers);
        let applicable = HarmAggregator::aggregate(&profile, &self.catalog);
        let evaluation = MeasureEvaluator::evaluate(
            &ledger.snapshot(),
            &applicable,
            profile.is_large_service(),
            &self.catalog,
        );

        match &evaluation {
            Evaluation::Incomplete { missing_harms } => debug!(
                assessment_id = %id,
                missing = missing_harms.len(),
                "Assessment incomplete; refusing to recommend measures"
            ),
            Evaluation::Recommended(measures) => debug!(
                assessment_id = %id,
                selected = measures.len(),
                "Evaluated safety measures"
            ),
        }

        Ok(RecommendMeasuresResult {
            evaluation,
            profile,
            evaluated_at: Timestamp::now(),
        })
    }
}
