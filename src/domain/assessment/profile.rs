//! Risk-factor derivation from questionnaire answers.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{QuestionId, RiskFactorId};

use super::AnswerSet;

/// The service-type question: each selection is a risk-factor identifier.
const SERVICE_TYPES_QUESTION: &str = "q1";
/// The functionality question: each selection is a risk-factor identifier.
const FUNCTIONALITIES_QUESTION: &str = "q2";
/// The user-count question, single-select.
const USER_COUNT_QUESTION: &str = "q3";
/// The option value denoting 700,000 or more monthly active UK users.
const LARGE_SERVICE_OPTION: &str = "largeService";

/// Risk factor implied by crossing the large-service user-count threshold.
pub const LARGE_SERVICE_FACTOR: &str = "largeService";

/// Derivation output: the ordered, deduplicated risk factors a service is
/// exposed to, and whether the service is large.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    risk_factors: Vec<RiskFactorId>,
    is_large_service: bool,
}

impl RiskProfile {
    /// Derives the risk profile from an answer set.
    ///
    /// Service-type selections come first, then functionality selections, in
    /// the order the user picked them. If the user-count answer is the
    /// large-service option, the fixed large-service factor is appended and
    /// the flag set. Duplicates keep their first occurrence.
    ///
    /// Pure: the same answers always yield the same profile. Option values
    /// the catalog does not know pass through as risk-factor identifiers;
    /// they simply imply no harms downstream.
    pub fn derive(answers: &AnswerSet) -> Self {
        let mut risk_factors = Vec::new();
        let mut seen = HashSet::new();

        let ordered_questions = [SERVICE_TYPES_QUESTION, FUNCTIONALITIES_QUESTION];
        for question in ordered_questions {
            for value in answers.selected(&QuestionId::from(question)) {
                let factor = RiskFactorId::from(value.as_str());
                if seen.insert(factor.clone()) {
                    risk_factors.push(factor);
                }
            }
        }

        let is_large_service = answers
            .selected(&QuestionId::from(USER_COUNT_QUESTION))
            .iter()
            .any(|value| value == LARGE_SERVICE_OPTION);

        if is_large_service {
            let factor = RiskFactorId::from(LARGE_SERVICE_FACTOR);
            if seen.insert(factor.clone()) {
                risk_factors.push(factor);
            }
        }

        Self {
            risk_factors,
            is_large_service,
        }
    }

    /// The derived risk factors, distinct, in first-occurrence order.
    pub fn risk_factors(&self) -> &[RiskFactorId] {
        &self.risk_factors
    }

    /// True if the service crossed the large-service user-count threshold.
    pub fn is_large_service(&self) -> bool {
        self.is_large_service
    }

    /// True if no risk factors were derived.
    pub fn is_empty(&self) -> bool {
        self.risk_factors.is_empty()
    }
}
