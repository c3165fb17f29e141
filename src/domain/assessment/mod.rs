//! Assessment module - The pure pipeline stages.
//!
//! Answers flow through four transformations:
//!
//! 1. [`RiskProfile::derive`] - answers to ordered risk factors plus the
//!    large-service flag
//! 2. [`HarmAggregator::aggregate`] - risk factors to applicable harms
//! 3. [`SeverityLedger`] - user-assigned severity per applicable harm
//! 4. [`MeasureEvaluator::evaluate`] - severities plus service size to
//!    recommended safety measures
//!
//! Every stage is a pure, synchronous function of its inputs. Derivation is
//! recomputed wholesale whenever answers change; nothing here reads ambient
//! state. The only mutable structure is the ledger, owned by a single
//! assessment session.

mod answers;
mod evaluator;
mod harms;
mod ledger;
mod profile;

pub use answers::AnswerSet;
pub use evaluator::{Evaluation, MeasureEvaluator};
pub use harms::HarmAggregator;
pub use ledger::{SeverityLedger, SeveritySnapshot};
pub use profile::{RiskProfile, LARGE_SERVICE_FACTOR};
