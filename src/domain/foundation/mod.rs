//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Harm Compass domain.

mod ids;
mod timestamp;
mod severity;
mod errors;

pub use ids::{AssessmentId, HarmId, MeasureRef, QuestionId, RiskFactorId};
pub use timestamp::Timestamp;
pub use severity::Severity;
pub use errors::{CatalogError, LedgerError};
