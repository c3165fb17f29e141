//! Catalog module - Immutable reference data.
//!
//! The reference data store holds four read-only catalogs: questionnaire
//! questions, illegal-harm categories, risk factors (with the harms each one
//! implies), and safety measures with their evaluation conditions. The data is
//! loaded once per process and never mutated; it is safe to share across
//! assessment sessions.

mod harm;
mod measure;
mod question;
mod risk_factor;
mod store;

pub use harm::IllegalHarm;
pub use measure::{MeasureCondition, SafetyMeasure};
pub use question::{AnswerCardinality, AnswerOption, Question};
pub use risk_factor::RiskFactor;
pub use store::Catalog;
