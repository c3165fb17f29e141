//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `catalog` - Immutable reference data: questions, harms, risk factors, measures
//! - `assessment` - Pure pipeline stages: answers, risk profile, harms, ledger, evaluator

pub mod assessment;
pub mod catalog;
pub mod foundation;
