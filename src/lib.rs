//! Harm Compass - Illegal-harms risk assessment for online services.
//!
//! This crate implements the derivation-and-rule-evaluation pipeline behind a
//! service risk assessment: questionnaire answers are mapped to risk factors,
//! risk factors to applicable illegal harms, user-assigned severities are
//! collected per harm, and safety measures are selected by evaluating each
//! measure's condition against the severities and the service's size.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
