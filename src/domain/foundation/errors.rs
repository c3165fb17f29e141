//! Error types for the domain layer.

use thiserror::Error;

use super::HarmId;

/// Errors raised by reference-data lookups.
///
/// Catalog contents are compiled together with the logic that references them,
/// so a failed lookup for a supposedly-known identifier is a consistency bug,
/// not a user-facing condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("No {kind} entry in the catalog for id '{id}'")]
    NotFound { kind: &'static str, id: String },

    #[error("Failed to parse catalog data: {0}")]
    Parse(String),
}

impl CatalogError {
    /// Creates a not-found error for a catalog kind and identifier.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        CatalogError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Errors raised by the severity ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The caller tried to record a severity for a harm the catalog does not
    /// know. Ledger state is left untouched.
    #[error("Cannot record a severity for unknown harm '{0}'")]
    UnknownHarm(HarmId),
}
