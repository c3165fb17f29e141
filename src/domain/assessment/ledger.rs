//! Severity ledger - user-assigned risk levels per illegal harm.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::catalog::Catalog;
use crate::domain::foundation::{HarmId, LedgerError, Severity};

/// Mutable record of the severities a user has assigned so far.
///
/// Owned by a single assessment session. Entries may outlive a change of
/// answers; completeness is always judged against the *current* applicable
/// harm set, and stale entries are ignored rather than purged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeverityLedger {
    entries: HashMap<HarmId, Severity>,
}

impl SeverityLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a severity for a harm, overwriting any prior entry.
    ///
    /// Fails with [`LedgerError::UnknownHarm`] if the harm is not in the
    /// catalog; the ledger is left unchanged in that case.
    pub fn set_severity(
        &mut self,
        catalog: &Catalog,
        harm: HarmId,
        level: Severity,
    ) -> Result<(), LedgerError> {
        if !catalog.contains_harm(&harm) {
            return Err(LedgerError::UnknownHarm(harm));
        }
        self.entries.insert(harm, level);
        Ok(())
    }

    /// Returns the recorded severity for a harm, if any.
    pub fn severity(&self, harm: &HarmId) -> Option<Severity> {
        self.entries.get(harm).copied()
    }

    /// Returns true iff every given harm has an entry.
    ///
    /// Entries for harms outside the given set do not count against
    /// completeness.
    pub fn is_complete(&self, applicable: &[HarmId]) -> bool {
        applicable.iter().all(|h| self.entries.contains_key(h))
    }

    /// Returns the applicable harms still missing an entry, in the order
    /// given.
    pub fn missing(&self, applicable: &[HarmId]) -> Vec<HarmId> {
        applicable
            .iter()
            .filter(|h| !self.entries.contains_key(*h))
            .cloned()
            .collect()
    }

    /// Returns an immutable snapshot for the measure evaluator.
    pub fn snapshot(&self) -> SeveritySnapshot {
        SeveritySnapshot {
            entries: self.entries.clone(),
        }
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no severity has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Immutable harm-to-severity mapping consumed by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeveritySnapshot {
    entries: HashMap<HarmId, Severity>,
}

impl SeveritySnapshot {
    /// Returns the severity for a harm, if recorded.
    pub fn severity(&self, harm: &HarmId) -> Option<Severity> {
        self.entries.get(harm).copied()
    }

    /// Returns true if the harm is recorded at High.
    pub fn is_high(&self, harm: &HarmId) -> bool {
        self.severity(harm).is_some_and(|level| level.is_high())
    }

    /// Number of entries in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the snapshot has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
