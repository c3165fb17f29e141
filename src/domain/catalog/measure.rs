//! Safety measure definitions and their typed evaluation conditions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{HarmId, MeasureRef};

/// Typed condition gating a safety measure.
///
/// Serialized adjacently tagged (`conditionType` / `conditionData`) to match
/// the catalog's wire shape. Condition types this crate does not recognise
/// deserialize to [`MeasureCondition::Unsupported`], which never holds, so a
/// stale or forward-versioned catalog excludes a measure rather than wrongly
/// including it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "conditionType",
    content = "conditionData",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum MeasureCondition {
    /// Holds iff at least `min_count` applicable harms are rated High.
    HighRiskCount { min_count: usize },
    /// Holds iff the named harm is rated High.
    SpecificHarmHighRisk { harm_id: HarmId },
    /// Holds iff the service is large AND the named harm is rated High.
    LargeServiceAndHighRisk { harm_id: HarmId },
    /// Unrecognised condition type. Never holds.
    #[serde(other)]
    Unsupported,
}

/// A recommended mitigation, gated by a condition over severities and
/// service scale. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyMeasure {
    pub reference: MeasureRef,
    pub name: String,
    /// Human-readable restatement of the condition, for display.
    pub condition_text: String,
    pub condition: MeasureCondition,
    pub description: String,
}

impl SafetyMeasure {
    pub fn new(
        reference: impl Into<MeasureRef>,
        name: impl Into<String>,
        condition_text: impl Into<String>,
        condition: MeasureCondition,
        description: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            name: name.into(),
            condition_text: condition_text.into(),
            condition,
            description: description.into(),
        }
    }
}
