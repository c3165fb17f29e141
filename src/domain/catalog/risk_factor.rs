//! Risk factor definitions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{HarmId, RiskFactorId};

/// A service characteristic (feature or scale) that implies exposure to one
/// or more illegal-harm categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub id: RiskFactorId,
    pub name: String,
    pub description: String,
    pub implied_harms: Vec<HarmId>,
}

impl RiskFactor {
    /// Creates a risk factor with its implied harm identifiers.
    pub fn new(
        id: impl Into<RiskFactorId>,
        name: impl Into<String>,
        description: impl Into<String>,
        implied_harms: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            implied_harms: implied_harms.into_iter().map(HarmId::from).collect(),
        }
    }

    /// Returns true if this factor implies the given harm.
    pub fn implies(&self, harm: &HarmId) -> bool {
        self.implied_harms.contains(harm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implies_checks_the_harm_list() {
        let factor = RiskFactor::new(
            "gaming",
            "Gaming services",
            "Gaming services can normalise harassment.",
            ["terrorism", "harassment"],
        );

        assert!(factor.implies(&HarmId::from("terrorism")));
        assert!(factor.implies(&HarmId::from("harassment")));
        assert!(!factor.implies(&HarmId::from("drugs")));
    }

    #[test]
    fn risk_factor_serializes_camel_case_field_names() {
        let factor = RiskFactor::new("gaming", "Gaming services", "", ["terrorism"]);
        let json = serde_json::to_value(&factor).unwrap();
        assert!(json.get("impliedHarms").is_some());
    }
}
