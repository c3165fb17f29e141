//! Harm aggregation over the catalog's risk-factor associations.

use std::collections::HashSet;

use crate::domain::catalog::Catalog;
use crate::domain::foundation::HarmId;

use super::RiskProfile;

/// Maps a derived risk profile to the applicable illegal harms.
pub struct HarmAggregator;

impl HarmAggregator {
    /// Returns the distinct harms implied by the profile's risk factors, in
    /// first-occurrence order for deterministic display.
    ///
    /// Risk factors the catalog does not know contribute nothing. The result
    /// is always a subset of the harm catalog; it is empty iff no derived
    /// factor maps to any harm.
    pub fn aggregate(profile: &RiskProfile, catalog: &Catalog) -> Vec<HarmId> {
        let mut harms = Vec::new();
        let mut seen = HashSet::new();

        for factor in profile.risk_factors() {
            for harm in catalog.implied_harms(factor) {
                if seen.insert(harm.clone()) {
                    harms.push(harm.clone());
                }
            }
        }

        harms
    }
}
