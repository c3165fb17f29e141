//! Illegal-harm category definitions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::HarmId;

/// A named category of illegal content or behaviour risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllegalHarm {
    pub id: HarmId,
    pub name: String,
}

impl IllegalHarm {
    /// Creates a harm category from its identifier and display name.
    pub fn new(id: impl Into<HarmId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
