//! Severity value object for the three-level harm risk rating.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User-assigned risk rating for one illegal harm.
///
/// Exactly three ordered values. Measure conditions compare by equality to
/// `High`; levels are never blended numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// All levels, lowest first.
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    /// Returns true if this is the High level.
    pub fn is_high(&self) -> bool {
        matches!(self, Severity::High)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering_works() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn severity_is_high_only_for_high() {
        assert!(Severity::High.is_high());
        assert!(!Severity::Medium.is_high());
        assert!(!Severity::Low.is_high());
    }

    #[test]
    fn severity_labels_match_display() {
        for level in Severity::ALL {
            assert_eq!(format!("{}", level), level.label());
        }
    }

    #[test]
    fn severity_serializes_to_level_name() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"High\"");
        let level: Severity = serde_json::from_str("\"Medium\"").unwrap();
        assert_eq!(level, Severity::Medium);
    }
}
