//! Safety measure evaluation against severities and service size.

use crate::domain::catalog::{Catalog, MeasureCondition, SafetyMeasure};
use crate::domain::foundation::HarmId;

use super::SeveritySnapshot;

/// Result of a measure evaluation.
///
/// An incomplete assessment is a distinct outcome from an assessment where no
/// measure matched; the two are never collapsed, so callers can tell "send
/// the user back to finish rating harms" apart from "nothing is recommended".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// The severity ledger does not yet cover the applicable harms (or no
    /// harms are applicable because upstream input is missing). No partial
    /// recommendation is produced.
    Incomplete { missing_harms: Vec<HarmId> },
    /// The measures whose conditions hold, in catalog order. May be empty.
    Recommended(Vec<SafetyMeasure>),
}

impl Evaluation {
    /// Returns true for the incomplete outcome.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Evaluation::Incomplete { .. })
    }

    /// Returns the recommended measures, if the assessment was complete.
    pub fn measures(&self) -> Option<&[SafetyMeasure]> {
        match self {
            Evaluation::Recommended(measures) => Some(measures),
            Evaluation::Incomplete { .. } => None,
        }
    }
}

/// Evaluates every safety measure's condition and selects those that hold.
pub struct MeasureEvaluator;

impl MeasureEvaluator {
    /// Selects the subsequence of the measure catalog whose conditions hold,
    /// given the severity snapshot, the current applicable harms, and the
    /// large-service flag.
    ///
    /// Refuses to evaluate a partial ledger: if any applicable harm lacks a
    /// severity, or the applicable set itself is empty, the result is
    /// [`Evaluation::Incomplete`]. Conditions only see severities of
    /// applicable harms; snapshot entries left over from earlier answer sets
    /// are ignored. Pure and idempotent over all three inputs.
    pub fn evaluate(
        snapshot: &SeveritySnapshot,
        applicable: &[HarmId],
        is_large_service: bool,
        catalog: &Catalog,
    ) -> Evaluation {
        if applicable.is_empty() {
            return Evaluation::Incomplete {
                missing_harms: Vec::new(),
            };
        }

        let missing_harms: Vec<HarmId> = applicable
            .iter()
            .filter(|h| snapshot.severity(h).is_none())
            .cloned()
            .collect();
        if !missing_harms.is_empty() {
            return Evaluation::Incomplete { missing_harms };
        }

        let high_harms: Vec<&HarmId> = applicable
            .iter()
            .filter(|h| snapshot.is_high(h))
            .collect();

        let selected = catalog
            .measures()
            .iter()
            .filter(|m| Self::condition_holds(&m.condition, &high_harms, is_large_service))
            .cloned()
            .collect();

        Evaluation::Recommended(selected)
    }

    /// Returns true iff the condition holds for the given High-rated harms
    /// and service size. Unrecognised condition types fail closed.
    fn condition_holds(
        condition: &MeasureCondition,
        high_harms: &[&HarmId],
        is_large_service: bool,
    ) -> bool {
        match condition {
            MeasureCondition::HighRiskCount { min_count } => high_harms.len() >= *min_count,
            MeasureCondition::SpecificHarmHighRisk { harm_id } => high_harms.contains(&harm_id),
            MeasureCondition::LargeServiceAndHighRisk { harm_id } => {
                is_large_service && high_harms.contains(&harm_id)
            }
            MeasureCondition::Unsupported => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::SeverityLedger;
    use crate::domain::foundation::{MeasureRef, Severity};

    fn harm(id: &str) -> HarmId {
        HarmId::from(id)
    }

    fn ledger_with(levels: &[(&str, Severity)]) -> SeverityLedger {
        let catalog = Catalog::builtin();
        let mut ledger = SeverityLedger::new();
        for (id, level) in levels {
            ledger.set_severity(catalog, harm(id), *level).unwrap();
        }
        ledger
    }

    fn references(evaluation: &Evaluation) -> Vec<&str> {
        evaluation
            .measures()
            .expect("expected a complete evaluation")
            .iter()
            .map(|m| m.reference.as_str())
            .collect()
    }

    #[test]
    fn missing_severity_yields_incomplete_never_partial() {
        let ledger = ledger_with(&[("terrorism", Severity::High)]);
        let applicable = [harm("terrorism"), harm("hate")];

        let evaluation =
            MeasureEvaluator::evaluate(&ledger.snapshot(), &applicable, false, Catalog::builtin());

        assert_eq!(
            evaluation,
            Evaluation::Incomplete {
                missing_harms: vec![harm("hate")]
            }
        );
        assert!(evaluation.measures().is_none());
    }

    #[test]
    fn empty_applicable_set_is_incomplete_not_zero_matches() {
        let evaluation = MeasureEvaluator::evaluate(
            &SeverityLedger::new().snapshot(),
            &[],
            true,
            Catalog::builtin(),
        );

        assert_eq!(
            evaluation,
            Evaluation::Incomplete {
                missing_harms: Vec::new()
            }
        );
    }

    #[test]
    fn no_matching_condition_is_an_empty_recommendation() {
        let ledger = ledger_with(&[("hate", Severity::Low), ("harassment", Severity::Medium)]);
        let applicable = [harm("hate"), harm("harassment")];

        let evaluation =
            MeasureEvaluator::evaluate(&ledger.snapshot(), &applicable, false, Catalog::builtin());

        assert_eq!(evaluation, Evaluation::Recommended(Vec::new()));
        assert!(!evaluation.is_incomplete());
    }

    #[test]
    fn high_risk_count_holds_at_exactly_the_threshold() {
        // M1 requires two High harms.
        let applicable = [harm("terrorism"), harm("hate")];

        let at_threshold = ledger_with(&[("terrorism", Severity::High), ("hate", Severity::High)]);
        let evaluation = MeasureEvaluator::evaluate(
            &at_threshold.snapshot(),
            &applicable,
            false,
            Catalog::builtin(),
        );
        assert!(references(&evaluation).contains(&"M1"));

        let below = ledger_with(&[("terrorism", Severity::High), ("hate", Severity::Medium)]);
        let evaluation =
            MeasureEvaluator::evaluate(&below.snapshot(), &applicable, false, Catalog::builtin());
        assert!(!references(&evaluation).contains(&"M1"));
    }

    #[test]
    fn compound_condition_requires_both_legs() {
        let applicable = [harm("hate")];
        let high = ledger_with(&[("hate", Severity::High)]);
        let low = ledger_with(&[("hate", Severity::Low)]);
        let catalog = Catalog::builtin();

        // High risk of hate but not large: M3 excluded.
        let evaluation = MeasureEvaluator::evaluate(&high.snapshot(), &applicable, false, catalog);
        assert!(!references(&evaluation).contains(&"M3"));

        // Large but hate not High: M3 excluded.
        let evaluation = MeasureEvaluator::evaluate(&low.snapshot(), &applicable, true, catalog);
        assert!(!references(&evaluation).contains(&"M3"));

        // Both legs hold: M3 included.
        let evaluation = MeasureEvaluator::evaluate(&high.snapshot(), &applicable, true, catalog);
        assert!(references(&evaluation).contains(&"M3"));
    }

    #[test]
    fn medium_severity_never_counts_as_high() {
        let ledger = ledger_with(&[("terrorism", Severity::Medium)]);
        let applicable = [harm("terrorism")];

        let evaluation =
            MeasureEvaluator::evaluate(&ledger.snapshot(), &applicable, true, Catalog::builtin());

        assert_eq!(references(&evaluation), Vec::<&str>::new());
    }

    #[test]
    fn unsupported_condition_fails_closed() {
        let mut catalog = Catalog::builtin().clone();
        // A forward-versioned catalog entry whose condition this crate does
        // not recognise.
        let unsupported = SafetyMeasure::new(
            "M99",
            "Quarterly Audit",
            "Unrecognised condition",
            MeasureCondition::Unsupported,
            "Should never be recommended.",
        );
        let mut measures = catalog.measures().to_vec();
        measures.push(unsupported);
        catalog = Catalog::new(
            catalog.questions().to_vec(),
            catalog.harms().to_vec(),
            catalog.risk_factors().to_vec(),
            measures,
        );

        let ledger = ledger_with(&[
            ("terrorism", Severity::High),
            ("hate", Severity::High),
            ("harassment", Severity::High),
            ("drugs", Severity::High),
        ]);
        let applicable = [harm("terrorism"), harm("hate"), harm("harassment"), harm("drugs")];

        let evaluation =
            MeasureEvaluator::evaluate(&ledger.snapshot(), &applicable, true, &catalog);

        assert!(!references(&evaluation).contains(&"M99"));
    }

    #[test]
    fn stale_high_entries_do_not_tip_thresholds() {
        // drugs was rated High under an earlier, broader answer set but is no
        // longer applicable; M1's two-High threshold must not count it.
        let ledger = ledger_with(&[("terrorism", Severity::High), ("drugs", Severity::High)]);
        let applicable = [harm("terrorism")];

        let evaluation =
            MeasureEvaluator::evaluate(&ledger.snapshot(), &applicable, false, Catalog::builtin());

        assert_eq!(references(&evaluation), vec!["M2"]);
    }

    #[test]
    fn selected_measures_preserve_catalog_order() {
        let ledger = ledger_with(&[
            ("terrorism", Severity::High),
            ("hate", Severity::High),
            ("harassment", Severity::High),
            ("drugs", Severity::High),
        ]);
        let applicable = [harm("terrorism"), harm("hate"), harm("harassment"), harm("drugs")];

        let evaluation =
            MeasureEvaluator::evaluate(&ledger.snapshot(), &applicable, true, Catalog::builtin());

        assert_eq!(references(&evaluation), vec!["M1", "M2", "M3", "M4", "M5"]);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let ledger = ledger_with(&[("terrorism", Severity::High), ("hate", Severity::Low)]);
        let applicable = [harm("terrorism"), harm("hate")];
        let catalog = Catalog::builtin();

        let first =
            MeasureEvaluator::evaluate(&ledger.snapshot(), &applicable, true, catalog);
        let second =
            MeasureEvaluator::evaluate(&ledger.snapshot(), &applicable, true, catalog);

        assert_eq!(first, second);
    }

    #[test]
    fn end_to_end_scenario_selects_expected_measures() {
        // terrorism High, hate High, harassment Low, drugs Low on a large
        // service: the 2-High-count measure, the terrorism measure, and the
        // large-service+hate measure; drugs and harassment measures excluded.
        let ledger = ledger_with(&[
            ("terrorism", Severity::High),
            ("hate", Severity::High),
            ("harassment", Severity::Low),
            ("drugs", Severity::Low),
        ]);
        let applicable = [harm("terrorism"), harm("hate"), harm("harassment"), harm("drugs")];

        let evaluation =
            MeasureEvaluator::evaluate(&ledger.snapshot(), &applicable, true, Catalog::builtin());

        assert_eq!(references(&evaluation), vec!["M1", "M2", "M3"]);
        let m1 = Catalog::builtin().measure(&MeasureRef::from("M1")).unwrap();
        assert_eq!(evaluation.measures().unwrap()[0], *m1);
    }
}
