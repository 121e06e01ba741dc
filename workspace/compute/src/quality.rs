//! Data-quality rule engine.
//!
//! The source system stored rule SQL in a table and executed it dynamically.
//! Here the checks are a closed enum (`common::QualityCheck`) and each rule
//! is plain data: a check, a severity, and two thresholds. No dynamic code
//! execution.

use common::{QualityCheck, QualityReport, RentRollDiagnostics, RuleOutcome, RuleStatus, Severity};
use tracing::{debug, warn};

/// One configured threshold rule over a resolver diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityRule {
    pub check: QualityCheck,
    pub severity: Severity,
    /// Observed counts above this warn.
    pub warn_threshold: u64,
    /// Observed counts above this fail.
    pub fail_threshold: u64,
}

impl QualityRule {
    pub fn evaluate(&self, diagnostics: &RentRollDiagnostics) -> RuleOutcome {
        let observed = self.check.observed(diagnostics);
        let status = if observed <= self.warn_threshold {
            RuleStatus::Pass
        } else if observed <= self.fail_threshold {
            RuleStatus::Warn
        } else {
            RuleStatus::Fail
        };

        match status {
            RuleStatus::Pass => debug!(check = %self.check, observed, "quality check passed"),
            RuleStatus::Warn | RuleStatus::Fail => warn!(
                check = %self.check,
                observed,
                warn_threshold = self.warn_threshold,
                fail_threshold = self.fail_threshold,
                ?status,
                "quality check exceeded threshold"
            ),
        }

        RuleOutcome {
            check: self.check,
            severity: self.severity,
            observed,
            warn_threshold: self.warn_threshold,
            fail_threshold: self.fail_threshold,
            status,
        }
    }
}

/// Evaluates every rule against one run's diagnostics.
pub fn evaluate_rules(rules: &[QualityRule], diagnostics: &RentRollDiagnostics) -> QualityReport {
    let outcomes = rules.iter().map(|r| r.evaluate(diagnostics)).collect();
    QualityReport::new(outcomes)
}

/// The default rule set. Integrity violations have zero warn tolerance;
/// the fail thresholds reflect how much noise each condition can carry
/// before the roll should not be trusted at all.
pub fn default_rules() -> Vec<QualityRule> {
    vec![
        QualityRule {
            check: QualityCheck::DuplicateActiveAmendments,
            severity: Severity::Critical,
            warn_threshold: 0,
            fail_threshold: 5,
        },
        QualityRule {
            check: QualityCheck::InvalidStatusValues,
            severity: Severity::Critical,
            warn_threshold: 0,
            fail_threshold: 0,
        },
        QualityRule {
            check: QualityCheck::OrphanedChargeLines,
            severity: Severity::Warning,
            warn_threshold: 0,
            fail_threshold: 100,
        },
        QualityRule {
            check: QualityCheck::AmendmentsMissingRentCharge,
            severity: Severity::Warning,
            warn_threshold: 0,
            fail_threshold: 25,
        },
    ]
}
