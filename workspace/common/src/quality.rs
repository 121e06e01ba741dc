use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::RentRollDiagnostics;

/// The closed set of named data-quality checks. The source system expressed
/// these as SQL text stored in a table and executed dynamically; here each
/// check is a variant that reads the count it cares about from the resolver
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum QualityCheck {
    DuplicateActiveAmendments,
    OrphanedChargeLines,
    AmendmentsMissingRentCharge,
    InvalidStatusValues,
}

impl QualityCheck {
    /// The observed count for this check in a finished resolver run.
    pub fn observed(&self, diagnostics: &RentRollDiagnostics) -> u64 {
        match self {
            QualityCheck::DuplicateActiveAmendments => diagnostics.duplicate_active_amendments,
            QualityCheck::OrphanedChargeLines => diagnostics.orphaned_charge_lines,
            QualityCheck::AmendmentsMissingRentCharge => {
                diagnostics.amendments_missing_rent_charge
            }
            QualityCheck::InvalidStatusValues => diagnostics.invalid_status_count,
        }
    }
}

impl std::fmt::Display for QualityCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            QualityCheck::DuplicateActiveAmendments => "duplicate_active_amendments",
            QualityCheck::OrphanedChargeLines => "orphaned_charge_lines",
            QualityCheck::AmendmentsMissingRentCharge => "amendments_missing_rent_charge",
            QualityCheck::InvalidStatusValues => "invalid_status_values",
        };
        f.write_str(name)
    }
}

/// How serious a finding of this check is for downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// Outcome of comparing an observed count to a rule's thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum RuleStatus {
    Pass,
    Warn,
    Fail,
}

/// One evaluated rule: the check, what was observed, and the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RuleOutcome {
    pub check: QualityCheck,
    pub severity: Severity,
    pub observed: u64,
    pub warn_threshold: u64,
    pub fail_threshold: u64,
    pub status: RuleStatus,
}

/// The full report for one resolver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QualityReport {
    pub outcomes: Vec<RuleOutcome>,
    /// Worst status among the outcomes; `Pass` for an empty rule set.
    pub overall: RuleStatus,
}

impl QualityReport {
    pub fn new(outcomes: Vec<RuleOutcome>) -> Self {
        let overall = outcomes
            .iter()
            .map(|o| o.status)
            .max()
            .unwrap_or(RuleStatus::Pass);
        Self { outcomes, overall }
    }

    pub fn passed(&self) -> bool {
        self.overall == RuleStatus::Pass
    }
}
