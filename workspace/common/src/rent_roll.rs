use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifies a lease: one leased space occupied by one tenant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub struct LeaseKey {
    pub property_id: String,
    pub tenant_id: String,
}

impl LeaseKey {
    pub fn new(property_id: impl Into<String>, tenant_id: impl Into<String>) -> Self {
        Self {
            property_id: property_id.into(),
            tenant_id: tenant_id.into(),
        }
    }
}

impl std::fmt::Display for LeaseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.property_id, self.tenant_id)
    }
}

/// The current lease terms for one (property, tenant) pair as of the
/// reference date. One row of the rent roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResolvedLeaseRecord {
    pub property_id: String,
    pub tenant_id: String,
    /// Leased square footage carried over from the selected amendment.
    pub area: Option<Decimal>,
    /// Sum of all rent charge lines active on the reference date.
    pub monthly_rent: Decimal,
    /// `monthly_rent * 12`.
    pub annual_rent: Decimal,
    /// `annual_rent / area`, only when `area > 0`.
    pub rent_psf: Option<Decimal>,
    pub start_date: NaiveDate,
    /// Null for open-ended (month-to-month) leases.
    pub end_date: Option<NaiveDate>,
    pub month_to_month: bool,
    /// True when no rent charge line covered the reference date. The rent is
    /// reported as zero but must not be read as "tenant pays nothing".
    pub missing_rent_charge: bool,
}

impl ResolvedLeaseRecord {
    pub fn lease_key(&self) -> LeaseKey {
        LeaseKey::new(self.property_id.clone(), self.tenant_id.clone())
    }
}

/// Counts of the data problems encountered while resolving. Always shipped
/// next to the records so consumers can judge how trustworthy the roll is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RentRollDiagnostics {
    /// Pairs with more than one Activated amendment surviving the filters.
    pub duplicate_active_amendments: u64,
    /// Charge lines pointing at an amendment absent from the snapshot.
    pub orphaned_charge_lines: u64,
    /// Selected amendments with no rent charge covering the reference date.
    pub amendments_missing_rent_charge: u64,
    /// Amendments whose status is not one of the four valid values.
    pub invalid_status_count: u64,
    /// The pairs behind `amendments_missing_rent_charge`, for remediation.
    pub missing_rent_charge_keys: Vec<LeaseKey>,
}

impl RentRollDiagnostics {
    /// True when the snapshot produced no data-quality findings at all.
    pub fn is_clean(&self) -> bool {
        self.duplicate_active_amendments == 0
            && self.orphaned_charge_lines == 0
            && self.amendments_missing_rent_charge == 0
            && self.invalid_status_count == 0
    }
}

/// A complete rent roll run: the records plus the diagnostics of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RentRoll {
    /// The reference date the roll was resolved against.
    pub as_of: NaiveDate,
    /// One record per (property, tenant) pair, ordered by pair.
    pub records: Vec<ResolvedLeaseRecord>,
    pub diagnostics: RentRollDiagnostics,
}

impl RentRoll {
    /// Total monthly rent across the portfolio.
    pub fn total_monthly_rent(&self) -> Decimal {
        self.records.iter().map(|r| r.monthly_rent).sum()
    }
}
