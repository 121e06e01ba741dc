pub mod charges;
pub mod dataframe;
pub mod fetch;
pub mod selection;
pub mod status;

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use common::{RentRoll, RentRollDiagnostics, ResolvedLeaseRecord};
use model::entities::{amendment, charge_line};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use tracing::{debug, info, instrument, warn};

use crate::error::Result;
use crate::reference_date::ReferenceDate;

use self::charges::ChargeIndex;
use self::selection::select_current_amendments;
use self::status::{is_excluded_type, AmendmentStatus};

/// Seam for anything that can produce a rent roll against a database
/// snapshot. The API layer and the test harness depend on this trait rather
/// than on the concrete resolver.
#[async_trait]
pub trait RentRollCalculator {
    async fn compute_rent_roll(
        &self,
        db: &DatabaseConnection,
        reference: ReferenceDate,
    ) -> Result<RentRoll>;
}

/// The standard resolver: fetches both snapshots and runs the pure
/// resolution over them.
#[derive(Debug, Default)]
pub struct RentRollResolver;

impl RentRollResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RentRollCalculator for RentRollResolver {
    #[instrument(skip(self, db), fields(reference = ?reference))]
    async fn compute_rent_roll(
        &self,
        db: &DatabaseConnection,
        reference: ReferenceDate,
    ) -> Result<RentRoll> {
        let as_of = reference.resolve(db).await?;
        let amendments = fetch::get_amendment_snapshot(db).await?;
        let charge_lines = fetch::get_charge_snapshot(db).await?;

        Ok(resolve_rent_roll(&amendments, &charge_lines, as_of))
    }
}

/// Resolves the portfolio rent roll as of `as_of`.
///
/// Pure function of the two snapshots and the reference date: no clock, no
/// I/O, no shared state. Running it twice on the same inputs yields
/// identical output, diagnostics included.
///
/// Guarantees exactly one record per (property, tenant) pair that has at
/// least one amendment surviving the status/type and temporal filters, and
/// that each record's source amendment carries the maximum sequence among
/// those survivors.
pub fn resolve_rent_roll(
    amendments: &[amendment::Model],
    charge_lines: &[charge_line::Model],
    as_of: NaiveDate,
) -> RentRoll {
    let mut diagnostics = RentRollDiagnostics::default();

    // Orphan detection runs against the whole snapshot, not the filter
    // survivors: a charge line attached to a Cancelled amendment is not an
    // orphan, it is just irrelevant today.
    let known_ids: HashSet<i32> = amendments.iter().map(|a| a.id).collect();

    let candidates = filter_candidates(amendments, as_of, &mut diagnostics);
    debug!(
        "{} of {} amendments survive status/type and temporal filters",
        candidates.len(),
        amendments.len()
    );

    let selection = select_current_amendments(candidates);
    diagnostics.duplicate_active_amendments = selection.duplicate_active_amendments;

    let index = ChargeIndex::build(charge_lines.to_vec(), &known_ids);
    diagnostics.orphaned_charge_lines = index.orphaned_charge_lines;

    let mut records = Vec::with_capacity(selection.selected.len());
    for (key, amendment) in selection.selected {
        let monthly_rent = index.monthly_rent_on(amendment.id, as_of);
        let missing_rent_charge = monthly_rent.is_none();
        if missing_rent_charge {
            warn!(
                lease = %key,
                amendment_id = amendment.id,
                "selected amendment has no rent charge covering the reference date"
            );
            diagnostics.amendments_missing_rent_charge += 1;
            diagnostics.missing_rent_charge_keys.push(key.clone());
        }
        let monthly_rent = monthly_rent.unwrap_or(Decimal::ZERO);

        let annual_rent = monthly_rent * Decimal::from(12);
        let rent_psf = match amendment.area {
            Some(area) if area > Decimal::ZERO => Some(annual_rent / area),
            _ => None,
        };

        records.push(ResolvedLeaseRecord {
            property_id: amendment.property_id,
            tenant_id: amendment.tenant_id,
            area: amendment.area,
            monthly_rent,
            annual_rent,
            rent_psf,
            start_date: amendment.start_date,
            end_date: amendment.end_date,
            month_to_month: amendment.end_date.is_none() && amendment.term_months == 0,
            missing_rent_charge,
        });
    }

    info!(
        "Resolved rent roll as of {}: {} records, diagnostics clean: {}",
        as_of,
        records.len(),
        diagnostics.is_clean()
    );

    RentRoll {
        as_of,
        records,
        diagnostics,
    }
}

/// Applies the status/type filter and the temporal filter.
///
/// Rows with a status outside the valid set are counted as data-quality
/// errors; Cancelled and Pending rows are filtered silently as normal
/// business rules.
fn filter_candidates(
    amendments: &[amendment::Model],
    as_of: NaiveDate,
    diagnostics: &mut RentRollDiagnostics,
) -> Vec<amendment::Model> {
    let mut candidates = Vec::new();

    for a in amendments {
        let status: AmendmentStatus = match a.status.parse() {
            Ok(status) => status,
            Err(err) => {
                warn!(
                    amendment_id = a.id,
                    lease = format!("{}/{}", a.property_id, a.tenant_id),
                    %err,
                    "amendment excluded: invalid status value"
                );
                diagnostics.invalid_status_count += 1;
                continue;
            }
        };

        if !status.counts_toward_rent_roll() {
            continue;
        }
        if is_excluded_type(&a.amendment_type) {
            continue;
        }
        if a.start_date > as_of {
            continue;
        }
        // A null end date is an open-ended lease, never an expired one.
        if let Some(end_date) = a.end_date {
            if end_date < as_of {
                continue;
            }
        }

        candidates.push(a.clone());
    }

    candidates
}
