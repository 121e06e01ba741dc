use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use model::entities::charge_line;
use rust_decimal::Decimal;
use tracing::{trace, warn};

/// Charge code carrying base rent and contractual rent steps. Other codes
/// (cam, tax, ...) are not part of the rent roll's monthly rent.
pub const RENT_CHARGE_CODE: &str = "rent";

/// Charge lines grouped by owning amendment, with orphans split off.
#[derive(Debug)]
pub struct ChargeIndex {
    by_amendment: HashMap<i32, Vec<charge_line::Model>>,
    /// Charge lines whose amendment_id matched nothing in the snapshot.
    pub orphaned_charge_lines: u64,
}

impl ChargeIndex {
    /// Indexes charge lines against the set of amendment ids present in the
    /// snapshot. Orphans are counted and dropped from the index so they can
    /// never contribute to any amendment's rent.
    pub fn build(
        charge_lines: Vec<charge_line::Model>,
        known_amendment_ids: &HashSet<i32>,
    ) -> Self {
        let mut by_amendment: HashMap<i32, Vec<charge_line::Model>> = HashMap::new();
        let mut orphaned_charge_lines = 0u64;

        for line in charge_lines {
            if known_amendment_ids.contains(&line.amendment_id) {
                by_amendment.entry(line.amendment_id).or_default().push(line);
            } else {
                warn!(
                    charge_line_id = line.id,
                    amendment_id = line.amendment_id,
                    "orphaned charge line: no such amendment in snapshot"
                );
                orphaned_charge_lines += 1;
            }
        }

        Self {
            by_amendment,
            orphaned_charge_lines,
        }
    }

    /// Sums the rent charge lines of one amendment that are active on the
    /// reference date. An open-ended `to_date` means the charge still
    /// applies. Returns `None` when no rent line covers the date, so the
    /// caller can tell "zero rent" apart from "missing data".
    pub fn monthly_rent_on(&self, amendment_id: i32, as_of: NaiveDate) -> Option<Decimal> {
        let lines = self.by_amendment.get(&amendment_id)?;

        let mut total = None;
        for line in lines {
            if line.charge_code != RENT_CHARGE_CODE {
                continue;
            }
            if line.from_date > as_of {
                continue;
            }
            if let Some(to_date) = line.to_date {
                if to_date < as_of {
                    continue;
                }
            }

            trace!(
                charge_line_id = line.id,
                amendment_id,
                amount = %line.monthly_amount,
                "rent charge line active on reference date"
            );
            total = Some(total.unwrap_or(Decimal::ZERO) + line.monthly_amount);
        }
        total
    }
}
