use chrono::NaiveDate;
use model::entities::accounting_period;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::{debug, instrument};

use crate::error::{ResolveError, Result};

/// Where the resolver's reference date comes from.
///
/// The core algorithm never reads the system clock: callers inject the date.
/// `LastClosedPeriod` is the preferred source for reporting because it does
/// not change between runs; a caller that really wants "today" passes it as
/// `Explicit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceDate {
    /// A caller-supplied date.
    Explicit(NaiveDate),
    /// The end of the most recently closed accounting period.
    LastClosedPeriod,
}

impl ReferenceDate {
    /// Resolves to a concrete date, or refuses to run.
    ///
    /// An empty closed-period table is a configuration error: a silently
    /// guessed date would corrupt the entire output without anyone noticing.
    #[instrument(skip(db))]
    pub async fn resolve(&self, db: &DatabaseConnection) -> Result<NaiveDate> {
        match self {
            ReferenceDate::Explicit(date) => Ok(*date),
            ReferenceDate::LastClosedPeriod => {
                let period = accounting_period::Entity::find()
                    .filter(accounting_period::Column::Closed.eq(true))
                    .order_by_desc(accounting_period::Column::PeriodEnd)
                    .one(db)
                    .await?;

                match period {
                    Some(period) => {
                        debug!(
                            "Resolved reference date {} from closed period id={}",
                            period.period_end, period.id
                        );
                        Ok(period.period_end)
                    }
                    None => Err(ResolveError::Configuration(
                        "no closed accounting period found; cannot determine reference date"
                            .to_string(),
                    )),
                }
            }
        }
    }
}
