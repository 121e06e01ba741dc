use model::entities::{amendment, charge_line};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::{debug, instrument, trace};

use crate::error::Result;

/// Loads the full amendment snapshot, ordered by lease pair and sequence.
///
/// The whole table is fetched on purpose: filtering happens in the resolver
/// so that rows with invalid statuses are seen and counted instead of being
/// silently excluded by a WHERE clause.
#[instrument(skip(db))]
pub async fn get_amendment_snapshot(db: &DatabaseConnection) -> Result<Vec<amendment::Model>> {
    trace!("Fetching amendment snapshot");

    let amendments = amendment::Entity::find()
        .order_by_asc(amendment::Column::PropertyId)
        .order_by_asc(amendment::Column::TenantId)
        .order_by_asc(amendment::Column::Sequence)
        .all(db)
        .await?;

    debug!("Fetched {} amendments", amendments.len());

    for a in &amendments {
        trace!(
            "Amendment: id={}, lease={}/{}, seq={}, status={}, type={}",
            a.id, a.property_id, a.tenant_id, a.sequence, a.status, a.amendment_type
        );
    }

    Ok(amendments)
}

/// Loads the full charge-line snapshot, including rows that may turn out to
/// be orphaned; the resolver counts those.
#[instrument(skip(db))]
pub async fn get_charge_snapshot(db: &DatabaseConnection) -> Result<Vec<charge_line::Model>> {
    trace!("Fetching charge line snapshot");

    let charge_lines = charge_line::Entity::find()
        .order_by_asc(charge_line::Column::AmendmentId)
        .order_by_asc(charge_line::Column::Id)
        .all(db)
        .await?;

    debug!("Fetched {} charge lines", charge_lines.len());

    Ok(charge_lines)
}
