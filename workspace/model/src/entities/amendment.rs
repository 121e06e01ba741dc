use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use super::charge_line;

/// One version of a lease agreement for a (property, tenant) pair.
///
/// Rows are immutable snapshots from the property-management export. The
/// `status` and `amendment_type` columns carry the raw vendor strings: the
/// export is known to contain invalid statuses (e.g. `"In Process"`), and
/// those rows must survive ingestion so the resolver can report them as
/// data-quality errors instead of the load rejecting them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "amendments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Vendor code of the leased space.
    pub property_id: String,
    /// Vendor code of the occupant.
    pub tenant_id: String,
    /// Version number within the (property, tenant) pair. Monotonically
    /// increasing, but gaps are normal.
    pub sequence: i32,
    /// Raw vendor status. Valid values: Activated, Superseded, Cancelled,
    /// Pending.
    pub status: String,
    /// Free-text category, e.g. "Original Lease", "Renewal", "Termination".
    pub amendment_type: String,
    /// Leased square footage. May be zero or missing in the export.
    #[sea_orm(column_type = "Decimal(Some((16, 4)))", nullable)]
    pub area: Option<Decimal>,
    /// First day the amendment is in effect.
    pub start_date: NaiveDate,
    /// Last day the amendment is in effect. Null means open-ended
    /// (month-to-month), never "expired".
    pub end_date: Option<NaiveDate>,
    /// Contract term length in months.
    pub term_months: i32,
}

impl Model {
    /// A month-to-month lease has no end date and a zero-length term.
    pub fn is_month_to_month(&self) -> bool {
        self.end_date.is_none() && self.term_months == 0
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "charge_line::Entity")]
    ChargeLine,
}

impl Related<charge_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChargeLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
