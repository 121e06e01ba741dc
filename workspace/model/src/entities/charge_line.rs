use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use super::amendment;

/// A recurring billable amount (rent, CAM, tax, ...) tied to an amendment
/// and a validity date range.
///
/// The relation to `amendments` is declared at the application level only:
/// there is deliberately no database foreign key, because vendor exports can
/// contain orphaned charge rows and those have to be loadable so the resolver
/// can count them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "charge_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The amendment this charge belongs to. Not FK-enforced, see above.
    pub amendment_id: i32,
    /// Charge category code, e.g. "rent", "cam", "tax".
    pub charge_code: String,
    /// First day the amount applies.
    pub from_date: NaiveDate,
    /// Last day the amount applies. Null means open-ended.
    pub to_date: Option<NaiveDate>,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub monthly_amount: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "amendment::Entity",
        from = "Column::AmendmentId",
        to = "amendment::Column::Id"
    )]
    Amendment,
}

impl Related<amendment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Amendment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
