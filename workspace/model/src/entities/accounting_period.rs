use chrono::NaiveDate;
use sea_orm::entity::prelude::*;

/// An accounting period of the reporting calendar.
///
/// The greatest `period_end` among closed periods is the preferred reference
/// date for rent roll runs: unlike "today" it does not change between runs,
/// so reports stay reproducible.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounting_periods")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Last day of the period.
    pub period_end: NaiveDate,
    /// Whether the books for this period have been closed.
    pub closed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
