//! This file serves as the root for all SeaORM entity modules.
//! The tables mirror the Yardi lease export: amendments, their charge
//! schedules, and the accounting period reference table used to pick a
//! reproducible reporting date.

pub mod accounting_period;
pub mod amendment;
pub mod charge_line;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::accounting_period::Entity as AccountingPeriod;
    pub use super::amendment::Entity as Amendment;
    pub use super::charge_line::Entity as ChargeLine;
}
