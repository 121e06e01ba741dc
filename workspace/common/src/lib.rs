//! Common transport-layer types shared between the compute crate and the
//! HTTP backend. These structs are the wire shapes of the rent roll and the
//! data-quality report, so handlers and the resolver agree on payloads
//! without duplicating definitions.

mod quality;
mod rent_roll;

pub use quality::{QualityCheck, QualityReport, RuleOutcome, RuleStatus, Severity};
pub use rent_roll::{LeaseKey, RentRoll, RentRollDiagnostics, ResolvedLeaseRecord};
