use std::str::FromStr;

use thiserror::Error;

/// Lifecycle status of a lease amendment.
///
/// Only these four values are valid. The vendor export also contains other
/// strings (`"In Process"` has been observed); those are data-quality errors
/// and must be surfaced by the resolver, never silently mapped to a valid
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmendmentStatus {
    Activated,
    Superseded,
    Cancelled,
    Pending,
}

/// Raised when an amendment carries a status string outside the valid set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid amendment status: {value:?}")]
pub struct InvalidStatusError {
    pub value: String,
}

impl FromStr for AmendmentStatus {
    type Err = InvalidStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Activated" => Ok(AmendmentStatus::Activated),
            "Superseded" => Ok(AmendmentStatus::Superseded),
            "Cancelled" => Ok(AmendmentStatus::Cancelled),
            "Pending" => Ok(AmendmentStatus::Pending),
            other => Err(InvalidStatusError {
                value: other.to_string(),
            }),
        }
    }
}

impl AmendmentStatus {
    /// Whether the amendment can represent the current version of a lease.
    ///
    /// Superseded is included on purpose: the latest rent-relevant version
    /// of many leases is marked Superseded by a later non-rent amendment,
    /// and excluding it materially undercounts the portfolio.
    pub fn counts_toward_rent_roll(&self) -> bool {
        matches!(self, AmendmentStatus::Activated | AmendmentStatus::Superseded)
    }
}

/// Amendment types that never participate in the current rent roll.
pub const EXCLUDED_AMENDMENT_TYPES: [&str; 3] = ["Termination", "Proposal in DM", "Modification"];

/// Whether this amendment type is barred from rent roll resolution.
pub fn is_excluded_type(amendment_type: &str) -> bool {
    EXCLUDED_AMENDMENT_TYPES.contains(&amendment_type)
}
