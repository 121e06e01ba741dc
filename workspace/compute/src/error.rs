use thiserror::Error;
use tracing::error;

/// Error types for the compute module.
///
/// Record-level data problems (duplicate active amendments, orphaned charge
/// lines, invalid statuses, missing rent charges) are deliberately *not*
/// errors: they are counted in `RentRollDiagnostics` so one bad amendment
/// never spoils the rest of the roll. Only conditions that make the whole
/// run meaningless surface here.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// The run cannot proceed, e.g. no closed accounting period exists to
    /// supply a reference date. Aborting beats silently picking a date.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),
}

impl From<polars::error::PolarsError> for ResolveError {
    fn from(e: polars::error::PolarsError) -> Self {
        let err = ResolveError::DataFrame(e.to_string());
        error!(?err, "DataFrame error");
        err
    }
}

/// Type alias for Result with ResolveError
pub type Result<T> = std::result::Result<T, ResolveError>;
