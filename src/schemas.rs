use chrono::NaiveDate;
use common::{
    LeaseKey, QualityCheck, QualityReport, RentRoll, RentRollDiagnostics, ResolvedLeaseRecord,
    RuleOutcome, RuleStatus, Severity,
};
use moka::future::Cache;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Cache for resolved rolls and quality reports
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    RentRoll(RentRoll),
    Quality(QualityReport),
}

/// Query parameters for rent roll endpoints
#[derive(Debug, Deserialize, ToSchema)]
pub struct RentRollQuery {
    /// Reference date (YYYY-MM-DD); omitted means "last closed period"
    pub as_of: Option<NaiveDate>,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::amendments::create_amendment,
        crate::handlers::amendments::get_amendments,
        crate::handlers::amendments::create_charge_line,
        crate::handlers::amendments::get_amendment_charges,
        crate::handlers::periods::create_period,
        crate::handlers::periods::get_periods,
        crate::handlers::rent_roll::get_rent_roll,
        crate::handlers::quality::get_rent_roll_quality,
    ),
    components(
        schemas(
            ApiResponse<RentRoll>,
            ApiResponse<QualityReport>,
            ErrorResponse,
            HealthResponse,
            RentRollQuery,
            RentRoll,
            ResolvedLeaseRecord,
            RentRollDiagnostics,
            LeaseKey,
            QualityReport,
            RuleOutcome,
            QualityCheck,
            RuleStatus,
            Severity,
            crate::handlers::amendments::CreateAmendmentRequest,
            crate::handlers::amendments::AmendmentResponse,
            crate::handlers::amendments::CreateChargeLineRequest,
            crate::handlers::amendments::ChargeLineResponse,
            crate::handlers::periods::CreatePeriodRequest,
            crate::handlers::periods::PeriodResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "amendments", description = "Lease amendment and charge snapshot endpoints"),
        (name = "periods", description = "Accounting period endpoints"),
        (name = "rent-roll", description = "Rent roll resolution endpoints"),
    ),
    info(
        title = "leaseroll API",
        description = "Point-in-time lease amendment resolution and rent roll reporting over property-management exports",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
