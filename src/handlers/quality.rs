use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDate;
use common::QualityReport;
use compute::error::ResolveError;
use compute::quality::{default_rules, evaluate_rules};
use compute::{default_resolver, ReferenceDate, RentRollCalculator};
use tracing::{debug, error, instrument, warn};

use crate::schemas::{ApiResponse, AppState, CachedData, RentRollQuery};

/// Run the data-quality rule set against a resolver run
#[utoipa::path(
    get,
    path = "/api/v1/rent-roll/quality",
    tag = "rent-roll",
    params(
        ("as_of" = Option<NaiveDate>, Query, description = "Reference date (YYYY-MM-DD)"),
    ),
    responses(
        (status = 200, description = "Quality report produced successfully", body = ApiResponse<QualityReport>),
        (status = 422, description = "No reference date could be determined", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_rent_roll_quality(
    Query(query): Query<RentRollQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<QualityReport>>, StatusCode> {
    let cache_key = format!("quality_{:?}", query.as_of);

    if let Some(CachedData::Quality(report)) = state.cache.get(&cache_key).await {
        debug!("Quality report served from cache");
        let response = ApiResponse {
            data: report,
            message: "Quality report retrieved from cache".to_string(),
            success: true,
        };
        return Ok(Json(response));
    }

    let reference = match query.as_of {
        Some(date) => ReferenceDate::Explicit(date),
        None => ReferenceDate::LastClosedPeriod,
    };

    let resolver = default_resolver();
    let roll = match resolver.compute_rent_roll(&state.db, reference).await {
        Ok(roll) => roll,
        Err(ResolveError::Configuration(msg)) => {
            warn!("Quality request rejected: {}", msg);
            return Err(StatusCode::UNPROCESSABLE_ENTITY);
        }
        Err(e) => {
            error!("Quality resolution failed: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let report = evaluate_rules(&default_rules(), &roll.diagnostics);

    state
        .cache
        .insert(cache_key, CachedData::Quality(report.clone()))
        .await;

    let message = if report.passed() {
        "All quality checks passed".to_string()
    } else {
        "Quality checks reported findings".to_string()
    };

    let response = ApiResponse {
        data: report,
        message,
        success: true,
    };
    Ok(Json(response))
}
