use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDate;
use common::RentRoll;
use compute::error::ResolveError;
use compute::{default_resolver, ReferenceDate, RentRollCalculator};
use tracing::{debug, error, instrument, warn};

use crate::schemas::{ApiResponse, AppState, CachedData, RentRollQuery};

/// Resolve the portfolio rent roll as of a reference date
///
/// Without `as_of`, the reference date is the end of the last closed
/// accounting period. If no closed period exists the request is rejected:
/// resolving against a silently guessed date would corrupt the whole
/// output.
#[utoipa::path(
    get,
    path = "/api/v1/rent-roll",
    tag = "rent-roll",
    params(
        ("as_of" = Option<NaiveDate>, Query, description = "Reference date (YYYY-MM-DD)"),
    ),
    responses(
        (status = 200, description = "Rent roll resolved successfully", body = ApiResponse<RentRoll>),
        (status = 422, description = "No reference date could be determined", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_rent_roll(
    Query(query): Query<RentRollQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<RentRoll>>, StatusCode> {
    let cache_key = format!("rent_roll_{:?}", query.as_of);

    if let Some(CachedData::RentRoll(roll)) = state.cache.get(&cache_key).await {
        debug!("Rent roll served from cache");
        let response = ApiResponse {
            data: roll,
            message: "Rent roll retrieved from cache".to_string(),
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
            warn!("Rent roll request rejected: {}", msg);
            return Err(StatusCode::UNPROCESSABLE_ENTITY);
        }
        Err(e) => {
            error!("Rent roll resolution failed: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    state
        .cache
        .insert(cache_key, CachedData::RentRoll(roll.clone()))
        .await;

    // The diagnostics ride along with the records on purpose: consumers
    // must be able to see how trustworthy the roll is.
    let message = if roll.diagnostics.is_clean() {
        "Rent roll resolved successfully".to_string()
    } else {
        "Rent roll resolved with data-quality findings".to_string()
    };

    let response = ApiResponse {
        data: roll,
        message,
        success: true,
    };
    Ok(Json(response))
}
