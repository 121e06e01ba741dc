use axum::{extract::State, http::StatusCode, response::Json};
use chrono::NaiveDate;
use model::entities::accounting_period;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace};
use utoipa::ToSchema;

use crate::schemas::{ApiResponse, AppState};

/// Request body for registering an accounting period
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePeriodRequest {
    /// Last day of the period
    pub period_end: NaiveDate,
    /// Whether the books for this period are closed (default: false)
    pub closed: Option<bool>,
}

/// Accounting period response model
#[derive(Debug, Serialize, ToSchema)]
pub struct PeriodResponse {
    pub id: i32,
    pub period_end: NaiveDate,
    pub closed: bool,
}

impl From<accounting_period::Model> for PeriodResponse {
    fn from(model: accounting_period::Model) -> Self {
        Self {
            id: model.id,
            period_end: model.period_end,
            closed: model.closed,
        }
    }
}

/// Register an accounting period
#[utoipa::path(
    post,
    path = "/api/v1/periods",
    tag = "periods",
    request_body = CreatePeriodRequest,
    responses(
        (status = 201, description = "Period created successfully", body = ApiResponse<PeriodResponse>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_period(
    State(state): State<AppState>,
    Json(request): Json<CreatePeriodRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PeriodResponse>>), StatusCode> {
    debug!(
        "Registering accounting period ending {} (closed: {:?})",
        request.period_end, request.closed
    );

    let new_period = accounting_period::ActiveModel {
        period_end: Set(request.period_end),
        closed: Set(request.closed.unwrap_or(false)),
        ..Default::default()
    };

    match new_period.insert(&state.db).await {
        Ok(model) => {
            info!("Accounting period created with ID: {}", model.id);
            let response = ApiResponse {
                data: PeriodResponse::from(model),
                message: "Period created successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(e) => {
            error!("Failed to create period: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// List accounting periods, newest first
#[utoipa::path(
    get,
    path = "/api/v1/periods",
    tag = "periods",
    responses(
        (status = 200, description = "Periods retrieved successfully", body = ApiResponse<Vec<PeriodResponse>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_periods(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PeriodResponse>>>, StatusCode> {
    trace!("Listing accounting periods");

    let periods = accounting_period::Entity::find()
        .order_by_desc(accounting_period::Column::PeriodEnd)
        .all(&state.db)
        .await
        .map_err(|e| {
            error!("Failed to list periods: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let response = ApiResponse {
        data: periods.into_iter().map(PeriodResponse::from).collect(),
        message: "Periods retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}
