use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDate;
use model::entities::{amendment, charge_line};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace};
use utoipa::ToSchema;

use crate::schemas::{ApiResponse, AppState};

/// Request body for loading one amendment row of a vendor snapshot
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateAmendmentRequest {
    /// Vendor property code
    pub property_id: String,
    /// Vendor tenant code
    pub tenant_id: String,
    /// Version number within the (property, tenant) pair
    pub sequence: i32,
    /// Raw vendor status string, stored as-is
    pub status: String,
    /// Amendment type, e.g. "Original Lease", "Renewal"
    pub amendment_type: String,
    /// Leased square footage
    pub area: Option<Decimal>,
    /// First day in effect
    pub start_date: NaiveDate,
    /// Last day in effect; null means open-ended
    pub end_date: Option<NaiveDate>,
    /// Contract term length in months (default: 0)
    pub term_months: Option<i32>,
}

/// Amendment response model
#[derive(Debug, Serialize, ToSchema)]
pub struct AmendmentResponse {
    pub id: i32,
    pub property_id: String,
    pub tenant_id: String,
    pub sequence: i32,
    pub status: String,
    pub amendment_type: String,
    pub area: Option<Decimal>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub term_months: i32,
    pub month_to_month: bool,
}

impl From<amendment::Model> for AmendmentResponse {
    fn from(model: amendment::Model) -> Self {
        let month_to_month = model.is_month_to_month();
        Self {
            id: model.id,
            property_id: model.property_id,
            tenant_id: model.tenant_id,
            sequence: model.sequence,
            status: model.status,
            amendment_type: model.amendment_type,
            area: model.area,
            start_date: model.start_date,
            end_date: model.end_date,
            term_months: model.term_months,
            month_to_month,
        }
    }
}

/// Request body for loading one charge line of a vendor snapshot
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateChargeLineRequest {
    /// Charge category code, e.g. "rent", "cam", "tax"
    pub charge_code: String,
    /// First day the amount applies
    pub from_date: NaiveDate,
    /// Last day the amount applies; null means open-ended
    pub to_date: Option<NaiveDate>,
    pub monthly_amount: Decimal,
}

/// Charge line response model
#[derive(Debug, Serialize, ToSchema)]
pub struct ChargeLineResponse {
    pub id: i32,
    pub amendment_id: i32,
    pub charge_code: String,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    pub monthly_amount: Decimal,
}

impl From<charge_line::Model> for ChargeLineResponse {
    fn from(model: charge_line::Model) -> Self {
        Self {
            id: model.id,
            amendment_id: model.amendment_id,
            charge_code: model.charge_code,
            from_date: model.from_date,
            to_date: model.to_date,
            monthly_amount: model.monthly_amount,
        }
    }
}

/// Load one amendment row
#[utoipa::path(
    post,
    path = "/api/v1/amendments",
    tag = "amendments",
    request_body = CreateAmendmentRequest,
    responses(
        (status = 201, description = "Amendment created successfully", body = ApiResponse<AmendmentResponse>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_amendment(
    State(state): State<AppState>,
    Json(request): Json<CreateAmendmentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AmendmentResponse>>), StatusCode> {
    debug!(
        "Creating amendment for lease {}/{} seq {}",
        request.property_id, request.tenant_id, request.sequence
    );

    let new_amendment = amendment::ActiveModel {
        property_id: Set(request.property_id.clone()),
        tenant_id: Set(request.tenant_id.clone()),
        sequence: Set(request.sequence),
        status: Set(request.status.clone()),
        amendment_type: Set(request.amendment_type.clone()),
        area: Set(request.area),
        start_date: Set(request.start_date),
        end_date: Set(request.end_date),
        term_months: Set(request.term_months.unwrap_or(0)),
        ..Default::default()
    };

    match new_amendment.insert(&state.db).await {
        Ok(model) => {
            info!("Amendment created with ID: {}", model.id);
            let response = ApiResponse {
                data: AmendmentResponse::from(model),
                message: "Amendment created successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(e) => {
            error!("Failed to create amendment: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// List all amendments, ordered by lease pair and sequence
#[utoipa::path(
    get,
    path = "/api/v1/amendments",
    tag = "amendments",
    responses(
        (status = 200, description = "Amendments retrieved successfully", body = ApiResponse<Vec<AmendmentResponse>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_amendments(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AmendmentResponse>>>, StatusCode> {
    trace!("Listing amendments");

    let amendments = amendment::Entity::find()
        .order_by_asc(amendment::Column::PropertyId)
        .order_by_asc(amendment::Column::TenantId)
        .order_by_asc(amendment::Column::Sequence)
        .all(&state.db)
        .await
        .map_err(|e| {
            error!("Failed to list amendments: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let response = ApiResponse {
        data: amendments.into_iter().map(AmendmentResponse::from).collect(),
        message: "Amendments retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Load one charge line for an amendment
///
/// The amendment does not have to exist yet: vendor snapshots are loaded
/// table by table in any order, and orphaned charge lines are a condition
/// the resolver reports rather than something the load rejects.
#[utoipa::path(
    post,
    path = "/api/v1/amendments/{amendment_id}/charges",
    tag = "amendments",
    params(
        ("amendment_id" = i32, Path, description = "Owning amendment ID"),
    ),
    request_body = CreateChargeLineRequest,
    responses(
        (status = 201, description = "Charge line created successfully", body = ApiResponse<ChargeLineResponse>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_charge_line(
    Path(amendment_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<CreateChargeLineRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ChargeLineResponse>>), StatusCode> {
    debug!(
        "Creating {} charge line for amendment {}",
        request.charge_code, amendment_id
    );

    let new_line = charge_line::ActiveModel {
        amendment_id: Set(amendment_id),
        charge_code: Set(request.charge_code.clone()),
        from_date: Set(request.from_date),
        to_date: Set(request.to_date),
        monthly_amount: Set(request.monthly_amount),
        ..Default::default()
    };

    match new_line.insert(&state.db).await {
        Ok(model) => {
            info!("Charge line created with ID: {}", model.id);
            let response = ApiResponse {
                data: ChargeLineResponse::from(model),
                message: "Charge line created successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(e) => {
            error!("Failed to create charge line: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// List the charge lines of one amendment
#[utoipa::path(
    get,
    path = "/api/v1/amendments/{amendment_id}/charges",
    tag = "amendments",
    params(
        ("amendment_id" = i32, Path, description = "Owning amendment ID"),
    ),
    responses(
        (status = 200, description = "Charge lines retrieved successfully", body = ApiResponse<Vec<ChargeLineResponse>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_amendment_charges(
    Path(amendment_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ChargeLineResponse>>>, StatusCode> {
    trace!("Listing charge lines for amendment {}", amendment_id);

    let lines = charge_line::Entity::find()
        .filter(charge_line::Column::AmendmentId.eq(amendment_id))
        .order_by_asc(charge_line::Column::Id)
        .all(&state.db)
        .await
        .map_err(|e| {
            error!("Failed to list charge lines: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let response = ApiResponse {
        data: lines.into_iter().map(ChargeLineResponse::from).collect(),
        message: "Charge lines retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}
