use crate::handlers::{
    amendments::{create_amendment, create_charge_line, get_amendment_charges, get_amendments},
    health::health_check,
    periods::{create_period, get_periods},
    quality::get_rent_roll_quality,
    rent_roll::get_rent_roll,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Snapshot load routes
        .route("/api/v1/amendments", post(create_amendment))
        .route("/api/v1/amendments", get(get_amendments))
        .route(
            "/api/v1/amendments/:amendment_id/charges",
            post(create_charge_line),
        )
        .route(
            "/api/v1/amendments/:amendment_id/charges",
            get(get_amendment_charges),
        )
        // Accounting period routes
        .route("/api/v1/periods", post(create_period))
        .route("/api/v1/periods", get(get_periods))
        // Rent roll routes
        .route("/api/v1/rent-roll", get(get_rent_roll))
        .route("/api/v1/rent-roll/quality", get(get_rent_roll_quality))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
