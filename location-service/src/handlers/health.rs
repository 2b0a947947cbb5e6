use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;
use service_core::error::AppError;

/// Service identity and feature summary
#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Service summary")
    ),
    tag = "Service"
)]
pub async fn service_info() -> impl IntoResponse {
    Json(json!({
        "message": "Location Service API",
        "status": "active",
        "version": env!("CARGO_PKG_VERSION"),
        "features": [
            "Interactive world map",
            "Location search",
            "Custom markers",
            "Multiple map layers"
        ]
    }))
}

/// Service health check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service and store are healthy"),
        (status = 503, description = "Store unreachable", body = ErrorResponse)
    ),
    tag = "Service"
)]
pub async fn health_check(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.db.health_check().await?;

    Ok(Json(json!({
        "status": "healthy",
        "database": "connected",
        "timestamp": Utc::now().to_rfc3339()
    })))
}
