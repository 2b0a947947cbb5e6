use crate::dtos::{CreateStatusCheckRequest, StatusCheckResponse};
use crate::models::StatusCheck;
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{extract::State, response::IntoResponse, Json};
use service_core::error::AppError;

/// Legacy endpoint for recording a status check
#[utoipa::path(
    post,
    path = "/api/status",
    request_body = CreateStatusCheckRequest,
    responses(
        (status = 200, description = "Recorded status check", body = StatusCheckResponse),
        (status = 422, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Status Checks"
)]
pub async fn create_status_check(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateStatusCheckRequest>,
) -> Result<impl IntoResponse, AppError> {
    let check = StatusCheck::new(req.client_name);
    state.db.insert_status_check(&check).await?;

    Ok(Json(StatusCheckResponse::from(check)))
}

/// Legacy endpoint for listing status checks
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Recorded status checks, capped at 1000", body = [StatusCheckResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Status Checks"
)]
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let checks = state.db.list_status_checks().await?;

    let body: Vec<StatusCheckResponse> =
        checks.into_iter().map(StatusCheckResponse::from).collect();
    Ok(Json(body))
}
