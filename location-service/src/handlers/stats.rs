use crate::dtos::StatsResponse;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use service_core::error::AppError;

/// Get statistics about the map data
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Aggregate statistics", body = StatsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Statistics"
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    // Three independent reads; interleaved writes may be reflected unevenly
    // and that is accepted.
    let total_locations = state.db.count_locations().await?;
    let categories = state.db.count_by_category().await?;
    let recent_locations = state.db.count_recent_locations().await?;

    Ok(Json(StatsResponse {
        total_locations,
        categories,
        recent_locations,
        last_updated: Utc::now().to_rfc3339(),
    }))
}
