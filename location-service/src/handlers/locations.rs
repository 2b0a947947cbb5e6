use crate::dtos::{
    CreateLocationRequest, DeleteLocationResponse, ListLocationsParams, LocationResponse,
    SearchLocationsRequest, UpdateLocationRequest,
};
use crate::models::Location;
use crate::services::record_location_created;
use crate::startup::AppState;
use crate::utils::{ValidatedJson, ValidatedQuery};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

/// Create a new location marker
#[utoipa::path(
    post,
    path = "/api/locations",
    request_body = CreateLocationRequest,
    responses(
        (status = 200, description = "Location created", body = LocationResponse),
        (status = 422, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Locations"
)]
pub async fn create_location(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateLocationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let location = Location::new(
        req.name,
        req.latitude,
        req.longitude,
        req.description,
        req.category,
        req.user_id,
    );

    state.db.insert_location(&location).await?;
    record_location_created(location.category.as_deref());

    tracing::info!(location_id = %location.id, name = %location.name, "Location created");
    Ok(Json(LocationResponse::from(location)))
}

/// Retrieve locations with optional filtering
#[utoipa::path(
    get,
    path = "/api/locations",
    params(ListLocationsParams),
    responses(
        (status = 200, description = "Matching locations", body = [LocationResponse]),
        (status = 422, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Locations"
)]
pub async fn list_locations(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ListLocationsParams>,
) -> Result<impl IntoResponse, AppError> {
    // Empty filter values mean "no filter", same as omitting the parameter.
    let category = params.category.as_deref().filter(|c| !c.is_empty());
    let user_id = params.user_id.as_deref().filter(|u| !u.is_empty());

    let locations = state
        .db
        .list_locations(params.limit, category, user_id)
        .await?;

    let body: Vec<LocationResponse> = locations.into_iter().map(LocationResponse::from).collect();
    Ok(Json(body))
}

/// Get a specific location by ID
#[utoipa::path(
    get,
    path = "/api/locations/{location_id}",
    params(("location_id" = String, Path, description = "Location identifier")),
    responses(
        (status = 200, description = "The location", body = LocationResponse),
        (status = 404, description = "Location not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Locations"
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let location = state
        .db
        .find_location(&location_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Location not found")))?;

    Ok(Json(LocationResponse::from(location)))
}

/// Update a location's mutable fields
#[utoipa::path(
    put,
    path = "/api/locations/{location_id}",
    params(("location_id" = String, Path, description = "Location identifier")),
    request_body = UpdateLocationRequest,
    responses(
        (status = 200, description = "The updated location", body = LocationResponse),
        (status = 400, description = "No update data provided", body = ErrorResponse),
        (status = 404, description = "Location not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Locations"
)]
pub async fn update_location(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateLocationRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "No update data provided"
        )));
    }

    let updated = state
        .db
        .update_location(&location_id, req.update_document())
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Location not found")))?;

    Ok(Json(LocationResponse::from(updated)))
}

/// Delete a location
#[utoipa::path(
    delete,
    path = "/api/locations/{location_id}",
    params(("location_id" = String, Path, description = "Location identifier")),
    responses(
        (status = 200, description = "Deletion confirmation", body = DeleteLocationResponse),
        (status = 404, description = "Location not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Locations"
)]
pub async fn delete_location(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.db.delete_location(&location_id).await?;
    if !deleted {
        return Err(AppError::NotFound(anyhow::anyhow!("Location not found")));
    }

    tracing::info!(location_id = %location_id, "Location deleted");
    Ok(Json(DeleteLocationResponse {
        message: "Location deleted successfully".to_string(),
        id: location_id,
    }))
}

/// Search locations by name or description
#[utoipa::path(
    post,
    path = "/api/locations/search",
    request_body = SearchLocationsRequest,
    responses(
        (status = 200, description = "Matching locations", body = [LocationResponse]),
        (status = 422, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Locations"
)]
pub async fn search_locations(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SearchLocationsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let locations = state.db.search_locations(&req.query, req.limit).await?;

    let body: Vec<LocationResponse> = locations.into_iter().map(LocationResponse::from).collect();
    Ok(Json(body))
}
