pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use axum::{
    http::{HeaderValue, Method},
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::startup::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::service_info,
        handlers::health::health_check,
        handlers::locations::create_location,
        handlers::locations::list_locations,
        handlers::locations::get_location,
        handlers::locations::update_location,
        handlers::locations::delete_location,
        handlers::locations::search_locations,
        handlers::stats::get_stats,
        handlers::status::create_status_check,
        handlers::status::list_status_checks,
    ),
    components(
        schemas(
            dtos::CreateLocationRequest,
            dtos::UpdateLocationRequest,
            dtos::SearchLocationsRequest,
            dtos::LocationResponse,
            dtos::DeleteLocationResponse,
            dtos::StatsResponse,
            dtos::CreateStatusCheckRequest,
            dtos::StatusCheckResponse,
            dtos::ErrorResponse,
        )
    ),
    tags(
        (name = "Service", description = "Service identity and health"),
        (name = "Locations", description = "Location marker management"),
        (name = "Statistics", description = "Aggregate map statistics"),
        (name = "Status Checks", description = "Legacy status check endpoints"),
    )
)]
pub struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/api", get(handlers::health::service_info))
        .route("/api/", get(handlers::health::service_info))
        .route("/api/health", get(handlers::health::health_check))
        .route(
            "/api/locations",
            post(handlers::locations::create_location).get(handlers::locations::list_locations),
        )
        .route(
            "/api/locations/search",
            post(handlers::locations::search_locations),
        )
        .route(
            "/api/locations/:location_id",
            get(handlers::locations::get_location)
                .put(handlers::locations::update_location)
                .delete(handlers::locations::delete_location),
        )
        .route("/api/stats", get(handlers::stats::get_stats))
        .route(
            "/api/status",
            post(handlers::status::create_status_check).get(handlers::status::list_status_checks),
        )
        .route("/metrics", get(handlers::metrics::metrics))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(cors)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    // Credentials rule out a literal `*`, so a wildcard config mirrors the
    // caller's origin instead.
    if origins.iter().any(|origin| origin == "*") {
        cors.allow_origin(AllowOrigin::mirror_request())
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                    None
                }
            })
            .collect();
        cors.allow_origin(parsed)
    }
}
