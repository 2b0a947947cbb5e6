pub mod locations;
pub mod stats;
pub mod status;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use locations::{
    CreateLocationRequest, DeleteLocationResponse, ListLocationsParams, LocationResponse,
    SearchLocationsRequest, UpdateLocationRequest,
};
pub use stats::StatsResponse;
pub use status::{CreateStatusCheckRequest, StatusCheckResponse};

/// Error body shared by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
