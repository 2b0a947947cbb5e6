use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Aggregate map statistics. `categories` maps every stored category value
/// to its marker count; markers without a category are reported under
/// "uncategorized", so the counts always sum to `total_locations`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsResponse {
    pub total_locations: u64,
    pub categories: HashMap<String, i64>,
    pub recent_locations: u64,
    pub last_updated: String,
}
