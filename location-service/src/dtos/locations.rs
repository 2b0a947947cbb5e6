use crate::models::Location;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

fn default_category() -> Option<String> {
    Some("custom".to_string())
}

fn default_list_limit() -> i64 {
    100
}

fn default_search_limit() -> i64 {
    10
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLocationRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
    /// Defaults to "custom" when the field is absent. An explicit JSON null
    /// stores the marker without a category.
    #[serde(default = "default_category")]
    pub category: Option<String>,
    pub user_id: Option<String>,
}

/// Partial update; only `name`, `description` and `category` are mutable.
/// Unknown fields (including `latitude` and `user_id`) are ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateLocationRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl UpdateLocationRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.category.is_none()
    }

    /// The `$set` payload for the fields actually present in the request.
    pub fn update_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(name) = &self.name {
            set.insert("name", name.as_str());
        }
        if let Some(description) = &self.description {
            set.insert("description", description.as_str());
        }
        if let Some(category) = &self.category {
            set.insert("category", category.as_str());
        }
        set
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchLocationsRequest {
    pub query: String,
    #[serde(default = "default_search_limit")]
    pub limit: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListLocationsParams {
    #[serde(default = "default_list_limit")]
    pub limit: i64,
    pub category: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LocationResponse {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_at: String,
    pub user_id: Option<String>,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: location.name,
            latitude: location.latitude,
            longitude: location.longitude,
            description: location.description,
            category: location.category,
            created_at: location.created_at.to_rfc3339(),
            user_id: location.user_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteLocationResponse {
    pub message: String,
    pub id: String,
}
