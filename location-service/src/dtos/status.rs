use crate::models::StatusCheck;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStatusCheckRequest {
    pub client_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusCheckResponse {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}

impl From<StatusCheck> for StatusCheckResponse {
    fn from(check: StatusCheck) -> Self {
        Self {
            id: check.id,
            client_name: check.client_name,
            timestamp: check.timestamp.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_requires_client_name() {
        let result = serde_json::from_value::<CreateStatusCheckRequest>(json!({}));
        assert!(result.is_err());
    }
}
