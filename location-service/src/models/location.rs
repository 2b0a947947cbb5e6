use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A point-of-interest marker as persisted in the `locations` collection.
///
/// `id` is the public lookup key; MongoDB's own `_id` is never exposed and
/// is ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    pub user_id: Option<String>,
}

impl Location {
    pub fn new(
        name: String,
        latitude: f64,
        longitude: f64,
        description: Option<String>,
        category: Option<String>,
        user_id: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            latitude,
            longitude,
            description,
            category,
            // BSON datetimes carry millisecond precision, so truncate up
            // front and the create response matches every later read.
            created_at: mongodb::bson::DateTime::now().to_chrono(),
            user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn new_assigns_a_unique_uuid() {
        let a = Location::new("A".to_string(), 1.0, 2.0, None, None, None);
        let b = Location::new("B".to_string(), 1.0, 2.0, None, None, None);

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn new_truncates_created_at_to_milliseconds() {
        let location = Location::new("A".to_string(), 1.0, 2.0, None, None, None);

        assert_eq!(location.created_at.nanosecond() % 1_000_000, 0);
    }

    #[test]
    fn new_keeps_optional_fields_as_given() {
        let location = Location::new(
            "Test Location Paris".to_string(),
            48.8566,
            2.3522,
            Some("Test location in Paris for API testing".to_string()),
            Some("test".to_string()),
            Some("test_user_123".to_string()),
        );

        assert_eq!(location.name, "Test Location Paris");
        assert_eq!(location.latitude, 48.8566);
        assert_eq!(location.longitude, 2.3522);
        assert_eq!(location.category.as_deref(), Some("test"));
        assert_eq!(location.user_id.as_deref(), Some("test_user_123"));
    }

    #[test]
    fn deserialization_ignores_the_raw_object_id() {
        let doc = mongodb::bson::doc! {
            "_id": mongodb::bson::oid::ObjectId::new(),
            "id": "abc",
            "name": "Somewhere",
            "latitude": 1.5,
            "longitude": -3.25,
            "description": null,
            "category": "custom",
            "created_at": mongodb::bson::DateTime::now(),
            "user_id": null,
        };

        let location: Location = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(location.id, "abc");
        assert_eq!(location.category.as_deref(), Some("custom"));
        assert!(location.description.is_none());
    }
}
