use crate::models::{Location, StatusCheck};
use chrono::{DateTime, NaiveTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime as BsonDateTime, Document},
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument},
    Client as MongoClient, Collection, Database, IndexModel,
};
use serde::Deserialize;
use service_core::error::AppError;
use std::collections::HashMap;

/// Cap on the legacy status-check listing, matching the original API.
const STATUS_CHECK_LIST_LIMIT: i64 = 1000;

/// One `$group` row of the per-category aggregation.
#[derive(Debug, Deserialize)]
struct CategoryCount {
    #[serde(rename = "_id")]
    category: Option<String>,
    count: i64,
}

#[derive(Clone)]
pub struct LocationDb {
    client: MongoClient,
    db: Database,
}

impl LocationDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for location-service");

        // `id` is the sole lookup key and must never be reused.
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .name("id_idx".to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        self.locations()
            .create_index(id_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create id index: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        tracing::info!("Successfully created all MongoDB indexes");
        Ok(())
    }

    /// Pings the store; the returned error is the health endpoint's 503 body.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::ServiceUnavailable(format!("Database connection failed: {}", e))
            })?;
        Ok(())
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn locations(&self) -> Collection<Location> {
        self.db.collection("locations")
    }

    pub fn status_checks(&self) -> Collection<StatusCheck> {
        self.db.collection("status_checks")
    }

    pub async fn insert_location(&self, location: &Location) -> Result<(), AppError> {
        self.locations()
            .insert_one(location, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert location: {}", e);
                AppError::DatabaseError(anyhow::anyhow!("Error creating location: {}", e))
            })?;
        Ok(())
    }

    pub async fn list_locations(
        &self,
        limit: i64,
        category: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<Vec<Location>, AppError> {
        let find_options = FindOptions::builder().limit(limit).build();

        let cursor = self
            .locations()
            .find(list_filter(category, user_id), find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list locations: {}", e);
                AppError::DatabaseError(anyhow::anyhow!("Error fetching locations: {}", e))
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect locations: {}", e);
            AppError::DatabaseError(anyhow::anyhow!("Error fetching locations: {}", e))
        })
    }

    pub async fn find_location(&self, location_id: &str) -> Result<Option<Location>, AppError> {
        self.locations()
            .find_one(doc! { "id": location_id }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find location {}: {}", location_id, e);
                AppError::DatabaseError(anyhow::anyhow!("Error fetching location: {}", e))
            })
    }

    /// Applies `$set` and returns the post-update document in one round trip.
    /// `None` means no document matched.
    pub async fn update_location(
        &self,
        location_id: &str,
        set: Document,
    ) -> Result<Option<Location>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.locations()
            .find_one_and_update(doc! { "id": location_id }, doc! { "$set": set }, options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update location {}: {}", location_id, e);
                AppError::DatabaseError(anyhow::anyhow!("Error updating location: {}", e))
            })
    }

    /// Returns whether a document was actually removed.
    pub async fn delete_location(&self, location_id: &str) -> Result<bool, AppError> {
        let result = self
            .locations()
            .delete_one(doc! { "id": location_id }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete location {}: {}", location_id, e);
                AppError::DatabaseError(anyhow::anyhow!("Error deleting location: {}", e))
            })?;
        Ok(result.deleted_count > 0)
    }

    pub async fn search_locations(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<Location>, AppError> {
        let find_options = FindOptions::builder().limit(limit).build();

        let cursor = self
            .locations()
            .find(search_filter(query), find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to search locations: {}", e);
                AppError::DatabaseError(anyhow::anyhow!("Error searching locations: {}", e))
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect search results: {}", e);
            AppError::DatabaseError(anyhow::anyhow!("Error searching locations: {}", e))
        })
    }

    pub async fn count_locations(&self) -> Result<u64, AppError> {
        self.locations()
            .count_documents(doc! {}, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count locations: {}", e);
                AppError::DatabaseError(anyhow::anyhow!("Error fetching stats: {}", e))
            })
    }

    /// Groups markers by category. Markers stored without a category are
    /// reported under "uncategorized".
    pub async fn count_by_category(&self) -> Result<HashMap<String, i64>, AppError> {
        let pipeline = vec![doc! {
            "$group": { "_id": "$category", "count": { "$sum": 1 } }
        }];

        let mut cursor = self.locations().aggregate(pipeline, None).await.map_err(|e| {
            tracing::error!("Failed to aggregate categories: {}", e);
            AppError::DatabaseError(anyhow::anyhow!("Error fetching stats: {}", e))
        })?;

        let mut categories = HashMap::new();
        while let Some(row) = cursor.try_next().await.map_err(|e| {
            tracing::error!("Failed to read category aggregation: {}", e);
            AppError::DatabaseError(anyhow::anyhow!("Error fetching stats: {}", e))
        })? {
            let group: CategoryCount = mongodb::bson::from_document(row).map_err(|e| {
                tracing::error!("Failed to decode category aggregation: {}", e);
                AppError::DatabaseError(anyhow::anyhow!("Error fetching stats: {}", e))
            })?;

            let key = group.category.unwrap_or_else(|| "uncategorized".to_string());
            *categories.entry(key).or_insert(0) += group.count;
        }

        Ok(categories)
    }

    /// Markers created since the current UTC day's midnight.
    pub async fn count_recent_locations(&self) -> Result<u64, AppError> {
        let since = BsonDateTime::from_chrono(start_of_utc_day(Utc::now()));

        self.locations()
            .count_documents(doc! { "created_at": { "$gte": since } }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count recent locations: {}", e);
                AppError::DatabaseError(anyhow::anyhow!("Error fetching stats: {}", e))
            })
    }

    pub async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError> {
        self.status_checks()
            .insert_one(check, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert status check: {}", e);
                AppError::DatabaseError(anyhow::anyhow!("Error creating status check: {}", e))
            })?;
        Ok(())
    }

    pub async fn list_status_checks(&self) -> Result<Vec<StatusCheck>, AppError> {
        let find_options = FindOptions::builder().limit(STATUS_CHECK_LIST_LIMIT).build();

        let cursor = self
            .status_checks()
            .find(None, find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list status checks: {}", e);
                AppError::DatabaseError(anyhow::anyhow!("Error fetching status checks: {}", e))
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect status checks: {}", e);
            AppError::DatabaseError(anyhow::anyhow!("Error fetching status checks: {}", e))
        })
    }
}

fn list_filter(category: Option<&str>, user_id: Option<&str>) -> Document {
    let mut filter = doc! {};
    if let Some(category) = category {
        filter.insert("category", category);
    }
    if let Some(user_id) = user_id {
        filter.insert("user_id", user_id);
    }
    filter
}

/// Case-insensitive substring match across `name` and `description`. The
/// input is escaped so regex metacharacters match literally.
fn search_filter(query: &str) -> Document {
    let pattern = regex::escape(query);
    doc! {
        "$or": [
            { "name": { "$regex": pattern.as_str(), "$options": "i" } },
            { "description": { "$regex": pattern.as_str(), "$options": "i" } },
        ]
    }
}

fn start_of_utc_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}
