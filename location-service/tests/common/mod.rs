use location_service::config::LocationConfig;
use location_service::services::LocationDb;
use location_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub db: LocationDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");

        let db_name = format!("location_test_{}", Uuid::new_v4());

        let mut config = LocationConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the info endpoint
        let client = reqwest::Client::new();
        let info_url = format!("{}/api", address);
        for _ in 0..50 {
            if client.get(&info_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            db,
            db_name,
        }
    }

    /// Cleanup test resources (the per-test database).
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
