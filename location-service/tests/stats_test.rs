//! Statistics endpoint integration tests.

mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::json;

#[tokio::test]
#[ignore] // Requires MongoDB
async fn stats_on_an_empty_store_report_zeros() {
    // Arrange
    let app = TestApp::spawn().await;
    let client = Client::new();

    // Act
    let response = client
        .get(format!("{}/api/stats", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total_locations"], 0);
    assert_eq!(body["recent_locations"], 0);
    assert_eq!(
        body["categories"].as_object().expect("expected object").len(),
        0
    );
    assert!(body.get("last_updated").is_some());

    app.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires MongoDB
async fn stats_break_totals_down_by_category() {
    // Arrange
    let app = TestApp::spawn().await;
    let client = Client::new();

    for (name, category) in [
        ("Park A", json!("park")),
        ("Park B", json!("park")),
        ("Museum A", json!("museum")),
        ("Mystery Spot", serde_json::Value::Null),
    ] {
        let response = client
            .post(format!("{}/api/locations", app.address))
            .json(&json!({
                "name": name,
                "latitude": 1.0,
                "longitude": 2.0,
                "category": category
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), 200);
    }

    // Act
    let body: serde_json::Value = client
        .get(format!("{}/api/stats", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    // Assert
    assert_eq!(body["total_locations"], 4);
    assert_eq!(body["categories"]["park"], 2);
    assert_eq!(body["categories"]["museum"], 1);
    assert_eq!(body["categories"]["uncategorized"], 1);

    // Category counts always add back up to the total
    let sum: i64 = body["categories"]
        .as_object()
        .expect("expected object")
        .values()
        .map(|count| count.as_i64().expect("expected integer"))
        .sum();
    assert_eq!(sum, 4);

    // Everything was created just now, well past the UTC midnight boundary
    assert_eq!(body["recent_locations"], 4);

    app.cleanup().await;
}
