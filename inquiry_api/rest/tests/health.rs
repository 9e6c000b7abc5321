use inquiry_core_contact_contracts::MockContactFeatureService;
use inquiry_core_health_contracts::{HealthStatus, MockHealthFeatureService};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn healthy() {
    // Arrange
    let health = MockHealthFeatureService::new().with_get_status(HealthStatus {
        database: true,
        email: true,
    });
    let base = common::serve(health, MockContactFeatureService::new()).await;

    // Act
    let response = reqwest::get(format!("{base}/health")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"http": true, "database": true, "email": true})
    );
}

#[tokio::test]
async fn unhealthy() {
    // Arrange
    let health = MockHealthFeatureService::new().with_get_status(HealthStatus {
        database: true,
        email: false,
    });
    let base = common::serve(health, MockContactFeatureService::new()).await;

    // Act
    let response = reqwest::get(format!("{base}/health")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"http": true, "database": true, "email": false})
    );
}
