//! Health Check API Tests

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body["status"], "healthy");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body["status"], "alive");
}

/// The test app's pool points at a closed port.
#[tokio::test]
async fn test_readiness_probe_without_database() {
    let app = TestApp::new();

    let response = app.get("/health/ready").await;

    assert_eq!(response.status, 503);
    assert_eq!(response.body["status"], "unhealthy");
    assert_eq!(response.body["database"]["status"], "unhealthy");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = TestApp::new();

    let response = app.get("/unregisteredRoute").await;

    assert_eq!(response.status, 404);
    assert_eq!(response.body["status"], "fail");
    assert!(response.body["message"].is_string());
}
