mod common;

use movies_api::application::services::MovieServiceOptions;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server(
        common::InMemoryCatalog::new(),
        MovieServiceOptions::default(),
    );

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let server = common::create_test_server(
        common::InMemoryCatalog::unavailable(),
        MovieServiceOptions::default(),
    );

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
