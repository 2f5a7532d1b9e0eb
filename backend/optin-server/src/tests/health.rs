use crate::health::{health_check, liveness_check, readiness_check};

use axum::http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_health_reports_version() {
    let response = health_check().await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_probes_return_ok() {
    assert_eq!(liveness_check().await.status(), StatusCode::OK);
    assert_eq!(readiness_check().await.status(), StatusCode::OK);
}
