use crate::GatewayError;

use optin_core::{ContactAction, CoreError};
use optin_sendgrid::SendGridError;

use axum::http::{Method, StatusCode, header};
use axum::response::IntoResponse;
use http_body_util::BodyExt;

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_method_not_allowed_returns_405_with_allow_header() {
    let response = GatewayError::method_not_allowed(Method::GET).into_response();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ALLOW], "POST");

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Method GET Not Allowed");
}

#[tokio::test]
async fn test_invalid_action_returns_400_with_fixed_message() {
    let core_err = "archive".parse::<ContactAction>().unwrap_err();
    let error: GatewayError = core_err.into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Invalid action");
}

#[tokio::test]
async fn test_bad_request_returns_400_with_message() {
    let response = GatewayError::bad_request("missing field `email`").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "missing field `email`");
}

#[tokio::test]
async fn test_upstream_error_returns_500_without_location() {
    let error: GatewayError = SendGridError::list_not_found("obscurity-users").into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await["error"],
        "Obscurity-users list not found"
    );
}

#[test]
fn test_json_error_converts_to_bad_request() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: GatewayError = json_err.into();

    match error {
        GatewayError::BadRequest { message, .. } => {
            assert!(message.starts_with("Invalid request body"));
        }
        _ => panic!("Expected BadRequest error"),
    }
}

#[test]
fn test_kind_uses_upstream_kind() {
    let error: GatewayError = SendGridError::contact_not_found().into();
    assert_eq!(error.kind(), "contact_not_found");

    let core_err = CoreError::InvalidAction {
        value: "archive".into(),
        location: error_location::ErrorLocation::from(std::panic::Location::caller()),
    };
    let error: GatewayError = core_err.into();
    assert_eq!(error.kind(), "invalid_action");
}
