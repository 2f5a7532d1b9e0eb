#![allow(dead_code)]

//! Test infrastructure for optin-server gateway tests

use optin_sendgrid::SendGridClient;
use optin_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const API_KEY: &str = "SG.test-key";
pub const LIST_NAME: &str = "obscurity-users";
pub const LIST_ID: &str = "list-obscurity";

/// Router wired to a SendGrid mock server
pub fn create_test_router(mock_server: &MockServer) -> Router {
    let client = SendGridClient::new(&mock_server.uri(), API_KEY);
    build_router(AppState::new(client, LIST_NAME))
}

/// Mount the lists endpoint, with or without the configured list
pub async fn mount_lists(mock_server: &MockServer, include_list: bool) {
    let mut lists = vec![json!({ "id": "list-newsletter", "name": "newsletter" })];
    if include_list {
        lists.push(json!({ "id": LIST_ID, "name": LIST_NAME }));
    }

    Mock::given(method("GET"))
        .and(path("/v3/marketing/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": lists })))
        .mount(mock_server)
        .await;
}

/// POST a raw body to the gateway
pub async fn post_contact(app: Router, body: impl Into<Body>) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/sendgrid")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// POST a JSON body to the gateway
pub async fn post_json(app: Router, body: Value) -> Response<Body> {
    post_contact(app, body.to_string()).await
}

pub async fn json_body(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
