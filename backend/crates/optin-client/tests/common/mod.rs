#![allow(dead_code)]

//! Test infrastructure for optin-client integration tests

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const API_KEY: &str = "test-web-api-key";
pub const SIGN_IN_PATH: &str = "/v1/accounts:signInWithPassword";

/// Accept one email/password pair, reject everything else
pub async fn mount_sign_in(mock_server: &MockServer, email: &str, password: &str, uid: &str) {
    Mock::given(method("POST"))
        .and(path(SIGN_IN_PATH))
        .and(query_param("key", API_KEY))
        .and(wiremock::matchers::body_partial_json(json!({
            "email": email,
            "password": password,
            "returnSecureToken": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": uid,
            "email": email,
            "displayName": "Ada Lovelace",
            "idToken": "id-token-123",
            "registered": true,
            "refreshToken": "refresh-token",
            "expiresIn": "3600"
        })))
        .with_priority(1)
        .mount(mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(SIGN_IN_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "INVALID_LOGIN_CREDENTIALS",
                "errors": [{ "message": "INVALID_LOGIN_CREDENTIALS", "domain": "global", "reason": "invalid" }]
            }
        })))
        .with_priority(10)
        .mount(mock_server)
        .await;
}
