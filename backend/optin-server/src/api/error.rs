//! Gateway error types
//!
//! Every failure renders as `{"error": "<message>"}` with the status the
//! browser-facing contract expects. Source locations are logged, never sent.

use optin_core::CoreError;
use optin_sendgrid::SendGridError;

use std::panic::Location;

use axum::{
    Json,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct GatewayErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Anything but POST (405)
    #[error("Method {method} Not Allowed {location}")]
    MethodNotAllowed {
        method: Method,
        location: ErrorLocation,
    },

    /// Body is not a valid contact request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Action is neither "add" nor "remove" (400)
    #[error("Invalid action: {value} {location}")]
    InvalidAction {
        value: String,
        location: ErrorLocation,
    },

    /// SendGrid call failed or returned nothing usable (500)
    #[error("Upstream error: {source}")]
    Upstream {
        #[source]
        source: SendGridError,
    },
}

impl GatewayError {
    #[track_caller]
    pub fn method_not_allowed(method: Method) -> Self {
        GatewayError::MethodNotAllowed {
            method,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        GatewayError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Metric label for this failure
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::MethodNotAllowed { .. } => "method_not_allowed",
            GatewayError::BadRequest { .. } => "bad_request",
            GatewayError::InvalidAction { .. } => "invalid_action",
            GatewayError::Upstream { source } => source.kind(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        match self {
            GatewayError::MethodNotAllowed { method, .. } => {
                let mut response = (
                    StatusCode::METHOD_NOT_ALLOWED,
                    format!("Method {} Not Allowed", method),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(header::ALLOW, HeaderValue::from_static("POST"));
                response
            }
            GatewayError::BadRequest { message, .. } => {
                (StatusCode::BAD_REQUEST, Json(GatewayErrorResponse { error: message }))
                    .into_response()
            }
            GatewayError::InvalidAction { .. } => (
                StatusCode::BAD_REQUEST,
                Json(GatewayErrorResponse {
                    error: "Invalid action".to_string(),
                }),
            )
                .into_response(),
            GatewayError::Upstream { source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GatewayErrorResponse {
                    error: source.message(),
                }),
            )
                .into_response(),
        }
    }
}

impl From<SendGridError> for GatewayError {
    fn from(source: SendGridError) -> Self {
        GatewayError::Upstream { source }
    }
}

impl From<CoreError> for GatewayError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidAction { value, .. } => GatewayError::InvalidAction {
                value,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    #[track_caller]
    fn from(e: serde_json::Error) -> Self {
        GatewayError::bad_request(format!("Invalid request body: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
