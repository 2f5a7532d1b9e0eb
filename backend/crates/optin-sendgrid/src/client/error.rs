use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors from marketing-contacts API calls
#[derive(Error, Debug)]
pub enum SendGridError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status
    #[error("{operation}: {status} {location}")]
    Status {
        operation: &'static str,
        status: u16,
        location: ErrorLocation,
    },

    #[error("{} list not found {location}", capitalize(.list_name))]
    ListNotFound {
        list_name: String,
        location: ErrorLocation,
    },

    #[error("Contact not found in SendGrid {location}")]
    ContactNotFound { location: ErrorLocation },

    /// Success status but the body is not JSON
    #[error("{operation}: invalid response body: {message} {location}")]
    Decode {
        operation: &'static str,
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid SendGrid URL: {message} {location}")]
    Url {
        message: String,
        location: ErrorLocation,
    },
}

impl SendGridError {
    /// Message without the source location, safe to return to API callers
    pub fn message(&self) -> String {
        match self {
            SendGridError::Http { message, .. } => message.clone(),
            SendGridError::Status {
                operation, status, ..
            } => format!("{}: {}", operation, status),
            SendGridError::ListNotFound { list_name, .. } => {
                format!("{} list not found", capitalize(list_name))
            }
            SendGridError::ContactNotFound { .. } => "Contact not found in SendGrid".to_string(),
            SendGridError::Decode {
                operation, message, ..
            } => format!("{}: invalid response body: {}", operation, message),
            SendGridError::Url { message, .. } => message.clone(),
        }
    }

    /// Short machine-readable kind, used for metric names
    pub fn kind(&self) -> &'static str {
        match self {
            SendGridError::Http { .. } => "http",
            SendGridError::Status { .. } => "status",
            SendGridError::ListNotFound { .. } => "list_not_found",
            SendGridError::ContactNotFound { .. } => "contact_not_found",
            SendGridError::Decode { .. } => "decode",
            SendGridError::Url { .. } => "url",
        }
    }

    #[track_caller]
    pub fn status(operation: &'static str, status: u16) -> Self {
        SendGridError::Status {
            operation,
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn list_not_found(list_name: &str) -> Self {
        SendGridError::ListNotFound {
            list_name: list_name.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn contact_not_found() -> Self {
        SendGridError::ContactNotFound {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(operation: &'static str, source: serde_json::Error) -> Self {
        SendGridError::Decode {
            operation,
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn url(message: impl Into<String>) -> Self {
        SendGridError::Url {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for SendGridError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        SendGridError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, SendGridError>;
