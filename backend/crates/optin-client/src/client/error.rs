use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors raised by the client application
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Gateway answered with a non-success status
    #[error("Gateway error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid gateway URL: {message} {location}")]
    Url {
        message: String,
        location: ErrorLocation,
    },

    #[error("Terminal IO error: {source} {location}")]
    Io {
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(#[from] optin_config::ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] optin_store::StoreError),
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn url(message: impl Into<String>) -> Self {
        ClientError::Url {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<std::io::Error> for ClientError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        ClientError::Io {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
