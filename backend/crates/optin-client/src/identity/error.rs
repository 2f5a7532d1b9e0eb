use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Shown to the user for every sign-in failure
pub const LOGIN_ERROR_MESSAGE: &str =
    "There was an issue with logging in. Please check your credentials and try again.";

#[derive(Error, Debug)]
pub enum IdentityError {
    /// Any sign-in failure; `reason` is for logs only
    #[error("Sign-in failed: {reason} {location}")]
    InvalidCredentials {
        reason: String,
        location: ErrorLocation,
    },
}

impl IdentityError {
    #[track_caller]
    pub fn invalid_credentials(reason: impl Into<String>) -> Self {
        IdentityError::InvalidCredentials {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Generic text for the login view; never reveals which part failed
    pub fn user_message(&self) -> &'static str {
        match self {
            IdentityError::InvalidCredentials { .. } => LOGIN_ERROR_MESSAGE,
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
