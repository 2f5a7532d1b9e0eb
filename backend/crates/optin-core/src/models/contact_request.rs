use crate::{ContactAction, ContactName};

use serde::{Deserialize, Serialize};

/// Request body accepted by the contact-list gateway
///
/// `action` stays a raw string on the wire so the gateway can answer unknown
/// values with its own error body instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub email: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl ContactRequest {
    pub fn new(
        email: impl Into<String>,
        action: ContactAction,
        name: ContactName,
        username: Option<String>,
    ) -> Self {
        Self {
            email: email.into(),
            action: action.as_str().to_string(),
            first_name: Some(name.first_name),
            last_name: Some(name.last_name),
            username,
        }
    }

    /// Email as stored in the contact list
    pub fn normalized_email(&self) -> String {
        self.email.to_lowercase()
    }
}
