use crate::ProfileRecord;

use serde::{Deserialize, Serialize};

/// Authenticated principal issued by the identity provider
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Bearer token for the profile store, never logged
    #[serde(default, skip_serializing)]
    pub id_token: Option<String>,
}

impl UserIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Whether this identity can key a profile record
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// Profile record seeded from this identity (not opted in)
    pub fn to_profile_record(&self) -> ProfileRecord {
        ProfileRecord {
            id: self.id.clone(),
            is_opted_in: false,
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            username: self.username.clone(),
        }
    }
}

impl std::fmt::Debug for UserIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserIdentity")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("username", &self.username)
            .field("id_token", &self.id_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
