use crate::ContactName;

use serde::{Deserialize, Serialize};

/// Per-identity profile document
///
/// The contact fields are copied from the identity when the account is
/// created; the opt-in flag is the only field this application mutates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: String,
    #[serde(default)]
    pub is_opted_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl ProfileRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn contact_name(&self) -> ContactName {
        ContactName::from_display_name(self.display_name.as_deref().unwrap_or_default())
    }
}
