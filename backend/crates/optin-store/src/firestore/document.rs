//! Firestore REST document encoding for profile records.
//!
//! Values arrive as single-key objects (`{"booleanValue": true}`); only the
//! kinds a profile uses are decoded, anything else reads as absent.

use optin_core::{ProfileRecord, ProfileUpdate};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub(crate) const FIELD_IS_OPTED_IN: &str = "isOptedIn";
pub(crate) const FIELD_EMAIL: &str = "email";
pub(crate) const FIELD_DISPLAY_NAME: &str = "displayName";
pub(crate) const FIELD_USERNAME: &str = "username";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirestoreValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean_value: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
}

impl FirestoreValue {
    pub fn boolean(value: bool) -> Self {
        Self {
            boolean_value: Some(value),
            ..Self::default()
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self {
            string_value: Some(value.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FirestoreDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, FirestoreValue>,
}

impl FirestoreDocument {
    /// Decode a fetched document into the record for `id`.
    pub fn into_record(self, id: &str) -> ProfileRecord {
        let string_field = |key: &str| {
            self.fields
                .get(key)
                .and_then(|value| value.string_value.clone())
        };

        ProfileRecord {
            id: id.to_string(),
            is_opted_in: self
                .fields
                .get(FIELD_IS_OPTED_IN)
                .and_then(|value| value.boolean_value)
                .unwrap_or(false),
            email: string_field(FIELD_EMAIL),
            display_name: string_field(FIELD_DISPLAY_NAME),
            username: string_field(FIELD_USERNAME),
        }
    }

    /// Encode the present fields of an update, with the matching field mask.
    pub fn from_update(update: &ProfileUpdate) -> (Self, Vec<&'static str>) {
        let mut fields = BTreeMap::new();

        if let Some(opted_in) = update.is_opted_in {
            fields.insert(
                FIELD_IS_OPTED_IN.to_string(),
                FirestoreValue::boolean(opted_in),
            );
        }
        if let Some(ref email) = update.email {
            fields.insert(FIELD_EMAIL.to_string(), FirestoreValue::string(email));
        }
        if let Some(ref display_name) = update.display_name {
            fields.insert(
                FIELD_DISPLAY_NAME.to_string(),
                FirestoreValue::string(display_name),
            );
        }
        if let Some(ref username) = update.username {
            fields.insert(FIELD_USERNAME.to_string(), FirestoreValue::string(username));
        }

        let mask = [
            FIELD_IS_OPTED_IN,
            FIELD_EMAIL,
            FIELD_DISPLAY_NAME,
            FIELD_USERNAME,
        ]
        .into_iter()
        .filter(|field| fields.contains_key(*field))
        .collect();

        (Self { name: None, fields }, mask)
    }
}
