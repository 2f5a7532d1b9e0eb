use serde::Serialize;

/// `PUT /v3/marketing/contacts` body
#[derive(Debug, Clone, Serialize)]
pub struct UpsertContactsRequest {
    pub list_ids: Vec<String>,
    pub contacts: Vec<ContactUpsert>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactUpsert {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
}

impl ContactUpsert {
    /// Contact keyed by the lowercased email
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_lowercase(),
            first_name: None,
            last_name: None,
            unique_name: None,
        }
    }
}
