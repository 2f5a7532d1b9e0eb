use serde::Deserialize;

/// `POST /v3/marketing/contacts/search` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub result: Vec<SearchContact>,
    #[serde(default)]
    pub contact_count: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchContact {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl SearchResponse {
    /// Id of the first matching contact, if it has one
    pub fn first_contact_id(&self) -> Option<&str> {
        self.result
            .first()
            .and_then(|contact| contact.id.as_deref())
            .filter(|id| !id.is_empty())
    }
}
