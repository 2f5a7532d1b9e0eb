use serde::Deserialize;

/// `GET /v3/marketing/lists` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListsResponse {
    #[serde(default)]
    pub result: Vec<MarketingList>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarketingList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact_count: Option<u64>,
}

impl ListsResponse {
    /// Exact, case-sensitive name match
    pub fn find_by_name(&self, name: &str) -> Option<&MarketingList> {
        self.result.iter().find(|list| list.name == name)
    }
}
