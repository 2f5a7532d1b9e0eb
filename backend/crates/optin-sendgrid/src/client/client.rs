use crate::{
    ContactUpsert, ListsResponse, MarketingList, SearchResponse, SendGridError,
    SendGridResult, UpsertContactsRequest,
};

use log::{debug, error};
use reqwest::{Client as ReqwestClient, Method, Response};
use serde_json::{Value, json};
use url::Url;

/// HTTP client for the SendGrid Marketing Contacts API
#[derive(Clone)]
pub struct SendGridClient {
    pub base_url: String,
    api_key: String,
    client: ReqwestClient,
}

impl SendGridClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://api.sendgrid.com")
    /// * `api_key` - Bearer token sent with every request
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn url(&self, path: &str) -> SendGridResult<Url> {
        Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| SendGridError::url(e.to_string()))
    }

    /// Build an authenticated request
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.client.request(method, url).bearer_auth(&self.api_key)
    }

    /// Fail on non-success status, logging the upstream body
    async fn ensure_success(
        response: Response,
        operation: &'static str,
    ) -> SendGridResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!("SendGrid responded with error ({}): {}", operation, body);
        Err(SendGridError::status(operation, status.as_u16()))
    }

    /// Read a JSON body; empty bodies become `null`
    async fn json_body(response: Response, operation: &'static str) -> SendGridResult<Value> {
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| SendGridError::decode(operation, e))
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// GET /v3/marketing/lists
    pub async fn list_lists(&self) -> SendGridResult<ListsResponse> {
        let url = self.url("/v3/marketing/lists")?;
        let response = self.request(Method::GET, url).send().await?;
        let response = Self::ensure_success(response, "Failed to fetch lists").await?;

        Ok(response.json().await?)
    }

    /// Resolve a list by exact name
    pub async fn find_list(&self, name: &str) -> SendGridResult<MarketingList> {
        let lists = self.list_lists().await?;

        lists
            .find_by_name(name)
            .cloned()
            .ok_or_else(|| SendGridError::list_not_found(name))
    }

    /// DELETE /v3/marketing/lists/{list_id}/contacts?contact_ids={contact_id}
    pub async fn remove_from_list(&self, list_id: &str, contact_id: &str) -> SendGridResult<Value> {
        let mut url = self.url(&format!("/v3/marketing/lists/{}/contacts", list_id))?;
        url.query_pairs_mut().append_pair("contact_ids", contact_id);

        let response = self.request(Method::DELETE, url).send().await?;
        let response =
            Self::ensure_success(response, "Failed to remove from SendGrid list").await?;

        debug!("Removed contact {} from list {}", contact_id, list_id);
        Self::json_body(response, "Failed to remove from SendGrid list").await
    }

    // =========================================================================
    // Contacts
    // =========================================================================

    /// PUT /v3/marketing/contacts
    ///
    /// Upsert is idempotent: sending the same contact twice is safe.
    pub async fn upsert_contact(
        &self,
        list_id: &str,
        contact: ContactUpsert,
    ) -> SendGridResult<Value> {
        let body = UpsertContactsRequest {
            list_ids: vec![list_id.to_string()],
            contacts: vec![contact],
        };

        let url = self.url("/v3/marketing/contacts")?;
        let response = self.request(Method::PUT, url).json(&body).send().await?;
        let response =
            Self::ensure_success(response, "Failed to add to SendGrid contact list").await?;

        Self::json_body(response, "Failed to add to SendGrid contact list").await
    }

    /// POST /v3/marketing/contacts/search by exact (lowercased) email
    pub async fn search_by_email(&self, email: &str) -> SendGridResult<SearchResponse> {
        let query = format!("email = '{}'", escape_query_literal(&email.to_lowercase()));

        let url = self.url("/v3/marketing/contacts/search")?;
        let response = self
            .request(Method::POST, url)
            .json(&json!({ "query": query }))
            .send()
            .await?;
        let response = Self::ensure_success(response, "Failed to search for contact").await?;

        let search: SearchResponse = response.json().await?;
        debug!("Contact search matched {} result(s)", search.result.len());
        Ok(search)
    }

    /// Id of the contact with this email, or `ContactNotFound`
    pub async fn find_contact_id(&self, email: &str) -> SendGridResult<String> {
        let search = self.search_by_email(email).await?;

        search
            .first_contact_id()
            .map(String::from)
            .ok_or_else(SendGridError::contact_not_found)
    }

    /// DELETE /v3/marketing/contacts?ids={contact_id}
    ///
    /// Deletes the contact entirely, dropping every list membership it has.
    pub async fn delete_contact(&self, contact_id: &str) -> SendGridResult<Value> {
        let mut url = self.url("/v3/marketing/contacts")?;
        url.query_pairs_mut().append_pair("ids", contact_id);

        let response = self.request(Method::DELETE, url).send().await?;
        let response =
            Self::ensure_success(response, "Failed to remove from SendGrid all contacts").await?;

        Self::json_body(response, "Failed to remove from SendGrid all contacts").await
    }
}

/// Single quotes delimit SGQL string literals
pub(crate) fn escape_query_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
