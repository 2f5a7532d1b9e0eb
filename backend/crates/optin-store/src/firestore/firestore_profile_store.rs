//! Profile store backed by the Firestore REST API.
//!
//! Records live in the `users` collection keyed by identity id. Merge is a
//! PATCH with an explicit `updateMask`, which creates the document when it is
//! missing and leaves unmasked fields untouched.

use crate::firestore::document::FirestoreDocument;
use crate::profile_store::validate_id;
use crate::{ProfileStore, Result as StoreResult, StoreError};

use optin_core::{ProfileRecord, ProfileUpdate};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use url::Url;

const USERS_COLLECTION: &str = "users";

pub struct FirestoreProfileStore {
    base_url: String,
    project_id: String,
    api_key: Option<String>,
    id_token: Option<String>,
    client: ReqwestClient,
}

impl FirestoreProfileStore {
    /// # Arguments
    /// * `base_url` - Firestore endpoint (e.g., "https://firestore.googleapis.com")
    /// * `project_id` - Project holding the `users` collection
    pub fn new(base_url: &str, project_id: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            api_key: None,
            id_token: None,
            client: ReqwestClient::new(),
        }
    }

    /// Send the web API key as the `key` query parameter
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Authenticate as the signed-in user
    pub fn with_id_token(mut self, id_token: impl Into<String>) -> Self {
        self.id_token = Some(id_token.into());
        self
    }

    fn document_url(&self, id: &str) -> StoreResult<Url> {
        validate_id(id)?;

        let raw = format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}/{}",
            self.base_url, self.project_id, USERS_COLLECTION, id
        );
        let mut url = Url::parse(&raw).map_err(|e| StoreError::url(e.to_string()))?;

        if let Some(ref key) = self.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }

        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let req = self.client.request(method, url);

        match self.id_token {
            Some(ref token) => req.bearer_auth(token),
            None => req,
        }
    }
}

#[async_trait]
impl ProfileStore for FirestoreProfileStore {
    async fn get(&self, id: &str) -> StoreResult<Option<ProfileRecord>> {
        let url = self.document_url(id)?;
        let response = self.request(Method::GET, url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!("No profile document for {}", id);
                Ok(None)
            }
            status if status.is_success() => {
                let document: FirestoreDocument = response.json().await?;
                Ok(Some(document.into_record(id)))
            }
            status => Err(StoreError::status("Fetch profile document", status.as_u16())),
        }
    }

    async fn merge(&self, id: &str, update: &ProfileUpdate) -> StoreResult<()> {
        let (document, mask) = FirestoreDocument::from_update(update);
        if mask.is_empty() {
            return Ok(());
        }

        let mut url = self.document_url(id)?;
        {
            let mut pairs = url.query_pairs_mut();
            for field in &mask {
                pairs.append_pair("updateMask.fieldPaths", field);
            }
        }

        let response = self
            .request(Method::PATCH, url)
            .json(&document)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::status("Merge profile document", status.as_u16()));
        }

        debug!("Merged profile fields {:?} for {}", mask, id);
        Ok(())
    }
}
