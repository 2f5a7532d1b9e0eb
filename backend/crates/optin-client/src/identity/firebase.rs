//! Identity Toolkit password sign-in.

use crate::{IdentityError, IdentityProvider, IdentityResult, SessionPublisher, SessionSubscription};

use optin_core::UserIdentity;

use async_trait::async_trait;
use log::{info, warn};
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use url::Url;

const SIGN_IN_PATH: &str = "/v1/accounts:signInWithPassword";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
}

impl SignInResponse {
    fn into_identity(self) -> UserIdentity {
        UserIdentity {
            id: self.local_id,
            email: self.email.filter(|e| !e.is_empty()),
            display_name: self.display_name.filter(|n| !n.is_empty()),
            username: None,
            id_token: self.id_token,
        }
    }
}

pub struct FirebaseIdentityProvider {
    pub base_url: String,
    api_key: String,
    client: ReqwestClient,
    session: SessionPublisher,
}

impl FirebaseIdentityProvider {
    /// # Arguments
    /// * `base_url` - Identity Toolkit root (e.g., "https://identitytoolkit.googleapis.com")
    /// * `api_key` - Web API key, sent as the `key` query parameter
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: ReqwestClient::new(),
            session: SessionPublisher::new(),
        }
    }

    pub fn session(&self) -> &SessionPublisher {
        &self.session
    }

    async fn request_sign_in(&self, email: &str, password: &str) -> IdentityResult<UserIdentity> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, SIGN_IN_PATH))
            .map_err(|e| IdentityError::invalid_credentials(e.to_string()))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let body = SignInRequest {
            email,
            password,
            return_secure_token: true,
        };

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| IdentityError::invalid_credentials(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(IdentityError::invalid_credentials(format!(
                "status {}: {}",
                status.as_u16(),
                text
            )));
        }

        let parsed: SignInResponse = response
            .json()
            .await
            .map_err(|e| IdentityError::invalid_credentials(e.to_string()))?;

        Ok(parsed.into_identity())
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<UserIdentity> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(IdentityError::invalid_credentials(
                "email and password are required",
            ));
        }

        match self.request_sign_in(email, password).await {
            Ok(identity) => {
                info!("Signed in as {}", identity.id);
                self.session.publish(Some(identity.clone()));
                Ok(identity)
            }
            Err(e) => {
                warn!("{}", e);
                Err(e)
            }
        }
    }

    fn sign_out(&self) {
        self.session.publish(None);
    }

    fn subscribe(&self) -> SessionSubscription {
        self.session.subscribe()
    }
}
