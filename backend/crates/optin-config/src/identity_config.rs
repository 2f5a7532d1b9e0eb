use crate::{ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_AUTH_BASE_URL, is_http_url};

use serde::Deserialize;

/// Identity provider and document store project settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub auth_base_url: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            auth_domain: None,
            project_id: None,
            auth_base_url: String::from(DEFAULT_IDENTITY_AUTH_BASE_URL),
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.auth_base_url) {
            return Err(ConfigError::identity(format!(
                "identity.auth_base_url must be an http(s) URL, got '{}'",
                self.auth_base_url
            )));
        }

        Ok(())
    }

    pub fn require_api_key(&self) -> ConfigErrorResult<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ConfigError::identity(
                "identity.api_key is required (set OPTIN_IDENTITY_API_KEY)",
            )),
        }
    }

    pub fn require_project_id(&self) -> ConfigErrorResult<&str> {
        match self.project_id.as_deref() {
            Some(id) if !id.trim().is_empty() => Ok(id),
            _ => Err(ConfigError::identity(
                "identity.project_id is required (set OPTIN_IDENTITY_PROJECT_ID)",
            )),
        }
    }
}

impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("auth_domain", &self.auth_domain)
            .field("project_id", &self.project_id)
            .field("auth_base_url", &self.auth_base_url)
            .finish()
    }
}
