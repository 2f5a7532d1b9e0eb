use crate::{ConfigError, ConfigErrorResult, DEFAULT_SENDGRID_BASE_URL, is_http_url};

use optin_core::DEFAULT_CONTACT_LIST_NAME;

use serde::Deserialize;

/// Marketing-contacts API settings used by the gateway
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct SendGridConfig {
    /// Bearer token for every outbound call
    pub api_key: Option<String>,
    pub base_url: String,
    /// Exact, case-sensitive name of the mirrored list
    pub list_name: String,
}

impl Default for SendGridConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: String::from(DEFAULT_SENDGRID_BASE_URL),
            list_name: String::from(DEFAULT_CONTACT_LIST_NAME),
        }
    }
}

impl SendGridConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.base_url) {
            return Err(ConfigError::sendgrid(format!(
                "sendgrid.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.list_name.is_empty() {
            return Err(ConfigError::sendgrid("sendgrid.list_name must not be empty"));
        }

        Ok(())
    }

    /// API key required by the gateway
    pub fn require_api_key(&self) -> ConfigErrorResult<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ConfigError::sendgrid(
                "sendgrid.api_key is required (set OPTIN_SENDGRID_API_KEY or SENDGRID_API_KEY)",
            )),
        }
    }
}

impl std::fmt::Debug for SendGridConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendGridConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("list_name", &self.list_name)
            .finish()
    }
}
