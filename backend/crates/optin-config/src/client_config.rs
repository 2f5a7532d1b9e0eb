use crate::{ConfigError, ConfigErrorResult, DEFAULT_GATEWAY_URL, is_http_url};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the contact-list gateway server
    pub gateway_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            gateway_url: String::from(DEFAULT_GATEWAY_URL),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.gateway_url) {
            return Err(ConfigError::client(format!(
                "client.gateway_url must be an http(s) URL, got '{}'",
                self.gateway_url
            )));
        }

        Ok(())
    }
}
