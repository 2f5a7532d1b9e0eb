use crate::{ClientError, ClientResult};

use optin_core::ContactRequest;

use log::debug;
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use url::Url;

const GATEWAY_PATH: &str = "/api/sendgrid";

/// HTTP client for the contact-list gateway
#[derive(Clone)]
pub struct GatewayClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl GatewayClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Gateway server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// POST /api/sendgrid
    ///
    /// Returns the upstream body on success. A non-success status becomes
    /// `ClientError::Api` carrying the gateway's `error` message.
    pub async fn send(&self, request: &ContactRequest) -> ClientResult<Value> {
        let url = Url::parse(&format!("{}{}", self.base_url, GATEWAY_PATH))
            .map_err(|e| ClientError::url(e.to_string()))?;

        let response = self.client.post(url).json(request).send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or(text);
            return Err(ClientError::api(status.as_u16(), message));
        }

        debug!("Gateway responded with status {}", status);
        Ok(body)
    }
}
