use crate::GatewayMetrics;

use optin_config::Config;
use optin_sendgrid::SendGridClient;

use std::sync::Arc;

/// Immutable state shared by every gateway request
#[derive(Clone)]
pub struct AppState {
    pub sendgrid: Arc<SendGridClient>,
    pub list_name: Arc<str>,
    pub metrics: GatewayMetrics,
}

impl AppState {
    pub fn new(sendgrid: SendGridClient, list_name: &str) -> Self {
        Self {
            sendgrid: Arc::new(sendgrid),
            list_name: Arc::from(list_name),
            metrics: GatewayMetrics::new(),
        }
    }

    /// Build from a validated config (`validate_gateway` guarantees the key)
    pub fn from_config(config: &Config) -> optin_config::ConfigErrorResult<Self> {
        let api_key = config.sendgrid.require_api_key()?;
        let client = SendGridClient::new(&config.sendgrid.base_url, api_key);
        Ok(Self::new(client, &config.sendgrid.list_name))
    }
}
