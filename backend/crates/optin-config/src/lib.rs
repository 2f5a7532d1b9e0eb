mod client_config;
mod config;
mod error;
mod identity_config;
mod log_level;
mod logging_config;
mod sendgrid_config;
mod server_config;
mod store_config;

#[cfg(test)]
mod tests;

pub use client_config::ClientConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use sendgrid_config::SendGridConfig;
pub use server_config::ServerConfig;
pub use store_config::{StoreBackend, StoreConfig};

const CONFIG_DIR_ENV: &str = "OPTIN_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".optin";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_SENDGRID_BASE_URL: &str = "https://api.sendgrid.com";
const DEFAULT_IDENTITY_AUTH_BASE_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com";
const DEFAULT_STORE_PATH: &str = "profiles.db";
const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:8000";

/// Base URLs must be absolute http(s) URLs
fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
