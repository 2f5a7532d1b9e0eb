use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ClientConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, IdentityConfig, LoggingConfig, SendGridConfig, ServerConfig, StoreBackend,
    StoreConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub sendgrid: SendGridConfig,
    pub identity: IdentityConfig,
    pub store: StoreConfig,
    pub client: ClientConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for OPTIN_CONFIG_DIR env var, else use ./.optin/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply OPTIN_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: OPTIN_CONFIG_DIR env var > ./.optin/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate settings shared by every binary.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.sendgrid.validate()?;
        self.identity.validate()?;
        self.store.validate()?;
        self.client.validate()?;

        if self.store.backend == StoreBackend::Firestore {
            self.identity.require_project_id()?;
        }

        Ok(())
    }

    /// Validate everything the gateway server needs to start.
    pub fn validate_gateway(&self) -> ConfigErrorResult<()> {
        self.validate()?;
        self.sendgrid.require_api_key()?;
        Ok(())
    }

    /// Validate everything the client app needs to start.
    pub fn validate_client(&self) -> ConfigErrorResult<()> {
        self.validate()?;
        self.identity.require_api_key()?;
        Ok(())
    }

    /// Absolute path of the SQLite profile store.
    pub fn store_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.store.path))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  sendgrid: {} list='{}' api_key={}",
            self.sendgrid.base_url,
            self.sendgrid.list_name,
            Self::presence(&self.sendgrid.api_key)
        );
        info!(
            "  identity: project={} domain={} api_key={}",
            self.identity.project_id.as_deref().unwrap_or("-"),
            self.identity.auth_domain.as_deref().unwrap_or("-"),
            Self::presence(&self.identity.api_key)
        );
        info!(
            "  store: {} (path: {})",
            self.store.backend.as_str(),
            self.store.path
        );
        info!("  client: gateway={}", self.client.gateway_url);
    }

    fn presence(secret: &Option<String>) -> &'static str {
        if secret.is_some() { "set" } else { "missing" }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("OPTIN_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("OPTIN_SERVER_PORT", &mut self.server.port);

        // Logging
        Self::apply_env_parse("OPTIN_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("OPTIN_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("OPTIN_LOG_FILE", &mut self.logging.file);

        // SendGrid (the bare SENDGRID_API_KEY is honoured as a fallback)
        Self::apply_env_option_string("SENDGRID_API_KEY", &mut self.sendgrid.api_key);
        Self::apply_env_option_string("OPTIN_SENDGRID_API_KEY", &mut self.sendgrid.api_key);
        Self::apply_env_string("OPTIN_SENDGRID_BASE_URL", &mut self.sendgrid.base_url);
        Self::apply_env_string("OPTIN_SENDGRID_LIST_NAME", &mut self.sendgrid.list_name);

        // Identity
        Self::apply_env_option_string("OPTIN_IDENTITY_API_KEY", &mut self.identity.api_key);
        Self::apply_env_option_string(
            "OPTIN_IDENTITY_AUTH_DOMAIN",
            &mut self.identity.auth_domain,
        );
        Self::apply_env_option_string("OPTIN_IDENTITY_PROJECT_ID", &mut self.identity.project_id);
        Self::apply_env_string(
            "OPTIN_IDENTITY_AUTH_BASE_URL",
            &mut self.identity.auth_base_url,
        );

        // Store
        Self::apply_env_parse("OPTIN_STORE_BACKEND", &mut self.store.backend);
        Self::apply_env_string("OPTIN_STORE_PATH", &mut self.store.path);
        Self::apply_env_string(
            "OPTIN_STORE_FIRESTORE_BASE_URL",
            &mut self.store.firestore_base_url,
        );

        // Client
        Self::apply_env_string("OPTIN_GATEWAY_URL", &mut self.client.gateway_url);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
