use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FIRESTORE_BASE_URL, DEFAULT_STORE_PATH, is_http_url,
};

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

/// Which profile store adapter to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Local SQLite file under the config directory
    #[default]
    Sqlite,
    /// Hosted document database over REST
    Firestore,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Firestore => "firestore",
        }
    }
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "firestore" => Ok(Self::Firestore),
            other => Err(ConfigError::store(format!(
                "store.backend must be 'sqlite' or 'firestore', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// SQLite file, relative to the config directory
    pub path: String,
    pub firestore_base_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: String::from(DEFAULT_STORE_PATH),
            firestore_base_url: String::from(DEFAULT_FIRESTORE_BASE_URL),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Store path must not escape the config dir
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::store(
                "store.path must be relative and cannot contain '..'",
            ));
        }

        if !is_http_url(&self.firestore_base_url) {
            return Err(ConfigError::store(format!(
                "store.firestore_base_url must be an http(s) URL, got '{}'",
                self.firestore_base_url
            )));
        }

        Ok(())
    }
}
