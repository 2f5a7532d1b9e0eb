mod edge_cases;
mod server;
mod store;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and point OPTIN_CONFIG_DIR at it.
///
/// Secrets that may leak in from the developer environment are cleared.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set("OPTIN_CONFIG_DIR", temp.path().to_str().unwrap()),
        EnvGuard::remove("SENDGRID_API_KEY"),
        EnvGuard::remove("OPTIN_SENDGRID_API_KEY"),
        EnvGuard::remove("OPTIN_IDENTITY_API_KEY"),
        EnvGuard::remove("OPTIN_IDENTITY_PROJECT_ID"),
        EnvGuard::remove("OPTIN_STORE_BACKEND"),
    ];
    (temp, guards)
}
