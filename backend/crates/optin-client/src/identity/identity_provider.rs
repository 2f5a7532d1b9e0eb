use crate::{IdentityResult, SessionSubscription};

use optin_core::UserIdentity;

use async_trait::async_trait;

/// Authentication service seen by the shell and the login view
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticate and publish the new session
    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<UserIdentity>;

    /// Publish "signed out"
    fn sign_out(&self);

    /// Listen to session changes, starting from the current value
    fn subscribe(&self) -> SessionSubscription;
}
