mod gateway_client;
mod shell;

use optin_core::{ProfileRecord, ProfileUpdate};
use optin_store::{ProfileStore, StoreError};

use async_trait::async_trait;

/// Store whose every call fails
pub(crate) struct FailingStore;

#[async_trait]
impl ProfileStore for FailingStore {
    async fn get(&self, _id: &str) -> optin_store::Result<Option<ProfileRecord>> {
        Err(StoreError::status("Fetch profile", 503))
    }

    async fn merge(&self, _id: &str, _update: &ProfileUpdate) -> optin_store::Result<()> {
        Err(StoreError::status("Update profile", 503))
    }
}

/// Store that reads fine but refuses writes
pub(crate) struct ReadOnlyStore(pub Option<ProfileRecord>);

#[async_trait]
impl ProfileStore for ReadOnlyStore {
    async fn get(&self, _id: &str) -> optin_store::Result<Option<ProfileRecord>> {
        Ok(self.0.clone())
    }

    async fn merge(&self, _id: &str, _update: &ProfileUpdate) -> optin_store::Result<()> {
        Err(StoreError::status("Update profile", 403))
    }
}
