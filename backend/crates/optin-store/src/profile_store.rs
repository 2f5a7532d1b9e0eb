use crate::{Result as StoreResult, StoreError};

use optin_core::{ProfileRecord, ProfileUpdate};

use async_trait::async_trait;

/// Port for per-identity profile records
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the record for an identity id, `None` when it does not exist
    async fn get(&self, id: &str) -> StoreResult<Option<ProfileRecord>>;

    /// Write the present fields of `update`, creating the record if needed.
    /// Fields absent from the update are never overwritten.
    async fn merge(&self, id: &str, update: &ProfileUpdate) -> StoreResult<()>;
}

/// Identity ids key documents and URL paths; reject empty or nested ids.
#[track_caller]
pub(crate) fn validate_id(id: &str) -> StoreResult<()> {
    if id.trim().is_empty() || id.contains('/') {
        return Err(StoreError::invalid_id(id));
    }
    Ok(())
}
