use crate::ClientResult;

use optin_config::{Config, StoreBackend};
use optin_core::UserIdentity;
use optin_store::{FirestoreProfileStore, ProfileStore, SqliteProfileStore};

use std::sync::Arc;

use log::info;

/// Profile store selected by configuration
///
/// The hosted store authenticates as the signed-in user, so a store is built
/// per identity rather than once at startup.
#[derive(Clone)]
pub enum ProfileStores {
    Sqlite(SqliteProfileStore),
    Firestore {
        base_url: String,
        project_id: String,
        api_key: Option<String>,
    },
}

impl ProfileStores {
    pub async fn from_config(config: &Config) -> ClientResult<Self> {
        match config.store.backend {
            StoreBackend::Sqlite => {
                let path = config.store_path()?;
                info!("Opening profile store: {}", path.display());
                Ok(Self::Sqlite(SqliteProfileStore::connect(&path).await?))
            }
            StoreBackend::Firestore => {
                let project_id = config.identity.require_project_id()?;
                info!("Using hosted profile store for project {}", project_id);
                Ok(Self::Firestore {
                    base_url: config.store.firestore_base_url.clone(),
                    project_id: project_id.to_string(),
                    api_key: config.identity.api_key.clone(),
                })
            }
        }
    }

    pub fn for_identity(&self, identity: &UserIdentity) -> Arc<dyn ProfileStore> {
        match self {
            Self::Sqlite(store) => Arc::new(store.clone()),
            Self::Firestore {
                base_url,
                project_id,
                api_key,
            } => {
                let mut store = FirestoreProfileStore::new(base_url, project_id);
                if let Some(key) = api_key {
                    store = store.with_api_key(key.clone());
                }
                if let Some(token) = identity.id_token.as_ref() {
                    store = store.with_id_token(token.clone());
                }
                Arc::new(store)
            }
        }
    }
}
