//! Profile store adapters
//!
//! Every adapter implements [`ProfileStore`]: read one record by identity id,
//! and merge a partial update into it without touching absent fields.

pub mod error;
pub mod firestore;
pub mod profile_store;
pub mod sqlite_profile_store;


pub use error::{Result, StoreError};
pub use firestore::firestore_profile_store::FirestoreProfileStore;
pub use profile_store::ProfileStore;
pub use sqlite_profile_store::SqliteProfileStore;
