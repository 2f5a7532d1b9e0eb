pub mod document;
pub mod firestore_profile_store;
