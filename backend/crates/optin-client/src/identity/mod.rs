pub mod error;
pub mod firebase;
pub mod identity_provider;
pub mod session;
