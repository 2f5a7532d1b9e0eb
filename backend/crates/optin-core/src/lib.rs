pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::contact_action::ContactAction;
pub use models::contact_name::ContactName;
pub use models::contact_request::ContactRequest;
pub use models::profile_record::ProfileRecord;
pub use models::profile_update::ProfileUpdate;
pub use models::user_identity::UserIdentity;

/// Name of the marketing list that mirrors opted-in users
pub const DEFAULT_CONTACT_LIST_NAME: &str = "obscurity-users";
