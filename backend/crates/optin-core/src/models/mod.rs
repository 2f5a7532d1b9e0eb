pub mod contact_action;
pub mod contact_name;
pub mod contact_request;
pub mod profile_record;
pub mod profile_update;
pub mod user_identity;
