mod contact_action;
mod contact_name;
mod contact_request;
mod profile_record;
mod profile_update;
mod user_identity;
