pub mod contact_upsert;
pub mod lists_response;
pub mod search_response;
