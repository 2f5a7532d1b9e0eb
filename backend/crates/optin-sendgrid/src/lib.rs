//! Typed client for the SendGrid Marketing Contacts API.
//!
//! Upstream response shapes are decoded once here; optional fields stay
//! `Option` so callers handle absence explicitly.

pub(crate) mod client;
pub(crate) mod models;

#[cfg(test)]
mod tests;

pub use client::{Result as SendGridResult, SendGridClient, SendGridError};
pub use models::{
    contact_upsert::{ContactUpsert, UpsertContactsRequest},
    lists_response::{ListsResponse, MarketingList},
    search_response::{SearchContact, SearchResponse},
};
