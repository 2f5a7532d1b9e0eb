//! Contact-list gateway handler
//!
//! Mirrors a profile's opt-in flag into the SendGrid list: `add` upserts the
//! contact into the list, `remove` drops it from the list and then deletes the
//! contact globally.

use crate::{AppState, GatewayError, GatewayResult};

use optin_core::{ContactAction, ContactRequest};
use optin_sendgrid::ContactUpsert;

use axum::{Json, extract::State, http::Method};
use bytes::Bytes;
use log::info;
use serde::Deserialize;
use serde_json::Value;

/// Just the `action` field, read before the rest of the body
#[derive(Deserialize)]
struct RequestedAction {
    #[serde(default)]
    action: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/sendgrid
///
/// Body: `{email, action, firstName?, lastName?, username?}`
pub async fn sendgrid_contact(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> GatewayResult<Json<Value>> {
    let result = handle(&state, method, &body).await;

    if let Err(ref e) = result {
        state.metrics.error_occurred(e.kind());
    }

    result.map(Json)
}

async fn handle(state: &AppState, method: Method, body: &[u8]) -> GatewayResult<Value> {
    if method != Method::POST {
        return Err(GatewayError::method_not_allowed(method));
    }

    // Unknown actions are rejected before the remaining fields are checked
    let RequestedAction { action } = serde_json::from_slice(body)?;
    let action: ContactAction = action.parse()?;
    let request: ContactRequest = serde_json::from_slice(body)?;
    state.metrics.request_received(action.as_str());

    let list = state.sendgrid.find_list(&state.list_name).await?;

    let upstream = match action {
        ContactAction::Add => add_contact(state, &list.id, &request).await?,
        ContactAction::Remove => remove_contact(state, &list.id, &request).await?,
    };

    state.metrics.request_succeeded(action.as_str());
    Ok(upstream)
}

// =============================================================================
// Actions
// =============================================================================

async fn add_contact(
    state: &AppState,
    list_id: &str,
    request: &ContactRequest,
) -> GatewayResult<Value> {
    let contact = ContactUpsert {
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        unique_name: request.username.clone(),
        ..ContactUpsert::new(&request.email)
    };

    let result = state.sendgrid.upsert_contact(list_id, contact).await?;
    info!("Added {} to list {}", request.normalized_email(), list_id);
    Ok(result)
}

async fn remove_contact(
    state: &AppState,
    list_id: &str,
    request: &ContactRequest,
) -> GatewayResult<Value> {
    let contact_id = state.sendgrid.find_contact_id(&request.email).await?;

    state.sendgrid.remove_from_list(list_id, &contact_id).await?;
    let result = state.sendgrid.delete_contact(&contact_id).await?;

    info!(
        "Removed {} from list {} and all contacts",
        request.normalized_email(),
        list_id
    );
    Ok(result)
}
