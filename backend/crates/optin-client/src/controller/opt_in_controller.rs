//! Opt-in toggle workflow.
//!
//! The local flag follows the checkbox immediately. The profile store is
//! written first, then the contact list through the gateway; the two writes
//! are not atomic and a gateway failure is not rolled back.

use crate::{GatewayClient, ToggleOutcome};

use optin_core::{ContactAction, ContactRequest, ProfileRecord, ProfileUpdate, UserIdentity};
use optin_store::ProfileStore;

use std::sync::Arc;

use log::{error, info};

pub struct OptInController {
    identity: UserIdentity,
    store: Arc<dyn ProfileStore>,
    gateway: GatewayClient,
    opted_in: bool,
    record: Option<ProfileRecord>,
}

impl OptInController {
    pub fn new(identity: UserIdentity, store: Arc<dyn ProfileStore>, gateway: GatewayClient) -> Self {
        Self {
            identity,
            store,
            gateway,
            opted_in: false,
            record: None,
        }
    }

    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    /// Checkbox state
    pub fn is_opted_in(&self) -> bool {
        self.opted_in
    }

    /// Last record seen by `load` or updated by `toggle`
    pub fn record(&self) -> Option<&ProfileRecord> {
        self.record.as_ref()
    }

    /// Fetch the profile record and initialize the checkbox from it.
    ///
    /// Missing identity, missing record and read failures all leave the view
    /// at "no record, not opted in".
    pub async fn load(&mut self) {
        self.record = None;
        self.opted_in = false;

        if !self.identity.has_id() {
            return;
        }

        match self.store.get(&self.identity.id).await {
            Ok(Some(record)) => {
                self.opted_in = record.is_opted_in;
                self.record = Some(record);
            }
            Ok(None) => {
                info!("No profile record for {}", self.identity.id);
            }
            Err(e) => {
                error!("Error fetching profile record: {}", e);
            }
        }
    }

    /// Apply a checkbox change: store first, then the contact list.
    pub async fn toggle(&mut self, new_value: bool) -> ToggleOutcome {
        self.opted_in = new_value;

        if !self.identity.has_id() {
            return ToggleOutcome::NoIdentity;
        }
        let id = self.identity.id.clone();

        let record = match self.store.get(&id).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                error!("Profile record does not exist for {}", id);
                return ToggleOutcome::ProfileMissing;
            }
            Err(e) => {
                error!("Error reading profile record: {}", e);
                return ToggleOutcome::StoreFailed;
            }
        };

        if let Err(e) = self.store.merge(&id, &ProfileUpdate::opt_in(new_value)).await {
            error!("Error updating opt-in status: {}", e);
            return ToggleOutcome::StoreFailed;
        }
        info!("Profile store updated with opt-in status: {}", new_value);

        let mut updated = record;
        updated.is_opted_in = new_value;
        let action = ContactAction::for_opt_in(new_value);
        let outcome = self.sync_contact(&updated, action).await;
        self.record = Some(updated);

        outcome
    }

    async fn sync_contact(&self, record: &ProfileRecord, action: ContactAction) -> ToggleOutcome {
        let Some(email) = record.email.as_deref().filter(|e| !e.trim().is_empty()) else {
            error!("Profile record {} has no email, contact list not updated", record.id);
            return ToggleOutcome::GatewayFailed;
        };

        let request = ContactRequest::new(
            email,
            action,
            record.contact_name(),
            record.username.clone(),
        );

        match self.gateway.send(&request).await {
            Ok(_) => {
                info!("Contact list updated: {}", action);
                ToggleOutcome::Synced { action }
            }
            Err(e) => {
                error!("Error in opt-in process: {}", e);
                ToggleOutcome::GatewayFailed
            }
        }
    }
}
