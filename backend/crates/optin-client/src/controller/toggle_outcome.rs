use optin_core::ContactAction;

/// Result of one toggle, informational only
///
/// Failures are already logged; the profile view does not display them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Store and contact list both updated
    Synced { action: ContactAction },
    /// No signed-in identity id; nothing was written
    NoIdentity,
    /// No profile record for this identity; nothing was written
    ProfileMissing,
    /// Profile store read or merge failed; the gateway was not called
    StoreFailed,
    /// Store updated but the contact list was not
    GatewayFailed,
}

impl ToggleOutcome {
    pub fn is_synced(&self) -> bool {
        matches!(self, ToggleOutcome::Synced { .. })
    }
}
