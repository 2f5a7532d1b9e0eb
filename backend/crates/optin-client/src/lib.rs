//! optin-client library
//!
//! Identity adapter, session publisher, opt-in controller and the terminal
//! views that drive them. Exported for the `optin` binary and tests.

pub mod app;
pub(crate) mod client;
pub mod controller;
pub mod identity;
pub mod logger;
pub mod profile_stores;
pub mod shell;

#[cfg(test)]
mod tests;

pub use app::App;
pub use client::{ClientError, ClientResult, GatewayClient};
pub use controller::{opt_in_controller::OptInController, toggle_outcome::ToggleOutcome};
pub use identity::{
    error::{IdentityError, LOGIN_ERROR_MESSAGE, Result as IdentityResult},
    firebase::FirebaseIdentityProvider,
    identity_provider::IdentityProvider,
    session::{SessionPublisher, SessionSubscription},
};
pub use profile_stores::ProfileStores;
pub use shell::{Shell, View};
