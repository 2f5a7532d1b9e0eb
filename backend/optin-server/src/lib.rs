pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::{GatewayError, Result as GatewayResult},
    sendgrid::sendgrid_contact,
};
pub use app_state::AppState;
pub use metrics::GatewayMetrics;

pub use crate::routes::build_router;
