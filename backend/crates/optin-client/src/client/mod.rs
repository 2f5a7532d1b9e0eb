pub(crate) mod error;
pub(crate) mod gateway_client;

pub use error::{ClientError, Result as ClientResult};
pub use gateway_client::GatewayClient;
