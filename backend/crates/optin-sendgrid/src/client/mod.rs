pub(crate) mod client;
pub(crate) mod error;

pub use client::SendGridClient;
pub use error::{Result, SendGridError};
