pub mod error;
pub mod sendgrid;
