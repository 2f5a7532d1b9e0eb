use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "optin")]
#[command(about = "Sign in and manage the email list opt-in")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Gateway URL (overrides client.gateway_url)
    #[arg(long, global = true)]
    pub gateway: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive login and profile views (default)
    Run,

    /// Provision a profile record in the local store
    Seed {
        /// Identity id the record is keyed by
        id: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        display_name: Option<String>,

        #[arg(long)]
        username: Option<String>,

        /// Start opted in
        #[arg(long)]
        opted_in: bool,
    },
}
