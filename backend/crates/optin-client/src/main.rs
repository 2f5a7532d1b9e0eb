//! optin - email list opt-in terminal client
//!
//! # Examples
//!
//! ```bash
//! # Sign in and toggle the opt-in checkbox
//! optin
//!
//! # Provision a local profile record
//! optin seed <uid> --email ada@example.com --display-name "Ada Lovelace"
//! ```

mod cli;

use crate::cli::{Cli, Commands};

use optin_client::{App, FirebaseIdentityProvider, GatewayClient, ProfileStores, logger};
use optin_config::{Config, StoreBackend};
use optin_core::ProfileRecord;
use optin_store::SqliteProfileStore;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment wins
    dotenvy::dotenv().ok();

    let mut config = Config::load()?;
    if let Some(gateway) = cli.gateway {
        config.client.gateway_url = gateway;
    }

    logger::initialize(config.logging.level, config.log_file_path()?)?;
    info!("Starting optin v{}", env!("CARGO_PKG_VERSION"));

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            config.validate_client()?;
            config.log_summary();

            let api_key = config.identity.require_api_key()?;
            let provider = FirebaseIdentityProvider::new(&config.identity.auth_base_url, api_key);
            let stores = ProfileStores::from_config(&config).await?;
            let gateway = GatewayClient::new(&config.client.gateway_url);

            let app = App::new(provider, stores, gateway);
            let input = BufReader::new(tokio::io::stdin());
            let mut out = std::io::stdout();
            app.run(input, &mut out).await?;
        }
        Commands::Seed {
            id,
            email,
            display_name,
            username,
            opted_in,
        } => {
            config.validate()?;
            if config.store.backend != StoreBackend::Sqlite {
                return Err("seed only supports the sqlite store backend".into());
            }

            let store = SqliteProfileStore::connect(&config.store_path()?).await?;
            let record = ProfileRecord {
                is_opted_in: opted_in,
                email,
                display_name,
                username,
                ..ProfileRecord::new(id)
            };
            store.insert(&record).await?;
            println!("Seeded profile record {}", record.id);
        }
    }

    Ok(())
}
