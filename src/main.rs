//! Battleships console client.

#![warn(missing_docs)]

use anyhow::Result;
use battleships_console::{ClientConfig, MenuNavigator, RestClient, StdConsole};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::load()?;
    info!(
        base_url = %config.base_url(),
        api_version = %config.api_version(),
        "Starting battleships console"
    );

    let client = RestClient::new(&config)?;
    let mut console = StdConsole::new();
    let mut navigator = MenuNavigator::new(&client);
    navigator.run(&mut console).await?;

    Ok(())
}
