use alleybook_api::config::ApiConfig;
use alleybook_store::create_client;
use color_eyre::eyre::Result;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create the record store client
    let client = create_client(&config.airtable)?;

    // Start API server
    alleybook_api::start_server(config, client).await?;

    Ok(())
}
