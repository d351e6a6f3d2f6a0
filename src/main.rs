use anyhow::Result;
use flight_analytics::utils::logging;
use flight_analytics::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    logging::init(config.verbose_logging);

    // Run the batch and print the report
    let report = App::initialize(config).await?.run().await?;
    print!("{}", report);

    Ok(())
}
