use anyhow::Result;
use tracing::{info, warn};

use weather_summary::{ServiceConfig, VERSION, config::API_KEY_VAR, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load()?;
    logging::init(&config.logging)?;

    info!("weather-summary {} starting", VERSION);
    if config.is_missing_api_key() {
        warn!(
            "No weather API key configured (set {} or weather.api_key); provider calls will be rejected",
            API_KEY_VAR
        );
    }

    web::run(&config).await
}
