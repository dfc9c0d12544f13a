use std::env;

use moodgen::logger::{self, LoggerConfig};
use moodgen::Config;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_with_config(LoggerConfig::development())?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    log::info!("🔍 Checking fal.ai environment...");
    match env::var("FAL_API_KEY") {
        Ok(key) if !key.is_empty() => {
            log::info!("✅ FAL_API_KEY found in environment");
            log::debug!("API key starts with: {}...", &key[..5.min(key.len())]);
        }
        _ => {
            log::warn!("⚠️  No FAL_API_KEY set, running in placeholder mode");
            log::warn!("💡 /generate will answer with inline SVG placeholders");
        }
    }

    let config = Config::from_env();
    logger::log_startup_info(
        "moodgen",
        env!("CARGO_PKG_VERSION"),
        config.port.unwrap_or(moodgen::server::DEFAULT_PORT),
    );
    logger::log_config_info(&config);

    moodgen::server::run(config).await?;

    Ok(())
}
