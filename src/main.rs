use shibli::{logger, Config, GhibliPipeline, OpenAiClient, OpenAiConfig};
use std::env;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    logger::init_with_config(
        logger::LoggerConfig::development().with_level(logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking OpenAI environment...");

    // Check the credential without printing the actual value
    match env::var("OPENAI_API_KEY") {
        Ok(api_key) => {
            log::info!("✅ OpenAI API key found in environment");
            log::debug!(
                "API key starts with: {}...",
                &api_key[..5.min(api_key.len())]
            );
        }
        Err(_) => {
            log::error!("❌ OPENAI_API_KEY not set, startup will fail");
        }
    }

    let config = Config::from_env().with_openai(OpenAiConfig::from_env());
    logger::log_config_info(&config);

    log::info!("🔄 Creating OpenAI client...");
    let openai_config = config.openai.clone().unwrap_or_default();
    let client = match OpenAiClient::new(openai_config) {
        Ok(client) => {
            log::info!("✅ OpenAI client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize OpenAI client: {}", e);
            return Err(e.into());
        }
    };

    let pipeline = GhibliPipeline::new(client);
    let port = config.port.unwrap_or(DEFAULT_PORT);

    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), port);
    log::info!("🎨 POST an image to /generate-ghibli to get Ghibli-style art");

    shibli::server::run(pipeline, port).await?;

    Ok(())
}
