//! Run the pipeline once against a local image file, without the HTTP server.
//!
//! Usage: cargo run --example generate -- path/to/photo.jpg

use shibli::{logger, GhibliPipeline, OpenAiClient, OpenAiConfig};
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    logger::init()?;

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: generate <image-path>")?;
    let raw = fs::read(&path)?;
    log::info!("Read {} bytes from {}", raw.len(), path);

    let client = OpenAiClient::new(OpenAiConfig::from_env())?;
    let pipeline = GhibliPipeline::new(client);

    let art = pipeline.run(&raw).await?;
    println!("Ghibli-style art: {}", art.image_url);

    Ok(())
}
