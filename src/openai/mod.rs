pub mod image_client;
pub mod vision_client;

use crate::{
    config::OpenAiConfig,
    error::{Result, ShibliError},
};

pub use image_client::ImageClient;
pub use vision_client::VisionClient;

/// Handle to the OpenAI API, split into one sub-client per capability.
///
/// Both sub-clients share a single `reqwest::Client`, so one `OpenAiClient`
/// can be cloned across concurrent requests freely.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    vision_client: VisionClient,
    image_client: ImageClient,
}

impl OpenAiClient {
    /// Builds the client, failing up front when no API key is configured
    /// rather than on the first upstream call.
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            ShibliError::ConfigError(
                "OPENAI_API_KEY is not set and no API key was provided".into(),
            )
        })?;

        let http = reqwest::Client::new();
        let api_base = config.api_base().to_string();

        Ok(Self {
            vision_client: VisionClient::new(
                http.clone(),
                api_base.clone(),
                api_key.clone(),
                config.vision_model().to_string(),
            ),
            image_client: ImageClient::new(
                http,
                api_base,
                api_key,
                config.image_model().to_string(),
            ),
        })
    }

    pub fn vision(&self) -> &VisionClient {
        &self.vision_client
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let err = OpenAiClient::new(OpenAiConfig::new()).unwrap_err();
        assert!(matches!(err, ShibliError::ConfigError(_)));
    }

    #[test]
    fn test_new_with_api_key() {
        let client = OpenAiClient::new(OpenAiConfig::new().with_api_key("sk-test"));
        assert!(client.is_ok());
    }
}
