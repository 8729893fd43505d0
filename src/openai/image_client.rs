use crate::{
    error::{Result, ShibliError},
    models::{ImageGenerationRequest, ImageGenerationResponse, OpenAiImagesResponse},
};
use serde_json::json;

const DEFAULT_SIZE: &str = "1024x1024";

#[derive(Debug, Clone)]
pub struct ImageClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl ImageClient {
    pub(crate) fn new(
        http: reqwest::Client,
        api_base: String,
        api_key: String,
        model: String,
    ) -> Self {
        Self {
            http,
            api_base,
            api_key,
            model,
        }
    }

    /// One images/generations call; expects exactly one hosted result URL.
    pub async fn generate(&self, request: ImageGenerationRequest) -> Result<ImageGenerationResponse> {
        let model = request.model_id.as_deref().unwrap_or(&self.model);
        let payload = build_generation_payload(model, &request);

        log::info!("Generating image with model: {}", model);

        let response = self
            .http
            .post(format!("{}/images/generations", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ShibliError::GenerationError(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ShibliError::GenerationError(format!(
                "OpenAI API error {}: {}",
                status.as_u16(),
                detail
            )));
        }

        let images: OpenAiImagesResponse = response
            .json()
            .await
            .map_err(|e| ShibliError::ResponseError(e.to_string()))?;

        let image_url = images
            .data
            .into_iter()
            .next()
            .and_then(|entry| entry.url)
            .ok_or_else(|| {
                ShibliError::GenerationError("no image URL in the API response".into())
            })?;

        Ok(ImageGenerationResponse {
            image_url,
            model: model.to_string(),
        })
    }
}

fn build_generation_payload(model: &str, request: &ImageGenerationRequest) -> serde_json::Value {
    json!({
        "model": model,
        "prompt": request.prompt,
        "n": request.num_images.unwrap_or(1),
        "size": request.size.as_deref().unwrap_or(DEFAULT_SIZE)
    })
}
