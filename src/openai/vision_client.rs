use crate::{
    error::{Result, ShibliError},
    models::{ChatCompletionResponse, DescriptionResponse, NormalizedImage},
};
use base64::Engine;
use serde_json::json;

/// System instruction steering the vision model toward artist-grade detail.
const SYSTEM_PROMPT: &str = "You are an expert AI in creating highly detailed, \
    artistic descriptions of images in Studio Ghibli style. Describe the facial \
    features, expressions, clothing, and fine details in extreme detail, and \
    explain the background, textures, lighting, and atmosphere with vivid language.";

const USER_PROMPT: &str =
    "Describe this image in detail to create a Studio Ghibli-style prompt.";

/// Response budget for one description.
const MAX_DESCRIPTION_TOKENS: u32 = 300;

#[derive(Debug, Clone)]
pub struct VisionClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl VisionClient {
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

    /// One chat/completions call carrying the normalized image inline.
    ///
    /// Single attempt: transport failures, non-2xx statuses, and unusable
    /// response bodies all surface as `DescriptionError` with the upstream
    /// detail passed through.
    pub async fn describe(&self, image: &NormalizedImage) -> Result<DescriptionResponse> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(image.bytes());
        let payload = build_description_payload(&self.model, &encoded);

        log::info!(
            "Requesting image description from {} ({} PNG bytes)",
            self.model,
            image.len()
        );

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ShibliError::DescriptionError(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ShibliError::DescriptionError(format!(
                "OpenAI API error {}: {}",
                status.as_u16(),
                detail
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ShibliError::ResponseError(e.to_string()))?;

        let description = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if description.trim().is_empty() {
            return Err(ShibliError::DescriptionError(
                "vision model returned no description".into(),
            ));
        }

        log::debug!("Description ({} chars): {}", description.len(), description);

        Ok(DescriptionResponse {
            description,
            model: self.model.clone(),
        })
    }
}

fn build_description_payload(model: &str, image_base64: &str) -> serde_json::Value {
    json!({
        "model": model,
        "messages": [
            {
                "role": "system",
                "content": SYSTEM_PROMPT
            },
            {
                "role": "user",
                "content": [
                    {"type": "text", "text": USER_PROMPT},
                    {
                        "type": "image_url",
                        "image_url": {"url": format!("data:image/png;base64,{}", image_base64)}
                    }
                ]
            }
        ],
        "max_tokens": MAX_DESCRIPTION_TOKENS
    })
}
