//! The request orchestrator: normalize, describe, compose, generate.

use crate::{
    error::{Result, ShibliError},
    image_prep, logger,
    models::{
        DescriptionResponse, ImageGenerationRequest, ImageGenerationResponse, NormalizedImage,
    },
    openai::OpenAiClient,
    prompt,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Vision side of the pipeline, object-safe so tests can substitute stubs.
#[async_trait]
pub trait DescriptionProvider: Send + Sync {
    async fn describe(&self, image: &NormalizedImage) -> Result<DescriptionResponse>;
}

/// Synthesis side of the pipeline.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(&self, request: ImageGenerationRequest)
        -> Result<ImageGenerationResponse>;
}

#[async_trait]
impl DescriptionProvider for crate::openai::VisionClient {
    async fn describe(&self, image: &NormalizedImage) -> Result<DescriptionResponse> {
        crate::openai::VisionClient::describe(self, image).await
    }
}

#[async_trait]
impl GenerationProvider for crate::openai::ImageClient {
    async fn generate(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse> {
        crate::openai::ImageClient::generate(self, request).await
    }
}

/// Runs one upload through the four stages in order, short-circuiting on the
/// first failure. Holds no per-request state, so a single instance serves
/// concurrent requests.
pub struct GhibliPipeline {
    describer: Arc<dyn DescriptionProvider>,
    generator: Arc<dyn GenerationProvider>,
}

impl GhibliPipeline {
    pub fn new(client: OpenAiClient) -> Self {
        Self {
            describer: Arc::new(client.vision().clone()),
            generator: Arc::new(client.image().clone()),
        }
    }

    /// Wires in substitute providers. Used by tests; also the seam for
    /// pointing the pipeline at a different upstream.
    pub fn with_providers(
        describer: Arc<dyn DescriptionProvider>,
        generator: Arc<dyn GenerationProvider>,
    ) -> Self {
        Self {
            describer,
            generator,
        }
    }

    pub async fn run(&self, raw: &[u8]) -> Result<ImageGenerationResponse> {
        let _timer = logger::timer("generate-ghibli");

        let image = image_prep::normalize(raw)?;
        log::info!(
            "Normalized upload to {}x{} PNG ({} bytes)",
            image.width(),
            image.height(),
            image.len()
        );

        let described = self.describer.describe(&image).await?;
        if described.description.trim().is_empty() {
            return Err(ShibliError::DescriptionError(
                "vision model returned an empty description".into(),
            ));
        }

        let ghibli_prompt = prompt::compose_ghibli_prompt(&described.description);
        log::debug!("Composed prompt ({} chars)", ghibli_prompt.len());

        let art = self
            .generator
            .generate(ImageGenerationRequest::from_prompt(ghibli_prompt))
            .await?;

        log::info!("Generated Ghibli-style art: {}", art.image_url);
        Ok(art)
    }
}
