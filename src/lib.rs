//! Shibli: Studio Ghibli-style art from uploaded photos.
//!
//! The pipeline is strictly linear per request: normalize the upload to a
//! size-capped PNG, ask a vision model for a detailed description, wrap that
//! description in a fixed Ghibli-style prompt, and ask an image model for the
//! illustration. The generated art stays hosted upstream; callers get a URL.

pub mod config;
pub mod error;
pub mod image_prep;
pub mod logger;
pub mod models;
pub mod openai;
pub mod pipeline;
pub mod prompt;
#[cfg(feature = "server")]
pub mod server;

pub use config::{Config, OpenAiConfig};
pub use error::{Result, ShibliError};
pub use models::{GhibliArtResponse, ImageGenerationRequest, ImageGenerationResponse, NormalizedImage};
pub use openai::{ImageClient, OpenAiClient, VisionClient};
pub use pipeline::{DescriptionProvider, GenerationProvider, GhibliPipeline};
