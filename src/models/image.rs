use serde::{Deserialize, Serialize};

/// A decoded-and-re-encoded upload: PNG bytes with both dimensions capped.
///
/// Constructed only by `image_prep::normalize`, so holding one implies the
/// byte-ceiling and dimension invariants already passed.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl NormalizedImage {
    pub(crate) fn new(bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            bytes,
            width,
            height,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub model_id: Option<String>,
    pub size: Option<String>,
    pub num_images: Option<u32>,
}

impl ImageGenerationRequest {
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model_id: None,
            size: None,
            num_images: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationResponse {
    pub image_url: String,
    pub model: String,
}

/// Wire shape of the images/generations response.
#[derive(Debug, Deserialize)]
pub struct OpenAiImagesResponse {
    pub data: Vec<OpenAiImageData>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiImageData {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub revised_prompt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_response_deserialization() {
        let json = r#"{"data": [{"url": "https://example.com/art.png", "revised_prompt": "a valley"}]}"#;
        let resp: OpenAiImagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.len(), 1);
        assert_eq!(
            resp.data[0].url.as_deref(),
            Some("https://example.com/art.png")
        );
        assert_eq!(resp.data[0].revised_prompt.as_deref(), Some("a valley"));
    }

    #[test]
    fn test_images_response_empty_data() {
        let json = r#"{"data": []}"#;
        let resp: OpenAiImagesResponse = serde_json::from_str(json).unwrap();
        assert!(resp.data.is_empty());
    }

    #[test]
    fn test_images_response_url_missing() {
        let json = r#"{"data": [{}]}"#;
        let resp: OpenAiImagesResponse = serde_json::from_str(json).unwrap();
        assert!(resp.data[0].url.is_none());
    }

    #[test]
    fn test_normalized_image_accessors() {
        let img = NormalizedImage::new(vec![1, 2, 3], 640, 480);
        assert_eq!(img.len(), 3);
        assert!(!img.is_empty());
        assert_eq!(img.width(), 640);
        assert_eq!(img.height(), 480);
        assert_eq!(img.into_bytes(), vec![1, 2, 3]);
    }
}
