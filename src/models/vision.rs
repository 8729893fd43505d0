use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct DescriptionResponse {
    pub description: String,
    pub model: String,
}

/// Wire shape of the chat/completions response, trimmed to what we read.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub content: Option<String>,
}
