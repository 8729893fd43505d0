use serde::{Deserialize, Serialize};

/// Success body of the boundary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GhibliArtResponse {
    pub image_url: String,
}

/// Failure body of the boundary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
