use serde::{Deserialize, Serialize};

/// A fetched web page with its extracted text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub url: String,
    pub content: String,
}

/// Body of a `POST /generate` request. The URL is optional at the
/// deserialization layer so a missing key surfaces as a validation
/// error rather than a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub success: bool,
    pub article: String,
    pub source_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
