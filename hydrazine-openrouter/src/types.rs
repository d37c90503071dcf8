use serde::{Deserialize, Serialize};

/// Sampling parameters forwarded to the completion endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub seed: Option<u64>,
}

/// How the endpoint is asked to shape its reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Request `{"type": "json_object"}`.
    #[default]
    JsonObject,
    /// No response format hint; some local servers reject it.
    Text,
}
