use hydrazine_core::{BuildPayload, LoadoutBuild, MissionRequest, RecommendationService, decode_build};
use tracing::{debug, instrument, warn};

use crate::convert::{build_request_body, parse_response};
use crate::error::OpenRouterError;
use crate::types::{GenerationParams, ResponseFormat};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-001";

/// Client for an OpenAI-compatible chat completion API.
pub struct OpenRouterClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    params: GenerationParams,
    format: ResponseFormat,
}

impl OpenRouterClient {
    /// Creates a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL, e.g. a local LM Studio server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
            params: GenerationParams::default(),
            format: ResponseFormat::default(),
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    /// Sends the mission and returns the raw assistant text.
    #[instrument(skip(self, request), fields(model = %self.model))]
    pub async fn complete(&self, request: &MissionRequest) -> Result<String, OpenRouterError> {
        let body = build_request_body(&self.model, request, &self.params, self.format);

        debug!("Sending request to {}", self.base_url);

        let mut http_request = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header("Content-Type", "application/json")
            .json(&body);
        if !self.api_key.is_empty() {
            http_request = http_request.header("Authorization", format!("Bearer {}", self.api_key));
        }
        let response = http_request.send().await?;

        let status = response.status();
        let response_body: serde_json::Value = response.json().await?;

        if !status.is_success() {
            let message = response_body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(OpenRouterError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Received successful response");

        parse_response(&response_body)
    }

    /// Sends the mission and decodes the reply into a build.
    pub async fn recommend_build(
        &self,
        request: &MissionRequest,
    ) -> Result<LoadoutBuild, OpenRouterError> {
        let text = self.complete(request).await?;
        match decode_build(&text) {
            BuildPayload::Decoded(build) => Ok(build),
            BuildPayload::Malformed { diagnostic } => {
                warn!(%diagnostic, "recommender returned an unusable build");
                Err(OpenRouterError::MalformedBuild(diagnostic))
            }
        }
    }
}

impl RecommendationService for OpenRouterClient {
    type Error = OpenRouterError;

    async fn recommend(&self, request: &MissionRequest) -> Result<LoadoutBuild, OpenRouterError> {
        self.recommend_build(request).await
    }
}
