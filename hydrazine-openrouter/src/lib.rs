//! Recommendation service backed by an OpenAI-compatible chat API.
//!
//! Defaults to OpenRouter; any server speaking `/chat/completions` (such as a
//! local LM Studio instance) works through [`OpenRouterClient::with_base_url`].
//!
//! # Example
//!
//! ```ignore
//! use hydrazine_core::{MissionRequest, Priority, RecommendationService};
//! use hydrazine_openrouter::OpenRouterClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = OpenRouterClient::new("your-api-key").model("openai/gpt-4o");
//!     let request = MissionRequest {
//!         ship_name: Some("Gladius".to_string()),
//!         intent: "bounty hunting".to_string(),
//!         start_location: "Seraphim Station".to_string(),
//!         priority: Priority::Shortest,
//!     };
//!
//!     let build = client.recommend(&request).await.unwrap();
//!     println!("{} stops", build.route.len());
//! }
//! ```

mod client;
mod convert;
mod error;
mod prompt;
mod types;

pub use client::{DEFAULT_MODEL, OpenRouterClient};
pub use convert::{build_request_body, parse_response};
pub use error::OpenRouterError;
pub use prompt::{system_prompt, user_prompt};
pub use types::{GenerationParams, ResponseFormat};
