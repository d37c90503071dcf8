use hydrazine_core::MissionRequest;
use serde_json::{Value, json};

use crate::error::OpenRouterError;
use crate::prompt::{system_prompt, user_prompt};
use crate::types::{GenerationParams, ResponseFormat};

/// Builds the chat completion request body for a mission.
pub fn build_request_body(
    model: &str,
    request: &MissionRequest,
    params: &GenerationParams,
    format: ResponseFormat,
) -> Value {
    let mut body = json!({
        "model": model,
        "messages": [
            { "role": "system", "content": system_prompt() },
            { "role": "user", "content": user_prompt(request) }
        ]
    });

    apply_generation_params(&mut body, params);

    if format == ResponseFormat::JsonObject {
        body["response_format"] = json!({ "type": "json_object" });
    }

    body
}

fn apply_generation_params(body: &mut Value, params: &GenerationParams) {
    if let Some(temp) = params.temperature {
        body["temperature"] = json!(temp);
    }
    if let Some(max_tokens) = params.max_tokens {
        body["max_tokens"] = json!(max_tokens);
    }
    if let Some(seed) = params.seed {
        body["seed"] = json!(seed);
    }
}

/// Extracts the assistant text from a chat completion response.
pub fn parse_response(response: &Value) -> Result<String, OpenRouterError> {
    let msg = response
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .ok_or_else(|| OpenRouterError::Api {
            status: 0,
            message: "No message in response".to_string(),
        })?;

    let text = match msg.get("content") {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(parts)) => parts
            .iter()
            .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
            .collect::<Vec<_>>()
            .join(""),
        _ => String::new(),
    };

    if text.trim().is_empty() {
        return Err(OpenRouterError::Api {
            status: 0,
            message: "Empty completion".to_string(),
        });
    }

    Ok(text)
}
