use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use coursebot_core::{GeneratedResponse, ResponseProvider, ResponseRequest, Usage};

use crate::retry::retry_with_backoff;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Transport timeout per request. Timeouts surface as ordinary remote
/// failures to the caller.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Delays in seconds before each transport-level retry.
const RETRY_DELAYS: [u64; 3] = [2, 4, 8];

/// Client for the OpenAI Responses API.
///
/// Carries the `file_search` tool declaration on every request and resumes
/// server-side conversations via `previous_response_id`.
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String) -> Self {
        info!("Creating OpenAiProvider");
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn build_body(request: &ResponseRequest) -> Value {
        let input: Vec<Value> = request
            .input
            .iter()
            .map(|m| json!({ "role": m.role, "content": m.content }))
            .collect();

        let mut body = json!({
            "model": request.model,
            "input": input,
            "tools": [{
                "type": "file_search",
                "vector_store_ids": [request.vector_store_id],
            }],
            "text": { "verbosity": request.verbosity.as_str() },
        });

        if let Some(id) = &request.previous_response_id {
            body["previous_response_id"] = json!(id);
        }

        body
    }

    /// Helper method to send a single request
    async fn try_send(&self, body: &Value) -> anyhow::Result<GeneratedResponse> {
        let response = self
            .client
            .post(format!("{}/responses", self.base_url))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        parse_response(&response)
    }
}

#[async_trait]
impl ResponseProvider for OpenAiProvider {
    async fn respond(&self, request: &ResponseRequest) -> anyhow::Result<GeneratedResponse> {
        let body = Self::build_body(request);

        info!(
            "Sending request to OpenAI Responses API: model={}, continuation={}",
            request.model,
            request.previous_response_id.is_some()
        );

        let response = retry_with_backoff(|| self.try_send(&body), &RETRY_DELAYS).await?;

        info!("Received response: {}", response.id);
        Ok(response)
    }

    fn default_model(&self) -> &'static str {
        "gpt-5-nano"
    }
}

fn parse_response(response: &Value) -> anyhow::Result<GeneratedResponse> {
    let id = response["id"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid response format: missing id"))?
        .to_string();

    let output_text = extract_output_text(response)?;

    let usage = response["usage"].as_object().map(|u| {
        let count = |key: &str| {
            u32::try_from(u.get(key).and_then(Value::as_u64).unwrap_or(0)).unwrap_or(0)
        };
        Usage {
            input_tokens: count("input_tokens"),
            output_tokens: count("output_tokens"),
            total_tokens: count("total_tokens"),
        }
    });

    Ok(GeneratedResponse {
        id,
        output_text,
        usage,
    })
}

/// Collect the reply text from the `output` array: `message` items hold
/// `output_text` content parts, concatenated in order.
fn extract_output_text(response: &Value) -> anyhow::Result<String> {
    let output = response["output"]
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("Invalid response format: missing output"))?;

    let mut text = String::new();
    for item in output {
        if item["type"].as_str() != Some("message") {
            continue;
        }
        let Some(parts) = item["content"].as_array() else {
            continue;
        };
        for part in parts {
            if part["type"].as_str() == Some("output_text") {
                if let Some(t) = part["text"].as_str() {
                    text.push_str(t);
                }
            }
        }
    }

    if text.is_empty() {
        anyhow::bail!("Invalid response format: no output text");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursebot_core::{ChatMessage, Role, Verbosity};

    fn request(previous: Option<&str>, input: Vec<ChatMessage>) -> ResponseRequest {
        ResponseRequest {
            model: "gpt-5-nano".to_string(),
            input,
            previous_response_id: previous.map(str::to_string),
            vector_store_id: "vs_abc".to_string(),
            verbosity: Verbosity::Low,
        }
    }

    #[test]
    fn first_turn_body_has_no_continuation_field() {
        let req = request(
            None,
            vec![
                ChatMessage {
                    role: Role::System,
                    content: "instructions".to_string(),
                },
                ChatMessage {
                    role: Role::Assistant,
                    content: "greeting".to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: "question".to_string(),
                },
            ],
        );

        let body = OpenAiProvider::build_body(&req);

        assert!(body.get("previous_response_id").is_none());
        assert_eq!(body["model"], "gpt-5-nano");
        assert_eq!(body["input"].as_array().map_or(0, Vec::len), 3);
        assert_eq!(body["input"][0]["role"], "system");
        assert_eq!(body["input"][1]["role"], "assistant");
        assert_eq!(body["input"][2]["role"], "user");
        assert_eq!(body["tools"][0]["type"], "file_search");
        assert_eq!(body["tools"][0]["vector_store_ids"][0], "vs_abc");
        assert_eq!(body["text"]["verbosity"], "low");
    }

    #[test]
    fn continuation_body_carries_token_and_single_item() {
        let req = request(
            Some("resp_prev"),
            vec![ChatMessage {
                role: Role::User,
                content: "follow-up".to_string(),
            }],
        );

        let body = OpenAiProvider::build_body(&req);

        assert_eq!(body["previous_response_id"], "resp_prev");
        assert_eq!(body["input"].as_array().map_or(0, Vec::len), 1);
        assert_eq!(body["input"][0]["content"], "follow-up");
    }

    #[test]
    fn parses_reply_text_and_usage() {
        let payload = json!({
            "id": "resp_123",
            "output": [
                { "type": "file_search_call", "status": "completed" },
                {
                    "type": "message",
                    "role": "assistant",
                    "content": [
                        { "type": "output_text", "text": "ARIMA handles " },
                        { "type": "output_text", "text": "non-seasonal series." }
                    ]
                }
            ],
            "usage": { "input_tokens": 10, "output_tokens": 5, "total_tokens": 15 }
        });

        let parsed = parse_response(&payload);
        let Ok(response) = parsed else {
            panic!("expected parse to succeed: {parsed:?}");
        };
        assert_eq!(response.id, "resp_123");
        assert_eq!(response.output_text, "ARIMA handles non-seasonal series.");
        let Some(usage) = response.usage else {
            panic!("expected usage");
        };
        assert_eq!(usage.total_tokens, 15);
    }

    #[test]
    fn rejects_payload_without_text() {
        let payload = json!({
            "id": "resp_123",
            "output": [{ "type": "file_search_call", "status": "completed" }]
        });
        assert!(parse_response(&payload).is_err());
    }

    #[test]
    fn rejects_payload_without_id() {
        let payload = json!({ "output": [] });
        assert!(parse_response(&payload).is_err());
    }
}
