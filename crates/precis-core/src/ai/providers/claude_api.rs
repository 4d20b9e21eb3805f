use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{summary_prompt, AiProvider, GenerationParams};
use crate::{Error, Result};

const CLAUDE_API_URL: &str = "https://api.anthropic.com/v1/messages";
const CHAT_MAX_TOKENS: u32 = 1024;

#[derive(Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<ClaudeMessage>,
}

#[derive(Serialize)]
struct ClaudeMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ClaudeResponse {
    content: Option<Vec<ClaudeContent>>,
    error: Option<ClaudeError>,
}

#[derive(Deserialize)]
struct ClaudeContent {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ClaudeError {
    message: String,
}

impl ClaudeResponse {
    fn into_text(self) -> Result<String> {
        if let Some(error) = self.error {
            return Err(Error::AiProvider(format!("Claude API error: {}", error.message)));
        }

        Ok(self
            .content
            .and_then(|c| c.into_iter().next())
            .map(|c| c.text.trim().to_string())
            .unwrap_or_default())
    }
}

/// Claude/Anthropic API provider
pub struct ClaudeApiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl ClaudeApiProvider {
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    async fn send(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let request = ClaudeRequest {
            model: self.model.clone(),
            max_tokens,
            temperature: 0.0,
            messages: vec![ClaudeMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(CLAUDE_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::AiProvider(format!("Claude API request failed: {}", e)))?;

        let claude_response: ClaudeResponse = response
            .json()
            .await
            .map_err(|e| Error::AiProvider(format!("Failed to parse Claude response: {}", e)))?;

        claude_response.into_text()
    }
}

#[async_trait::async_trait]
impl AiProvider for ClaudeApiProvider {
    fn name(&self) -> &str {
        "claude_api"
    }

    async fn summarize(&self, text: &str, params: &GenerationParams) -> Result<String> {
        tracing::debug!(model = %self.model, chars = text.len(), "claude summarize");
        let prompt = summary_prompt(text, params);
        self.send(&prompt, params.max_tokens()).await
    }

    async fn chat(&self, prompt: &str) -> Result<String> {
        self.send(prompt, CHAT_MAX_TOKENS).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success() {
        let response: ClaudeResponse = serde_json::from_str(
            r#"{"id":"msg_1","type":"message","content":[{"type":"text","text":" A short summary. "}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_text().unwrap(), "A short summary.");
    }

    #[test]
    fn test_parse_error() {
        let response: ClaudeResponse = serde_json::from_str(
            r#"{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}"#,
        )
        .unwrap();
        let err = response.into_text().unwrap_err();
        assert_eq!(err.to_string(), "AI provider error: Claude API error: invalid x-api-key");
    }

    #[test]
    fn test_request_shape() {
        let request = ClaudeRequest {
            model: "m".to_string(),
            max_tokens: 10,
            temperature: 0.0,
            messages: vec![ClaudeMessage {
                role: "user".to_string(),
                content: "hi".to_string(),
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["max_tokens"], 10);
        assert_eq!(value["temperature"], 0.0);
        assert_eq!(value["messages"][0]["role"], "user");
    }
}
