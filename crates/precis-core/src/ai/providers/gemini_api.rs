use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{summary_prompt, AiProvider, GenerationParams};
use crate::{Error, Result};

const CHAT_MAX_TOKENS: u32 = 1024;

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiError>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContentResponse,
}

#[derive(Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Deserialize)]
struct GeminiPartResponse {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct GeminiError {
    message: String,
}

impl GeminiResponse {
    fn into_text(self) -> Result<String> {
        if let Some(error) = self.error {
            return Err(Error::AiProvider(format!("Gemini API error: {}", error.message)));
        }

        Ok(self
            .candidates
            .and_then(|c| c.into_iter().next())
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .map(|text| text.trim().to_string())
            .unwrap_or_default())
    }
}

/// Gemini API provider
pub struct GeminiApiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiApiProvider {
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

    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        );

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: max_tokens,
                temperature: 0.0,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::AiProvider(format!("Gemini API request failed: {}", e)))?;

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| Error::AiProvider(format!("Failed to parse Gemini response: {}", e)))?;

        gemini_response.into_text()
    }
}

#[async_trait::async_trait]
impl AiProvider for GeminiApiProvider {
    fn name(&self) -> &str {
        "gemini_api"
    }

    async fn summarize(&self, text: &str, params: &GenerationParams) -> Result<String> {
        tracing::debug!(model = %self.model, chars = text.len(), "gemini summarize");
        let prompt = summary_prompt(text, params);
        self.generate(&prompt, params.max_tokens()).await
    }

    async fn chat(&self, prompt: &str) -> Result<String> {
        self.generate(prompt, CHAT_MAX_TOKENS).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_joins_parts() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"First half, "},{"text":"second half.\n"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_text().unwrap(), "First half, second half.");
    }

    #[test]
    fn test_parse_error() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#,
        )
        .unwrap();
        assert!(response.into_text().is_err());
    }

    #[test]
    fn test_request_uses_camel_case_config() {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: "hi".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: 64,
                temperature: 0.0,
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 64);
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
    }
}
