use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};

use super::{summary_prompt, AiProvider, GenerationParams};
use crate::{Error, Result};

/// OpenAI API provider, also usable against OpenAI-compatible endpoints
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: &str, model: &str, base_url: Option<&str>) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(base_url) = base_url {
            config = config.with_api_base(base_url);
        }

        Self {
            client: Client::with_config(config),
            model: model.to_string(),
        }
    }

    async fn complete(&self, prompt: &str, max_tokens: Option<u32>) -> Result<String> {
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(&self.model)
            .messages(vec![ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()
                    .map_err(|e| Error::AiProvider(e.to_string()))?,
            )])
            .temperature(0.0);
        if let Some(max_tokens) = max_tokens {
            args.max_tokens(max_tokens);
        }
        let request = args.build().map_err(|e| Error::AiProvider(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| Error::AiProvider(e.to_string()))?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        Ok(content.trim().to_string())
    }
}

#[async_trait::async_trait]
impl AiProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn summarize(&self, text: &str, params: &GenerationParams) -> Result<String> {
        tracing::debug!(model = %self.model, chars = text.len(), "openai summarize");
        let prompt = summary_prompt(text, params);
        self.complete(&prompt, Some(params.max_tokens())).await
    }

    async fn chat(&self, prompt: &str) -> Result<String> {
        self.complete(prompt, None).await
    }
}
