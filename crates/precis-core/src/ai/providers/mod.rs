mod claude_api;
mod cli_base;
mod gemini_api;
mod lead;
mod openai;

pub use claude_api::ClaudeApiProvider;
pub use cli_base::{CliProvider, CliType};
pub use gemini_api::GeminiApiProvider;
pub use lead::LeadProvider;
pub use openai::OpenAiProvider;

use crate::{Error, Result};

/// Length and search settings handed to a provider unmodified.
///
/// `min_length` and `max_length` bound the summary length in words;
/// `beams` is the search width for providers that decode with beam search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    pub min_length: u32,
    pub max_length: u32,
    pub beams: u32,
}

impl GenerationParams {
    pub fn new(min_length: u32, max_length: u32, beams: u32) -> Self {
        Self {
            min_length,
            max_length,
            beams,
        }
    }

    /// Output token budget for chat-style APIs, leaving headroom over the word limit
    pub fn max_tokens(&self) -> u32 {
        self.max_length.saturating_mul(2).max(16)
    }
}

/// Prompt used by every chat-based provider for a single summarization call
pub(crate) fn summary_prompt(text: &str, params: &GenerationParams) -> String {
    format!(
        "Summarize the following text in {min} to {max} words. \
Be concise, keep the order of events, and respond with the summary only.\n\n\
---BEGIN TEXT---\n{text}\n---END TEXT---",
        min = params.min_length,
        max = params.max_length,
    )
}

/// Trait for text generation backends
#[async_trait::async_trait]
pub trait AiProvider: Send + Sync {
    /// Short provider name used in logs
    fn name(&self) -> &str;

    /// Summarize `text` once. Decoding is deterministic so identical inputs
    /// give identical output.
    async fn summarize(&self, text: &str, params: &GenerationParams) -> Result<String>;

    /// Free-form completion for a single user message
    async fn chat(&self, _prompt: &str) -> Result<String> {
        Err(Error::AiProvider(format!(
            "{} provider does not support chat",
            self.name()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_tokens() {
        assert_eq!(GenerationParams::new(60, 160, 4).max_tokens(), 320);
        assert_eq!(GenerationParams::new(0, 0, 1).max_tokens(), 16);
        assert_eq!(GenerationParams::new(0, u32::MAX, 1).max_tokens(), u32::MAX);
    }

    #[test]
    fn test_summary_prompt_carries_lengths_and_text() {
        let prompt = summary_prompt("The text.", &GenerationParams::new(40, 120, 2));
        assert!(prompt.contains("in 40 to 120 words"));
        assert!(prompt.contains("---BEGIN TEXT---\nThe text.\n---END TEXT---"));
    }
}
