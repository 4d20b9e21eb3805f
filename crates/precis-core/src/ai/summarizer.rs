use std::sync::Arc;

use tokio::task::JoinSet;

use super::providers::{
    AiProvider, ClaudeApiProvider, CliProvider, CliType, GeminiApiProvider, GenerationParams,
    LeadProvider, OpenAiProvider,
};
use super::report::Report;
use crate::config::AppConfig;
use crate::text::chunk;
use crate::{Error, Result};

/// Build the provider selected by `ai.provider`
pub fn build_provider(config: &AppConfig) -> Result<Arc<dyn AiProvider>> {
    let ai = &config.ai;

    let provider: Arc<dyn AiProvider> = match ai.provider.as_str() {
        // API-based providers
        "openai" => {
            let api_key = ai.openai_api_key.as_ref().ok_or_else(|| {
                Error::Config(
                    "OpenAI API key not configured (set OPENAI_API_KEY or ai.openai_api_key)"
                        .to_string(),
                )
            })?;
            Arc::new(OpenAiProvider::new(
                api_key,
                &ai.openai_model,
                ai.openai_base_url.as_deref(),
            ))
        }
        "claude_api" => {
            let api_key = ai.claude_api_key.as_ref().ok_or_else(|| {
                Error::Config(
                    "Claude API key not configured (set ANTHROPIC_API_KEY or ai.claude_api_key)"
                        .to_string(),
                )
            })?;
            Arc::new(ClaudeApiProvider::new(
                api_key,
                &ai.claude_model,
                ai.request_timeout_secs,
            )?)
        }
        "gemini_api" => {
            let api_key = ai.gemini_api_key.as_ref().ok_or_else(|| {
                Error::Config(
                    "Gemini API key not configured (set GEMINI_API_KEY or ai.gemini_api_key)"
                        .to_string(),
                )
            })?;
            Arc::new(GeminiApiProvider::new(
                api_key,
                &ai.gemini_model,
                ai.request_timeout_secs,
            )?)
        }
        // CLI-based providers
        "claude_cli" => Arc::new(CliProvider::new(CliType::Claude)),
        "gemini_cli" => Arc::new(CliProvider::new(CliType::Gemini)),
        "codex_cli" => Arc::new(CliProvider::new(CliType::Codex)),
        // Offline
        "lead" => Arc::new(LeadProvider::new()),
        other => {
            return Err(Error::Config(format!("Unknown AI provider: {}", other)));
        }
    };

    tracing::debug!("Using AI provider: {}", provider.name());
    Ok(provider)
}

/// Chunked two-pass summarizer over a configured provider
pub struct Summarizer {
    provider: Arc<dyn AiProvider>,
    params: GenerationParams,
    brief_params: GenerationParams,
    chunk_chars: usize,
    concurrency: usize,
}

impl Summarizer {
    /// Create a new summarizer based on configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let provider = build_provider(config)?;
        Ok(Self::with_provider(provider, config))
    }

    /// Create a summarizer around an existing provider
    pub fn with_provider(provider: Arc<dyn AiProvider>, config: &AppConfig) -> Self {
        let s = &config.summarizer;
        let b = &config.brief;

        Self {
            provider,
            params: GenerationParams::new(s.min_length, s.max_length, s.beams),
            brief_params: GenerationParams::new(b.min_length, b.max_length, b.beams),
            chunk_chars: s.chunk_chars.max(1),
            concurrency: s.concurrency.max(1),
        }
    }

    /// Summarize a possibly long article.
    ///
    /// The article is split into paragraph-aligned chunks, each chunk is
    /// summarized, and when there was more than one chunk the joined partial
    /// summaries are summarized once more. Provider errors are returned as-is.
    pub async fn summarize(&self, article: &str) -> Result<Report> {
        if article.trim().is_empty() {
            return Ok(Report::NoContent);
        }

        let chunks = chunk(article, self.chunk_chars);
        let chunk_count = chunks.len();
        tracing::info!(
            "Summarizing {} chars in {} chunk(s) with {}",
            article.chars().count(),
            chunk_count,
            self.provider.name()
        );

        let partial = self.summarize_chunks(chunks).await?;
        let combined = partial.join("\n");

        let summary = if chunk_count > 1 {
            tracing::info!("Merging {} partial summaries", chunk_count);
            self.provider.summarize(&combined, &self.params).await?
        } else {
            combined
        };

        Ok(Report::summary(summary, chunk_count))
    }

    /// Summarize a short text in a single call, without chunking.
    /// Blank input gives an empty summary.
    pub async fn summarize_brief(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        self.provider.summarize(text, &self.brief_params).await
    }

    /// Send a single prompt to the provider
    pub async fn chat(&self, prompt: &str) -> Result<String> {
        self.provider.chat(prompt).await
    }

    /// Summarize every chunk, returning results in chunk order
    async fn summarize_chunks(&self, chunks: Vec<String>) -> Result<Vec<String>> {
        if self.concurrency <= 1 || chunks.len() <= 1 {
            let mut partial = Vec::with_capacity(chunks.len());
            for (i, c) in chunks.iter().enumerate() {
                tracing::debug!("Summarizing chunk {}/{}", i + 1, chunks.len());
                partial.push(self.provider.summarize(c, &self.params).await?);
            }
            return Ok(partial);
        }

        let total = chunks.len();
        let mut slots: Vec<Option<String>> = vec![None; total];
        let mut join_set: JoinSet<(usize, Result<String>)> = JoinSet::new();
        let mut pending = chunks.into_iter().enumerate();

        let spawn_task = |join_set: &mut JoinSet<(usize, Result<String>)>, index: usize, text: String| {
            let provider = Arc::clone(&self.provider);
            let params = self.params;
            join_set.spawn(async move {
                tracing::debug!("Summarizing chunk {}/{}", index + 1, total);
                (index, provider.summarize(&text, &params).await)
            });
        };

        for _ in 0..self.concurrency {
            if let Some((index, text)) = pending.next() {
                spawn_task(&mut join_set, index, text);
            }
        }

        while let Some(joined) = join_set.join_next().await {
            let (index, result) =
                joined.map_err(|e| Error::AiProvider(format!("Task join error: {}", e)))?;
            slots[index] = Some(result?);

            if let Some((index, text)) = pending.next() {
                spawn_task(&mut join_set, index, text);
            }
        }

        Ok(slots.into_iter().flatten().collect())
    }
}
