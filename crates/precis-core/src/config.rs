use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Chunk size that keeps each request inside a summarization model's
/// comfortable input range
pub const DEFAULT_CHUNK_CHARS: usize = 1200;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub summarizer: SummarizerConfig,
    #[serde(default)]
    pub brief: BriefConfig,
    #[serde(default)]
    pub processor: ProcessorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// AI provider: "openai", "claude_api", "gemini_api", "claude_cli", "gemini_cli", "codex_cli", "lead"
    #[serde(default = "default_ai_provider")]
    pub provider: String,
    /// OpenAI API key (for openai provider)
    #[serde(default)]
    pub openai_api_key: Option<String>,
    /// Base URL of an OpenAI-compatible endpoint
    #[serde(default)]
    pub openai_base_url: Option<String>,
    /// OpenAI model name
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    /// Claude/Anthropic API key (for claude_api provider)
    #[serde(default)]
    pub claude_api_key: Option<String>,
    /// Claude model name
    #[serde(default = "default_claude_model")]
    pub claude_model: String,
    /// Gemini API key (for gemini_api provider)
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    /// Gemini model name
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    /// HTTP timeout for API providers
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: default_ai_provider(),
            openai_api_key: None,
            openai_base_url: None,
            openai_model: default_openai_model(),
            claude_api_key: None,
            claude_model: default_claude_model(),
            gemini_api_key: None,
            gemini_model: default_gemini_model(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Generation settings for the chunked article summarizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    #[serde(default = "default_min_length")]
    pub min_length: u32,
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    #[serde(default = "default_beams")]
    pub beams: u32,
    /// Maximum characters per chunk
    #[serde(default = "default_chunk_chars")]
    pub chunk_chars: usize,
    /// Chunks summarized at the same time (1 = sequential)
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
            beams: default_beams(),
            chunk_chars: default_chunk_chars(),
            concurrency: default_concurrency(),
        }
    }
}

/// Generation settings for single-paragraph summaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefConfig {
    #[serde(default = "default_brief_min_length")]
    pub min_length: u32,
    #[serde(default = "default_brief_max_length")]
    pub max_length: u32,
    #[serde(default = "default_brief_beams")]
    pub beams: u32,
}

impl Default for BriefConfig {
    fn default() -> Self {
        Self {
            min_length: default_brief_min_length(),
            max_length: default_brief_max_length(),
            beams: default_brief_beams(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Warn when input is longer than this many characters
    #[serde(default = "default_char_limit")]
    pub char_limit: usize,
    /// Reject input shorter than this many characters
    #[serde(default)]
    pub min_length: usize,
    /// Print the processing steps after each result
    #[serde(default = "default_true")]
    pub show_steps: bool,
    /// Number of recent operations to keep
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            char_limit: default_char_limit(),
            min_length: 0,
            show_steps: default_true(),
            history_size: default_history_size(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

fn default_ai_provider() -> String {
    "openai".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_claude_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_request_timeout() -> u64 {
    60
}

fn default_min_length() -> u32 {
    60
}

fn default_max_length() -> u32 {
    160
}

fn default_beams() -> u32 {
    4
}

fn default_chunk_chars() -> usize {
    DEFAULT_CHUNK_CHARS
}

fn default_concurrency() -> usize {
    1
}

fn default_brief_min_length() -> u32 {
    40
}

fn default_brief_max_length() -> u32 {
    120
}

fn default_brief_beams() -> u32 {
    2
}

fn default_char_limit() -> usize {
    100
}

fn default_history_size() -> usize {
    5
}

/// Load variables from a `.env` file in the working directory, if present
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("Failed to load .env file: {}", e),
    }
}

impl AppConfig {
    /// Load configuration from `path`, falling back to defaults if it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/precis/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("precis")
            .join("config.toml")
    }

    /// Overlay provider settings from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Overlay provider settings from `lookup`; empty values are ignored
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(provider) = get("PRECIS_PROVIDER") {
            self.ai.provider = provider;
        }
        if let Some(key) = get("OPENAI_API_KEY") {
            self.ai.openai_api_key = Some(key);
        }
        if let Some(url) = get("OPENAI_BASE_URL") {
            self.ai.openai_base_url = Some(url);
        }
        if let Some(model) = get("OPENAI_MODEL") {
            self.ai.openai_model = model;
        }
        if let Some(key) = get("ANTHROPIC_API_KEY") {
            self.ai.claude_api_key = Some(key);
        }
        if let Some(key) = get("GEMINI_API_KEY") {
            self.ai.gemini_api_key = Some(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ai.provider, "openai");
        assert_eq!(config.ai.openai_model, "gpt-4o-mini");
        assert_eq!(config.summarizer.min_length, 60);
        assert_eq!(config.summarizer.max_length, 160);
        assert_eq!(config.summarizer.beams, 4);
        assert_eq!(config.summarizer.chunk_chars, 1200);
        assert_eq!(config.brief.min_length, 40);
        assert_eq!(config.brief.max_length, 120);
        assert_eq!(config.brief.beams, 2);
        assert_eq!(config.processor.history_size, 5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [ai]
            provider = "lead"

            [summarizer]
            beams = 1
            "#,
        )
        .unwrap();

        assert_eq!(config.ai.provider, "lead");
        assert_eq!(config.summarizer.beams, 1);
        assert_eq!(config.summarizer.max_length, 160);
        assert_eq!(config.processor.char_limit, 100);
    }

    #[test]
    fn test_env_overlay() {
        let env: HashMap<&str, &str> = [
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:11434/v1"),
            ("OPENAI_MODEL", ""),
            ("PRECIS_PROVIDER", "claude_api"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_env_with(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.ai.provider, "claude_api");
        assert_eq!(config.ai.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.ai.openai_base_url.as_deref(), Some("http://localhost:11434/v1"));
        // empty values do not clobber defaults
        assert_eq!(config.ai.openai_model, "gpt-4o-mini");
        assert!(config.ai.claude_api_key.is_none());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.summarizer.concurrency = 3;
        config.ai.openai_base_url = Some("http://example.invalid/v1".to_string());
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.summarizer.concurrency, 3);
        assert_eq!(loaded.ai.openai_base_url.as_deref(), Some("http://example.invalid/v1"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded.ai.provider, "openai");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[summarizer]\nbeams = \"many\"\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
