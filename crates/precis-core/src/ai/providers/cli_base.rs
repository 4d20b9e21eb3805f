use std::io::Write;
use std::process::{Command, Stdio};

use super::{summary_prompt, AiProvider, GenerationParams};
use crate::{Error, Result};

/// CLI provider type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliType {
    Claude,
    Gemini,
    Codex,
}

impl CliType {
    fn command(&self) -> &'static str {
        match self {
            CliType::Claude => "claude",
            CliType::Gemini => "gemini",
            CliType::Codex => "codex",
        }
    }

    fn base_args(&self) -> Vec<&'static str> {
        match self {
            CliType::Claude => vec!["-p", "--tools", ""],
            CliType::Gemini => vec!["-p"],
            CliType::Codex => vec!["exec"], // Codex uses exec subcommand
        }
    }

    fn uses_stdin(&self) -> bool {
        match self {
            CliType::Claude | CliType::Gemini => true,
            CliType::Codex => false, // Codex takes prompt as command line argument
        }
    }

    fn provider_name(&self) -> &'static str {
        match self {
            CliType::Claude => "claude_cli",
            CliType::Gemini => "gemini_cli",
            CliType::Codex => "codex_cli",
        }
    }
}

fn run_cli(cli_type: CliType, prompt: &str) -> Result<String> {
    let mut cmd = Command::new(cli_type.command());
    cmd.args(cli_type.base_args());

    if !cli_type.uses_stdin() {
        cmd.arg(prompt);
    }

    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            Error::AiProvider(format!("Failed to spawn {} CLI: {}", cli_type.command(), e))
        })?;

    if cli_type.uses_stdin() {
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(prompt.as_bytes()).map_err(|e| {
                Error::AiProvider(format!(
                    "Failed to write to {} stdin: {}",
                    cli_type.command(),
                    e
                ))
            })?;
        }
    }

    let output = child.wait_with_output().map_err(|e| {
        Error::AiProvider(format!("Failed to wait for {} CLI: {}", cli_type.command(), e))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::AiProvider(format!(
            "{} CLI error: {}",
            cli_type.command(),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Provider that shells out to the Claude, Gemini or Codex command line tools
pub struct CliProvider {
    cli_type: CliType,
}

impl CliProvider {
    pub fn new(cli_type: CliType) -> Self {
        Self { cli_type }
    }

    async fn run(&self, prompt: String) -> Result<String> {
        let cli_type = self.cli_type;

        // The CLIs are synchronous processes
        tokio::task::spawn_blocking(move || run_cli(cli_type, &prompt))
            .await
            .map_err(|e| Error::AiProvider(format!("Task join error: {}", e)))?
    }
}

#[async_trait::async_trait]
impl AiProvider for CliProvider {
    fn name(&self) -> &str {
        self.cli_type.provider_name()
    }

    async fn summarize(&self, text: &str, params: &GenerationParams) -> Result<String> {
        tracing::debug!(cli = self.cli_type.command(), chars = text.len(), "cli summarize");
        let prompt = format!(
            "{}\n\nDo NOT try to fetch any URLs. Use ONLY the text provided above.",
            summary_prompt(text, params)
        );
        self.run(prompt).await
    }

    async fn chat(&self, prompt: &str) -> Result<String> {
        self.run(prompt.to_string()).await
    }
}
