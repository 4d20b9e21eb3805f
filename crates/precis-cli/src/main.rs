use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt};

use precis_core::{load_dotenv, text::Operation, AppConfig};

mod commands;
mod input;

#[derive(Parser)]
#[command(name = "precis")]
#[command(author, version, about = "Summarize long articles and process text from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of ~/.config/precis/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize an article read from stdin or a file
    Summarize(SummarizeArgs),
    /// Summarize a short paragraph in a single pass
    Brief {
        /// Text to summarize (reads stdin when omitted)
        text: Option<String>,
        /// AI provider to use
        #[arg(short, long)]
        provider: Option<String>,
    },
    /// Send a single prompt to the configured chat model
    Ask {
        /// Prompt text
        prompt: String,
        /// AI provider to use
        #[arg(short, long)]
        provider: Option<String>,
    },
    /// Apply text operations (counts, reverse, case changes)
    Process(ProcessArgs),
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Default)]
pub struct SummarizeArgs {
    /// Read the article from a file instead of stdin
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// AI provider to use
    #[arg(short, long)]
    pub provider: Option<String>,
    /// Minimum summary length
    #[arg(long)]
    pub min_length: Option<u32>,
    /// Maximum summary length
    #[arg(long)]
    pub max_length: Option<u32>,
    /// Beam width for providers that use beam search
    #[arg(long)]
    pub beams: Option<u32>,
    /// Maximum characters per chunk
    #[arg(long)]
    pub chunk_chars: Option<usize>,
    /// Chunks summarized at the same time
    #[arg(long)]
    pub concurrency: Option<usize>,
}

#[derive(clap::Args)]
pub struct ProcessArgs {
    /// Text to process (reads stdin when omitted)
    pub text: Option<String>,
    /// Operation to apply; repeat to apply several
    #[arg(short = 'o', long = "op", default_value = "word-count")]
    pub operations: Vec<Operation>,
    /// Warn when the input is longer than this many characters
    #[arg(long)]
    pub char_limit: Option<usize>,
    /// Reject input shorter than this many characters
    #[arg(long)]
    pub min_length: Option<usize>,
    /// Do not print processing steps
    #[arg(long)]
    pub no_steps: bool,
    /// Write the last result to this file
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration with secrets hidden
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Filter directive: RUST_LOG when set and non-empty, otherwise `fallback`
fn filter_directive(rust_log: Option<&str>, fallback: &str) -> String {
    match rust_log.map(str::trim) {
        Some(directive) if !directive.is_empty() => directive.to_string(),
        _ => fallback.to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging on stderr so reports on stdout stay clean
    let rust_log = std::env::var("RUST_LOG").ok().filter(|v| !v.trim().is_empty());
    let (filter, filter_handle) = reload::Layer::new(tracing_subscriber::EnvFilter::new(
        filter_directive(rust_log.as_deref(), DEFAULT_LOG_LEVEL),
    ));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let mut config = AppConfig::load_from(&config_path)?;

    // The config file only sets the level when RUST_LOG does not
    if rust_log.is_none() {
        filter_handle.reload(tracing_subscriber::EnvFilter::new(filter_directive(
            None,
            &config.general.log_level,
        )))?;
    }

    load_dotenv();
    config.apply_env();

    match cli.command {
        Some(Commands::Summarize(args)) => commands::summarize::run(config, args).await,
        None => commands::summarize::run(config, SummarizeArgs::default()).await,
        Some(Commands::Brief { text, provider }) => {
            commands::brief::run(config, text, provider).await
        }
        Some(Commands::Ask { prompt, provider }) => {
            commands::ask::run(config, &prompt, provider).await
        }
        Some(Commands::Process(args)) => commands::process::run(&config, args).await,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_filter_directive_prefers_rust_log() {
        assert_eq!(filter_directive(Some("precis_core=debug"), "warn"), "precis_core=debug");
        assert_eq!(filter_directive(Some("  "), "info"), "info");
        assert_eq!(filter_directive(None, DEFAULT_LOG_LEVEL), "warn");
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process_operations() {
        let cli = Cli::parse_from(["precis", "process", "-o", "uppercase", "--op", "title-case", "hi"]);
        match cli.command {
            Some(Commands::Process(args)) => {
                assert_eq!(args.operations, vec![Operation::Uppercase, Operation::TitleCase]);
                assert_eq!(args.text.as_deref(), Some("hi"));
            }
            _ => panic!("expected process command"),
        }
    }

    #[test]
    fn test_process_defaults_to_word_count() {
        let cli = Cli::parse_from(["precis", "process"]);
        match cli.command {
            Some(Commands::Process(args)) => assert_eq!(args.operations, vec![Operation::WordCount]),
            _ => panic!("expected process command"),
        }
    }

    #[test]
    fn test_unknown_operation_rejected() {
        assert!(Cli::try_parse_from(["precis", "process", "-o", "shout"]).is_err());
    }

    #[test]
    fn test_summarize_overrides() {
        let cli = Cli::parse_from([
            "precis", "--config", "/tmp/c.toml", "summarize", "--beams", "2", "-p", "lead",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        match cli.command {
            Some(Commands::Summarize(args)) => {
                assert_eq!(args.beams, Some(2));
                assert_eq!(args.provider.as_deref(), Some("lead"));
                assert!(args.file.is_none());
            }
            _ => panic!("expected summarize command"),
        }
    }
}
