use std::fmt::Write as _;

use anyhow::{Context, Result};

use precis_core::{
    text::{validate, History, Operation, OutputStyle, Processed},
    AppConfig,
};

use crate::input::read_text;
use crate::ProcessArgs;

fn style_tag(style: OutputStyle) -> &'static str {
    match style {
        OutputStyle::Info => "info",
        OutputStyle::Success => "success",
        OutputStyle::Warning => "warning",
    }
}

fn render(op: Operation, original: &str, processed: &Processed, show_steps: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Original:\n{}\n", original);
    let _ = writeln!(
        out,
        "Processed ({}) [{}]:\n{}",
        op,
        style_tag(op.style()),
        processed.output
    );

    if show_steps {
        let _ = writeln!(out, "\nProcessing steps:");
        for (i, step) in processed.steps.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, step);
        }
    }

    out
}

pub async fn run(config: &AppConfig, args: ProcessArgs) -> Result<()> {
    let settings = &config.processor;
    let char_limit = args.char_limit.unwrap_or(settings.char_limit);
    let min_length = args.min_length.unwrap_or(settings.min_length);
    let show_steps = settings.show_steps && !args.no_steps;

    let text = match args.text {
        Some(text) => text,
        None => read_text(None, "Type or paste text below.").await?,
    };

    for warning in validate(&text, min_length, char_limit)? {
        eprintln!("Warning: {}", warning);
    }

    let mut history = History::new(settings.history_size);
    let mut last = None;

    for op in &args.operations {
        let processed = op.apply(&text);
        tracing::debug!("Applied {}", op);

        println!("{}", render(*op, &text, &processed, show_steps));
        history.record(*op, &processed.output);
        last = Some(processed.output);
    }

    println!("Processing complete.");

    if let (Some(path), Some(output)) = (&args.output, &last) {
        tokio::fs::write(path, output)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Saved result to {}", path.display());
    }

    println!("\nRecent operations:");
    if history.is_empty() {
        println!("  No history yet.");
    }
    for entry in history.recent() {
        println!("  {}", entry.line());
    }

    Ok(())
}
