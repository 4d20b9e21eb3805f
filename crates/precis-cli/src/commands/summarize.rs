use anyhow::Result;

use precis_core::{ai::Summarizer, AppConfig};

use crate::input::read_text;
use crate::SummarizeArgs;

fn apply_overrides(config: &mut AppConfig, args: &SummarizeArgs) {
    if let Some(provider) = &args.provider {
        config.ai.provider = provider.clone();
    }
    let s = &mut config.summarizer;
    if let Some(v) = args.min_length {
        s.min_length = v;
    }
    if let Some(v) = args.max_length {
        s.max_length = v;
    }
    if let Some(v) = args.beams {
        s.beams = v;
    }
    if let Some(v) = args.chunk_chars {
        s.chunk_chars = v;
    }
    if let Some(v) = args.concurrency {
        s.concurrency = v;
    }
}

pub async fn run(mut config: AppConfig, args: SummarizeArgs) -> Result<()> {
    apply_overrides(&mut config, &args);

    // Fail on a missing key before asking for input
    let summarizer = Summarizer::new(&config)?;

    let article = read_text(args.file.as_deref(), "Paste your article below.").await?;
    let report = summarizer.summarize(&article).await?;

    println!("\n{}\n", report);

    Ok(())
}
