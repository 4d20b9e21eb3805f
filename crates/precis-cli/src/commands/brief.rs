use anyhow::Result;

use precis_core::{ai::Summarizer, AppConfig};

use crate::input::read_text;

pub async fn run(mut config: AppConfig, text: Option<String>, provider: Option<String>) -> Result<()> {
    if let Some(provider) = provider {
        config.ai.provider = provider;
    }

    let summarizer = Summarizer::new(&config)?;

    let text = match text {
        Some(text) => text,
        None => read_text(None, "Paste a short paragraph below.").await?,
    };

    println!("{}", summarizer.summarize_brief(&text).await?);

    Ok(())
}
