use anyhow::Result;

use precis_core::{ai::Summarizer, AppConfig};

pub async fn run(mut config: AppConfig, prompt: &str, provider: Option<String>) -> Result<()> {
    if let Some(provider) = provider {
        config.ai.provider = provider;
    }

    tracing::debug!("OpenAI key loaded: {}", config.ai.openai_api_key.is_some());

    let summarizer = Summarizer::new(&config)?;
    let response = summarizer.chat(prompt).await?;

    println!("Response: {}", response);

    Ok(())
}
