use std::path::Path;

use anyhow::{bail, Result};

use precis_core::AppConfig;

const REDACTED: &str = "********";

fn redacted(config: &AppConfig) -> AppConfig {
    let mut config = config.clone();
    let ai = &mut config.ai;
    for key in [&mut ai.openai_api_key, &mut ai.claude_api_key, &mut ai.gemini_api_key] {
        if key.is_some() {
            *key = Some(REDACTED.to_string());
        }
    }
    config
}

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", redacted(config).to_toml()?);
    Ok(())
}

pub fn path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    AppConfig::default().save_to(config_path)?;
    println!("Wrote default configuration to {}", config_path.display());

    Ok(())
}
