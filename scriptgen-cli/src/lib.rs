use std::{fs, path::PathBuf};

use clap::Parser;
use scriptgen::{gemini::Gemini, pipeline};

use crate::{
    cli::Cli,
    config::{AiConfig, AppConfig},
};

mod cli;
mod config;

const API_KEY_HINT: &str = "Make sure you have:
1. Set the GEMINI_API_KEY environment variable, or put GEMINI_API_KEY=<key> in a .env file
2. Or passed the key with --api-key <key>

To get a Gemini API key, sign in at https://aistudio.google.com/apikey";

pub async fn run() -> anyhow::Result<PathBuf> {
    let args = Cli::parse();
    let config = AppConfig::from_cli(args)?;

    let mut llm = init_llm(&config.ai)?;
    log::info!("Using Gemini model {}", config.ai.model);

    let path = pipeline::run(&config.job, &mut llm).await?;
    Ok(fs::canonicalize(&path).unwrap_or(path))
}

fn init_llm(config: &AiConfig) -> anyhow::Result<Gemini<'_>> {
    let mut llm = Gemini::new(&config.api_key, &config.model).with_base_url(&config.base_url);
    if let Some(timeout) = config.timeout {
        llm = llm.with_timeout(timeout)?;
    }
    llm.set_thinking(config.thinking);
    llm.set_temperature(config.temperature);
    Ok(llm)
}

/// Extra guidance printed under an error, if any applies.
pub fn hint(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<scriptgen::Error>() {
        Some(err) if err.is_auth() => Some(API_KEY_HINT),
        _ => None,
    }
}
