use std::time::Duration;

use scriptgen::{PromptTemplate, gemini::GeminiError, pipeline::Job};

use crate::cli::Cli;

pub struct AppConfig {
    pub ai: AiConfig,
    pub job: Job,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, scriptgen::Error> {
        let api_key = resolve_api_key(cli.api_key)?;
        let template = cli
            .template
            .map(PromptTemplate::from_path)
            .transpose()?;

        Ok(Self {
            ai: AiConfig {
                api_key,
                model: cli.model,
                base_url: cli.api_base_url,
                timeout: cli.timeout.map(Duration::from_secs),
                temperature: cli.temperature,
                thinking: cli.thinking,
            },
            job: Job {
                input: cli.input_file,
                output: cli.output,
                script_type: cli.script_type,
                template,
                unwrap_fence: cli.unwrap_fence,
            },
        })
    }
}

pub struct AiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub temperature: Option<f32>,
    pub thinking: bool,
}

/// The flag wins over the environment; clap has already merged the two.
pub fn resolve_api_key(api_key: Option<String>) -> Result<String, scriptgen::Error> {
    api_key
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| GeminiError::MissingApiKey.into())
}
