use std::path::PathBuf;

use scriptgen::{ScriptType, gemini, pipeline::DEFAULT_OUTPUT};

/// Generate action items, summaries or minutes from meeting notes using Gemini
#[derive(clap::Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Path to the input text file with meeting notes
    pub input_file: PathBuf,
    /// Output file path for the generated script
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// One of: action_items, summary, minutes
    #[arg(long, default_value_t = ScriptType::ActionItems)]
    pub script_type: ScriptType,
    #[arg(long, env = "GEMINI_MODEL", default_value = gemini::DEFAULT_MODEL)]
    pub model: String,
    #[arg(long, env = "GEMINI_API_BASE_URL", default_value = gemini::DEFAULT_BASE_URL)]
    pub api_base_url: String,
    /// Request timeout in seconds
    #[arg(long, env = "SCRIPTGEN_TIMEOUT")]
    pub timeout: Option<u64>,
    #[arg(long)]
    pub temperature: Option<f32>,
    /// Let the model think before answering
    #[arg(long)]
    pub thinking: bool,
    /// Prompt template file containing a {notes} placeholder
    #[arg(long)]
    pub template: Option<PathBuf>,
    /// Write only the body when the reply is a single fenced code block
    #[arg(long)]
    pub unwrap_fence: bool,
}
