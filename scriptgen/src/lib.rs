mod error;
mod generate;
mod llm;
mod notes;
mod output;
pub mod pipeline;
mod prompt;
mod script_type;

pub use error::{Error, InputError};
pub use generate::{GeneratedScript, generate_script, unwrap_fence};
pub use llm::{LLM, gemini};
pub use notes::MeetingNotes;
pub use output::write_script;
pub use prompt::PromptTemplate;
pub use script_type::ScriptType;
