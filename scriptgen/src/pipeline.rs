//! One generation run: load notes, render the prompt, call the model once and
//! write the completion.

use std::path::PathBuf;

use crate::{
    Error, LLM, MeetingNotes, PromptTemplate, ScriptType, generate_script, unwrap_fence,
    write_script,
};

pub const DEFAULT_OUTPUT: &str = "output_script.txt";

#[derive(Debug, Clone)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub script_type: ScriptType,
    /// Overrides the built-in template for `script_type`.
    pub template: Option<PromptTemplate>,
    pub unwrap_fence: bool,
}

impl Job {
    pub fn new(input: impl Into<PathBuf>, script_type: ScriptType) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            script_type,
            template: None,
            unwrap_fence: false,
        }
    }

    pub fn prompt_template(&self) -> PromptTemplate {
        self.template
            .clone()
            .unwrap_or_else(|| PromptTemplate::for_type(self.script_type))
    }
}

/// Run `job` against `llm`, returning the path the script was written to.
///
/// Nothing is written unless the model call succeeds.
pub async fn run(job: &Job, llm: &mut impl LLM) -> Result<PathBuf, Error> {
    log::info!("Reading meeting notes from: {}", job.input.display());
    let notes = MeetingNotes::from_path(&job.input)?;
    let template = job.prompt_template();

    log::info!("Generating {} script... (this may take a moment)", job.script_type);
    let script = generate_script(&notes, &template, llm).await?;

    let text = if job.unwrap_fence {
        unwrap_fence(&script.text)
    } else {
        script.text.as_str().into()
    };
    let path = write_script(&job.output, &text)?;
    log::info!("Script successfully saved to: {}", path.display());

    Ok(path)
}
