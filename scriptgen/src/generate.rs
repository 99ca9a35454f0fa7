use std::borrow::Cow;

use crate::{Error, LLM, MeetingNotes, PromptTemplate};

/// Text returned by the model for one prompt.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct GeneratedScript {
    pub text: String,
}

pub async fn generate_script(
    notes: &MeetingNotes,
    template: &PromptTemplate,
    llm: &mut impl LLM,
) -> Result<GeneratedScript, Error> {
    let prompt = template.render(notes)?;
    let text = llm.generate(&prompt).await.map_err(Into::<Error>::into)?;

    Ok(GeneratedScript { text })
}

/// Strip a single Markdown code fence wrapping the whole text.
///
/// Returns the text untouched unless it is exactly one fenced block.
pub fn unwrap_fence(text: &str) -> Cow<'_, str> {
    let trimmed = text.trim();
    let lines: Vec<&str> = trimmed.lines().collect();
    let fences = lines
        .iter()
        .filter(|line| line.trim_start().starts_with("```"))
        .count();

    if lines.len() < 2
        || fences != 2
        || !lines[0].starts_with("```")
        || lines[lines.len() - 1].trim() != "```"
    {
        return Cow::Borrowed(text);
    }

    let mut body = lines[1..lines.len() - 1].join("\n");
    body.push('\n');
    Cow::Owned(body)
}
