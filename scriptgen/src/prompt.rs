use std::{borrow::Cow, collections::HashMap, fs, path::Path};

use dynfmt::Format;

use crate::{InputError, MeetingNotes, ScriptType};

const ACTION_ITEMS: &str = r###"You are an expert at extracting action items from meetings. Analyze the following meeting notes and identify every actionable task.

Meeting notes:
{notes}

For each action item, provide:
- The specific task
- Who is responsible (if mentioned)
- Any deadline or timeframe (if mentioned)

Respond in Markdown with a "# Action Items" heading followed by one "- [ ] " checklist line per task."###;

const SUMMARY: &str = r###"You are an expert meeting summarizer. Read the following meeting notes and write a concise summary.

Meeting notes:
{notes}

Cover the main topics discussed, the key decisions or conclusions, and any important highlights.

Respond in Markdown with a "# Summary" heading followed by 3-5 bullet points starting with "- "."###;

const MINUTES: &str = r###"You are an experienced meeting secretary. Turn the following meeting notes into formal meeting minutes.

Meeting notes:
{notes}

Include these sections, omitting any the notes give no information for:
- Meeting title, date and attendees
- Agenda
- Discussion, one subsection per topic
- Decisions
- Action items with owners and deadlines
- Next meeting

Respond in Markdown with a "# Meeting Minutes" heading and a "## " heading for each section."###;

const NOTES_PLACEHOLDER: &str = "{notes}";

/// A prompt pattern with a single `{notes}` placeholder.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct PromptTemplate {
    template: Cow<'static, str>,
}

impl PromptTemplate {
    /// The built-in template for `script_type`.
    pub fn for_type(script_type: ScriptType) -> Self {
        let template = match script_type {
            ScriptType::ActionItems => ACTION_ITEMS,
            ScriptType::Summary => SUMMARY,
            ScriptType::Minutes => MINUTES,
        };
        Self {
            template: Cow::Borrowed(template),
        }
    }

    /// A user-supplied template.
    ///
    /// `{notes}` must appear at least once and is the only brace sequence
    /// allowed; there is no escape for literal `{` or `}`.
    pub fn custom(template: impl Into<String>) -> Result<Self, InputError> {
        let template = template.into();
        if !template.contains(NOTES_PLACEHOLDER) {
            return Err(InputError::Template(format!(
                "template must contain the {NOTES_PLACEHOLDER} placeholder"
            )));
        }
        if template
            .replace(NOTES_PLACEHOLDER, "")
            .contains(['{', '}'])
        {
            return Err(InputError::Template(format!(
                "braces are only allowed in the {NOTES_PLACEHOLDER} placeholder"
            )));
        }
        Ok(Self {
            template: Cow::Owned(template),
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let template = fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::custom(template)
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Interpolate the notes into the template.
    pub fn render(&self, notes: &MeetingNotes) -> Result<String, InputError> {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("notes", notes.as_str());

        dynfmt::SimpleCurlyFormat
            .format(&self.template, &map)
            .map(|s| s.into_owned())
            .map_err(|e| InputError::Template(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{InputError, MeetingNotes, PromptTemplate, ScriptType};

    #[test]
    fn builtin_templates_are_distinct() {
        let templates = ScriptType::ALL.map(PromptTemplate::for_type);

        for (i, a) in templates.iter().enumerate() {
            assert!(!a.as_str().trim().is_empty());
            for b in &templates[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn rendered_prompt_contains_notes() {
        let notes = MeetingNotes::new("Team Sync Meeting\n- Alice to update the {roadmap}");

        for ty in ScriptType::ALL {
            let prompt = PromptTemplate::for_type(ty).render(&notes).unwrap();
            assert!(prompt.contains(notes.as_str()), "{ty} prompt lost the notes");
            assert!(!prompt.contains("{notes}"));
        }
    }

    #[test]
    fn format_custom_template() {
        let template = PromptTemplate::custom("Summarize:\n<notes>\n{notes}\n</notes>").unwrap();
        let outcome = template.render(&MeetingNotes::new("ok")).unwrap();

        assert_eq!(outcome, "Summarize:\n<notes>\nok\n</notes>");
    }

    #[test]
    fn custom_template_requires_placeholder() {
        let err = PromptTemplate::custom("no placeholder here").unwrap_err();
        assert!(matches!(err, InputError::Template(_)));
    }

    #[test]
    fn custom_template_rejects_other_braces() {
        for template in [
            "Reply as {\"items\": []}\n{notes}",
            "{notes} for {title}",
            "{{notes}}",
            "{notes}}",
        ] {
            let err = PromptTemplate::custom(template).unwrap_err();
            assert!(
                matches!(&err, InputError::Template(msg) if msg.contains("braces")),
                "{template:?} gave {err}"
            );
        }
    }

    #[test]
    fn custom_template_with_repeated_placeholder() {
        let template = PromptTemplate::custom("{notes}\n---\n{notes}").unwrap();
        let outcome = template.render(&MeetingNotes::new("a")).unwrap();

        assert_eq!(outcome, "a\n---\na");
    }
}
