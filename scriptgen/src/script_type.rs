use std::{fmt, str::FromStr};

use crate::InputError;

/// The framing requested for the generated script.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum ScriptType {
    #[default]
    ActionItems,
    Summary,
    Minutes,
}

impl ScriptType {
    pub const ALL: [ScriptType; 3] = [Self::ActionItems, Self::Summary, Self::Minutes];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActionItems => "action_items",
            Self::Summary => "summary",
            Self::Minutes => "minutes",
        }
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| InputError::UnknownScriptType(s.to_string()))
    }
}
