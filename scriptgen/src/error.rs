use std::path::PathBuf;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Authentication failed: {0}")]
    Auth(BoxError),
    #[error("Request failed: {0}")]
    Request(BoxError),
    #[error("Failed to write script to {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn auth(err: impl Into<BoxError>) -> Self {
        Self::Auth(err.into())
    }

    pub fn request(err: impl Into<BoxError>) -> Self {
        Self::Request(err.into())
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Meeting notes file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Error reading {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unknown script type `{0}`, expected one of: action_items, summary, minutes")]
    UnknownScriptType(String),
    #[error("Invalid prompt template: {0}")]
    Template(String),
}
