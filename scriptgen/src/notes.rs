use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

use crate::InputError;

/// Raw meeting notes, passed to the model as-is.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct MeetingNotes {
    text: String,
}

impl MeetingNotes {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn from_reader(reader: &mut impl Read) -> io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self { text })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let read_error = |source: io::Error| match source.kind() {
            io::ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
            _ => InputError::Read {
                path: PathBuf::from(path),
                source,
            },
        };

        let mut file = File::open(path).map_err(read_error)?;
        Self::from_reader(&mut file).map_err(read_error)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
