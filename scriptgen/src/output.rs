use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::Error;

/// Write `text` to `path`, replacing any existing file.
///
/// The text lands in a temporary sibling first and is renamed into place,
/// so a failed write leaves an existing file untouched.
pub fn write_script(path: impl AsRef<Path>, text: &str) -> Result<PathBuf, Error> {
    let path = path.as_ref();
    let output_error = |source: std::io::Error| Error::Output {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(output_error)?;

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(output_error)?;
    file.write_all(text.as_bytes()).map_err(output_error)?;
    file.as_file().sync_all().map_err(output_error)?;
    file.persist(path).map_err(|e| output_error(e.error))?;

    Ok(path.to_path_buf())
}
