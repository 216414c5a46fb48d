//! Output file helpers.

use std::{io::Write, path::Path};

use tracing::debug;

use crate::error::Result;

/// Write `contents` to `path` by replacing the file atomically.
///
/// The data goes to a temporary file in the destination directory first and
/// is renamed over `path`, so a failed run never leaves a truncated page or
/// artifact behind.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
