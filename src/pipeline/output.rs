//! Saving generated notes to timestamped Markdown files.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::ports::{FileSystem, PortError};

/// Writes `content` to `<output_dir>/release_notes_<YYYYmmdd_HHMMSS>.md`.
///
/// An existing file is never overwritten: `_1`, `_2`, ... is appended to
/// the stem until the name is free.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_release_notes(
    fs: &dyn FileSystem,
    output_dir: &Path,
    issued_at: DateTime<Utc>,
    content: &str,
) -> Result<PathBuf, PortError> {
    let stem = format!("release_notes_{}", issued_at.format("%Y%m%d_%H%M%S"));
    let mut path = output_dir.join(format!("{stem}.md"));
    let mut n = 1;
    while fs.exists(&path) {
        path = output_dir.join(format!("{stem}_{n}.md"));
        n += 1;
    }
    fs.write(&path, content)?;
    Ok(path)
}
