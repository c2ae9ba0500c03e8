//! Path and file-name filters applied during snapshot traversal.

use serde::{Deserialize, Serialize};

/// Name of the version-control metadata directory.
pub const GIT_DIR: &str = ".git";

/// Directory names whose contents never enter a snapshot.
pub const DENIED_DIRS: &[&str] = &["node_modules", "venv", ".venv", "__pycache__"];

/// Binary, media, archive, and compiled-artifact extensions.
pub const DENIED_EXTENSIONS: &[&str] = &[
    ".exe", ".dll", ".zip", ".tar.gz", ".bin", ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".pdf",
    ".docx", ".xlsx", ".pptx", ".sqlite", ".db", ".pyc", ".class",
];

/// How [`DENIED_EXTENSIONS`] are matched against a file name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionMatch {
    /// The lowercased name contains the extension anywhere
    /// (`report.pdf.notes` is denied).
    #[default]
    Substring,
    /// The lowercased name ends with the extension.
    Suffix,
}

/// Returns `true` if any segment of a `/`-separated relative path is the git
/// metadata directory or a denied directory name.
#[must_use]
pub fn is_excluded_path(relative: &str) -> bool {
    relative
        .split('/')
        .any(|segment| segment == GIT_DIR || DENIED_DIRS.contains(&segment))
}

/// Returns `true` if the file name carries a denied extension.
#[must_use]
pub fn has_denied_extension(file_name: &str, mode: ExtensionMatch) -> bool {
    let lowered = file_name.to_lowercase();
    DENIED_EXTENSIONS.iter().any(|ext| match mode {
        ExtensionMatch::Substring => lowered.contains(ext),
        ExtensionMatch::Suffix => lowered.ends_with(ext),
    })
}
