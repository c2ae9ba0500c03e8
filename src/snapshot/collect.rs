//! Tree walk that assembles a [`CodebaseSnapshot`] under a character ceiling.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::filter::{has_denied_extension, is_excluded_path};
use super::{CodebaseSnapshot, SnapshotFile, SnapshotOptions, TRUNCATION_MARKER};
use crate::error::ExtractionError;

/// Whether the builder can take more files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capacity {
    Open,
    Exhausted,
}

/// Accumulates files while enforcing the ceiling.
struct SnapshotBuilder {
    ceiling: usize,
    snapshot: CodebaseSnapshot,
}

impl SnapshotBuilder {
    fn new(ceiling: usize) -> Self {
        Self { ceiling, snapshot: CodebaseSnapshot::default() }
    }

    fn remaining(&self) -> usize {
        self.ceiling.saturating_sub(self.snapshot.total_chars)
    }

    fn push(&mut self, path: String, content: String) -> Capacity {
        let remaining = self.remaining();
        if remaining == 0 {
            return Capacity::Exhausted;
        }

        let len = content.chars().count();
        if len <= remaining {
            self.snapshot.total_chars += len;
            self.snapshot.files.push(SnapshotFile { path, content });
            return if self.remaining() == 0 { Capacity::Exhausted } else { Capacity::Open };
        }

        let marker_len = TRUNCATION_MARKER.chars().count();
        if remaining > marker_len {
            let mut cut: String = content.chars().take(remaining - marker_len).collect();
            cut.push_str(TRUNCATION_MARKER);
            debug!(
                path = %path,
                kept = remaining - marker_len,
                of = len,
                "truncating file at ceiling"
            );
            self.snapshot.total_chars = self.ceiling;
            self.snapshot.truncated = Some(path.clone());
            self.snapshot.files.push(SnapshotFile { path, content: cut });
        } else {
            debug!(path = %path, remaining, "no room left for a truncated entry");
        }
        Capacity::Exhausted
    }

    fn finish(self) -> CodebaseSnapshot {
        self.snapshot
    }
}

/// Converts `path` under `root` into a `/`-separated relative string.
fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Walks `root` and collects the text content of every eligible file.
///
/// Directories named `.git` or on the denylist are pruned, files with a
/// denied extension are skipped, and unreadable files are logged and
/// skipped. The walk stops once `options.ceiling` characters are collected.
///
/// # Errors
///
/// Returns [`ExtractionError::UnexpectedIo`] only when the root directory
/// itself cannot be read.
pub fn collect_snapshot(
    root: &Path,
    options: &SnapshotOptions,
) -> Result<CodebaseSnapshot, ExtractionError> {
    let mut builder = SnapshotBuilder::new(options.ceiling);
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || !is_excluded_path(&relative_path(root, entry.path()))
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(ExtractionError::UnexpectedIo {
                    context: format!("reading {}", root.display()),
                    message: err.to_string(),
                });
            }
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let relative = relative_path(root, entry.path());
        let file_name = entry.file_name().to_string_lossy();
        if has_denied_extension(&file_name, options.extension_match) {
            debug!(path = %relative, "skipping denied extension");
            continue;
        }

        let bytes = match fs::read(entry.path()) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(path = %relative, error = %err, "skipping unreadable file");
                continue;
            }
        };
        let content = String::from_utf8_lossy(&bytes).into_owned();

        if builder.push(relative, content) == Capacity::Exhausted {
            break;
        }
    }

    let snapshot = builder.finish();
    info!(
        files = snapshot.len(),
        chars = snapshot.total_chars(),
        truncated = snapshot.truncated_path().is_some(),
        "collected codebase snapshot"
    );
    Ok(snapshot)
}
