//! Repository context extraction: last-commit diff plus a size-bounded
//! snapshot of every text file in the working copy.

pub mod collect;
pub mod extract;
pub mod filter;

use serde::{Deserialize, Serialize};

pub use collect::collect_snapshot;
pub use extract::extract;
pub use filter::ExtensionMatch;

/// Default ceiling on the total number of characters in a snapshot.
pub const DEFAULT_SNAPSHOT_CEILING: usize = 500_000;

/// Appended to the content of the file that crosses the ceiling.
pub const TRUNCATION_MARKER: &str = "\n... (content truncated)";

/// Tunables for snapshot traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotOptions {
    /// Maximum total characters across all entries, marker included.
    pub ceiling: usize,
    /// Extension denylist matching mode.
    pub extension_match: ExtensionMatch,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self { ceiling: DEFAULT_SNAPSHOT_CEILING, extension_match: ExtensionMatch::default() }
    }
}

/// Diff between the tip commit and its first parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum CommitDiff {
    /// Unified diff text as printed by git. May be empty for an empty commit.
    Changes(String),
    /// The tip is a root commit; there is no parent to diff against.
    RootCommit,
}

impl CommitDiff {
    /// Returns the diff text, or `None` for a root commit.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Changes(text) => Some(text),
            Self::RootCommit => None,
        }
    }
}

/// One file captured in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotFile {
    /// Path relative to the repository root, `/`-separated.
    pub path: String,
    /// Decoded content, possibly truncated.
    pub content: String,
}

/// Ordered path → content mapping bounded by a character ceiling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodebaseSnapshot {
    files: Vec<SnapshotFile>,
    total_chars: usize,
    truncated: Option<String>,
}

impl CodebaseSnapshot {
    /// Files in traversal order.
    #[must_use]
    pub fn files(&self) -> &[SnapshotFile] {
        &self.files
    }

    /// Content for `path`, if captured.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.iter().find(|f| f.path == path).map(|f| f.content.as_str())
    }

    /// Number of captured files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if no file was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total characters across all captured contents.
    #[must_use]
    pub fn total_chars(&self) -> usize {
        self.total_chars
    }

    /// Path of the file that was cut at the ceiling, if any.
    #[must_use]
    pub fn truncated_path(&self) -> Option<&str> {
        self.truncated.as_deref()
    }
}

/// Everything the note generator needs from the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryContext {
    /// Branch the working copy was aligned to.
    pub branch: String,
    /// Full hash of the tip commit.
    pub commit: String,
    /// Diff against the first parent.
    pub diff: CommitDiff,
    /// Text contents of the working tree.
    pub snapshot: CodebaseSnapshot,
}
