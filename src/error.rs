//! Typed errors for extraction and the release pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to extract repository context from a working copy.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The path has no `.git` metadata directory.
    #[error("'{}' is not a git repository (missing .git directory)", path.display())]
    NotARepository {
        /// Path that was inspected.
        path: PathBuf,
    },

    /// The requested branch exists neither locally nor on a remote.
    #[error("branch '{branch}' not found locally or on any remote")]
    BranchNotFound {
        /// Requested branch name.
        branch: String,
    },

    /// `HEAD` does not resolve to a commit (empty repository).
    #[error("repository head is invalid in '{}' (no commits yet?)", path.display())]
    InvalidHead {
        /// Working-copy root.
        path: PathBuf,
    },

    /// The branch exists but switching to it failed.
    #[error("failed to check out branch '{branch}': {message}")]
    CheckoutFailed {
        /// Requested branch name.
        branch: String,
        /// Git's explanation.
        message: String,
    },

    /// The tip commit or its parent could not be resolved.
    #[error("failed to resolve commit {commit}: {message}")]
    CommitLookupFailure {
        /// Revision being resolved.
        commit: String,
        /// Underlying failure.
        message: String,
    },

    /// Any other git or filesystem failure.
    #[error("unexpected failure while {context}: {message}")]
    UnexpectedIo {
        /// What the extractor was doing.
        context: String,
        /// Underlying failure.
        message: String,
    },
}

/// Failure of one release pipeline stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Repository context could not be extracted.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// The language model call failed.
    #[error("could not generate release notes: {0}")]
    Generation(String),

    /// The notes could not be written to disk.
    #[error("could not save release notes: {0}")]
    Save(String),

    /// The notes were saved but posting them to the channel failed.
    #[error("release notes saved to {} but notification failed: {message}", saved_to.display())]
    Notify {
        /// Where the notes were written.
        saved_to: PathBuf,
        /// Underlying failure.
        message: String,
    },
}
