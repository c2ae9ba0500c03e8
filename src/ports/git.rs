//! Git repository port for version-control queries.

use std::path::Path;

use super::PortError;

/// Provides the git operations the snapshot extractor needs.
///
/// Every method takes the working-copy root explicitly; implementations keep
/// no per-repository state.
pub trait GitRepo: Send + Sync {
    /// Returns `true` if `HEAD` resolves to a commit.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be invoked.
    fn head_is_valid(&self, repo: &Path) -> Result<bool, PortError>;

    /// Returns the short name of the checked-out branch, or `None` when
    /// `HEAD` is detached.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be invoked or reports a failure.
    fn current_branch(&self, repo: &Path) -> Result<Option<String>, PortError>;

    /// Returns `true` if `branch` exists locally or on any remote.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be invoked.
    fn branch_exists(&self, repo: &Path, branch: &str) -> Result<bool, PortError>;

    /// Checks out `branch` in the working copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the checkout fails (dirty tree, missing ref, ...).
    fn checkout(&self, repo: &Path, branch: &str) -> Result<(), PortError>;

    /// Returns the full hash of the `HEAD` commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository has no commits or is invalid.
    fn head_commit(&self, repo: &Path) -> Result<String, PortError>;

    /// Returns the full hash of the first parent of `commit`, or `None` for a
    /// root commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit cannot be resolved.
    fn first_parent(&self, repo: &Path, commit: &str) -> Result<Option<String>, PortError>;

    /// Returns the unified diff between two commits, exactly as git prints it.
    ///
    /// # Errors
    ///
    /// Returns an error if the diff cannot be computed.
    fn diff(&self, repo: &Path, from: &str, to: &str) -> Result<String, PortError>;
}
