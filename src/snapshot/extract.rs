//! Branch alignment, last-commit diff, and snapshot assembly.

use std::path::Path;

use tracing::info;

use super::collect::collect_snapshot;
use super::filter::GIT_DIR;
use super::{CommitDiff, RepositoryContext, SnapshotOptions};
use crate::error::ExtractionError;
use crate::ports::{GitRepo, PortError};

fn unexpected(context: &str) -> impl FnOnce(PortError) -> ExtractionError + '_ {
    move |err| ExtractionError::UnexpectedIo {
        context: context.to_string(),
        message: err.to_string(),
    }
}

/// Extracts the diff, tip commit, and codebase snapshot for `branch`.
///
/// The working copy is switched to `branch` when it is on another branch or
/// detached; that checkout is the only mutation performed. A root commit is
/// not an error: the diff is reported as [`CommitDiff::RootCommit`].
///
/// # Errors
///
/// - [`ExtractionError::NotARepository`] if `repo` has no `.git` directory.
/// - [`ExtractionError::InvalidHead`] if the repository has no commits.
/// - [`ExtractionError::BranchNotFound`] if `branch` exists nowhere.
/// - [`ExtractionError::CheckoutFailed`] if switching branches fails.
/// - [`ExtractionError::CommitLookupFailure`] if the tip or its parent
///   cannot be resolved.
/// - [`ExtractionError::UnexpectedIo`] for other git or traversal failures.
pub fn extract(
    git: &dyn GitRepo,
    repo: &Path,
    branch: &str,
    options: &SnapshotOptions,
) -> Result<RepositoryContext, ExtractionError> {
    if !repo.join(GIT_DIR).is_dir() {
        return Err(ExtractionError::NotARepository { path: repo.to_path_buf() });
    }

    if !git.head_is_valid(repo).map_err(unexpected("resolving HEAD"))? {
        return Err(ExtractionError::InvalidHead { path: repo.to_path_buf() });
    }

    let current = git.current_branch(repo).map_err(unexpected("reading current branch"))?;
    if current.as_deref() != Some(branch) {
        if !git.branch_exists(repo, branch).map_err(unexpected("looking up branch"))? {
            return Err(ExtractionError::BranchNotFound { branch: branch.to_string() });
        }
        info!(from = current.as_deref().unwrap_or("(detached)"), to = branch, "switching branch");
        git.checkout(repo, branch).map_err(|err| ExtractionError::CheckoutFailed {
            branch: branch.to_string(),
            message: err.to_string(),
        })?;
    }

    let commit = git.head_commit(repo).map_err(|err| ExtractionError::CommitLookupFailure {
        commit: "HEAD".to_string(),
        message: err.to_string(),
    })?;

    let parent =
        git.first_parent(repo, &commit).map_err(|err| ExtractionError::CommitLookupFailure {
            commit: format!("{commit}^1"),
            message: err.to_string(),
        })?;

    let diff = match parent {
        Some(parent) => {
            let text = git.diff(repo, &parent, &commit).map_err(unexpected("computing diff"))?;
            CommitDiff::Changes(text)
        }
        None => {
            info!(commit = %commit, "root commit: no parent to diff against");
            CommitDiff::RootCommit
        }
    };

    let snapshot = collect_snapshot(repo, options)?;

    Ok(RepositoryContext { branch: branch.to_string(), commit, diff, snapshot })
}
