//! Live git adapter using `git` CLI commands.

use std::path::Path;
use std::process::{Command, Output};

use crate::ports::git::GitRepo;
use crate::ports::PortError;

/// Live git adapter that shells out to the `git` CLI.
pub struct LiveGitRepo;

/// Runs `git -C <repo> <args>` and returns the raw output.
fn git(repo: &Path, args: &[&str]) -> Result<Output, PortError> {
    let output = Command::new("git").arg("-C").arg(repo).args(args).output()?;
    Ok(output)
}

/// Runs a git command that must succeed and returns its stdout.
fn git_stdout(repo: &Path, args: &[&str]) -> Result<String, PortError> {
    let output = git(repo, args)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("git {} failed: {}", args.join(" "), stderr.trim()).into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl GitRepo for LiveGitRepo {
    fn head_is_valid(&self, repo: &Path) -> Result<bool, PortError> {
        let output = git(repo, &["rev-parse", "--verify", "--quiet", "HEAD^{commit}"])?;
        Ok(output.status.success())
    }

    fn current_branch(&self, repo: &Path) -> Result<Option<String>, PortError> {
        let output = git(repo, &["symbolic-ref", "--quiet", "--short", "HEAD"])?;
        match output.status.code() {
            Some(0) => Ok(Some(String::from_utf8_lossy(&output.stdout).trim().to_string())),
            // Exit status 1 with --quiet means HEAD is detached.
            Some(1) => Ok(None),
            _ => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(format!("git symbolic-ref HEAD failed: {}", stderr.trim()).into())
            }
        }
    }

    fn branch_exists(&self, repo: &Path, branch: &str) -> Result<bool, PortError> {
        let local = format!("refs/heads/{branch}");
        if git(repo, &["show-ref", "--verify", "--quiet", &local])?.status.success() {
            return Ok(true);
        }
        let remotes =
            git_stdout(repo, &["for-each-ref", "--format=%(refname:strip=3)", "refs/remotes"])?;
        Ok(remotes.lines().any(|name| name == branch))
    }

    fn checkout(&self, repo: &Path, branch: &str) -> Result<(), PortError> {
        git_stdout(repo, &["checkout", "--quiet", branch, "--"])?;
        Ok(())
    }

    fn head_commit(&self, repo: &Path) -> Result<String, PortError> {
        Ok(git_stdout(repo, &["rev-parse", "HEAD"])?.trim().to_string())
    }

    fn first_parent(&self, repo: &Path, commit: &str) -> Result<Option<String>, PortError> {
        let line = git_stdout(repo, &["rev-list", "--parents", "-n", "1", commit])?;
        let mut hashes = line.split_whitespace();
        if hashes.next().is_none() {
            return Err(format!("git rev-list returned nothing for {commit}").into());
        }
        Ok(hashes.next().map(String::from))
    }

    fn diff(&self, repo: &Path, from: &str, to: &str) -> Result<String, PortError> {
        git_stdout(repo, &["diff", "--no-color", from, to])
    }
}
