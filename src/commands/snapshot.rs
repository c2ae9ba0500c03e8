//! `relnotes snapshot` command.

use std::fmt::Write as _;
use std::path::Path;

use crate::adapters::live::git::LiveGitRepo;
use crate::snapshot::{self, CommitDiff, ExtensionMatch, RepositoryContext, SnapshotOptions};

/// Execute the `snapshot` command.
///
/// # Errors
///
/// Returns an error string if extraction fails or the context cannot be
/// serialized.
pub fn run(
    repo_path: &Path,
    branch: &str,
    extension_match: ExtensionMatch,
    ceiling: usize,
    json: bool,
) -> Result<(), String> {
    let options = SnapshotOptions { ceiling, extension_match };
    let context =
        snapshot::extract(&LiveGitRepo, repo_path, branch, &options).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&context)
            .map_err(|e| format!("Failed to serialize repository context: {e}"))?;
        println!("{out}");
    } else {
        print!("{}", summary(&context));
    }
    Ok(())
}

fn summary(context: &RepositoryContext) -> String {
    let diff = match &context.diff {
        CommitDiff::Changes(text) => format!("{} line(s)", text.lines().count()),
        CommitDiff::RootCommit => "none (root commit)".to_string(),
    };
    let mut out = format!(
        "branch:   {}\ncommit:   {}\ndiff:     {diff}\nsnapshot: {} file(s), {} char(s)\n",
        context.branch,
        context.commit,
        context.snapshot.len(),
        context.snapshot.total_chars(),
    );
    if let Some(path) = context.snapshot.truncated_path() {
        let _ = writeln!(out, "truncated at: {path}");
    }
    out
}
