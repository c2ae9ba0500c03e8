//! Command dispatch and handlers.

pub mod check;
pub mod generate;
pub mod snapshot;

use crate::cli::{Cli, Command};
use crate::snapshot::ExtensionMatch;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    match &cli.command {
        Command::Generate {
            repo_path,
            branch,
            jira_project_key,
            output_dir,
            send_to_teams,
            no_codebase,
            strict_extensions,
            max_tickets,
        } => generate::run(&generate::GenerateArgs {
            repo_path: repo_path.clone(),
            branch: branch.clone(),
            project_key: jira_project_key.clone(),
            output_dir: output_dir.clone(),
            send_to_teams: *send_to_teams,
            include_codebase: !*no_codebase,
            extension_match: extension_match(*strict_extensions),
            max_tickets: *max_tickets,
        }),
        Command::Snapshot { repo_path, branch, strict_extensions, ceiling, json } => {
            snapshot::run(repo_path, branch, extension_match(*strict_extensions), *ceiling, *json)
        }
        Command::Check { require_teams } => check::run(*require_teams),
    }
}

fn extension_match(strict: bool) -> ExtensionMatch {
    if strict {
        ExtensionMatch::Suffix
    } else {
        ExtensionMatch::Substring
    }
}
