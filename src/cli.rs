//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::pipeline::{DEFAULT_MAX_TICKETS, DEFAULT_OUTPUT_DIR};
use crate::snapshot::DEFAULT_SNAPSHOT_CEILING;

/// Top-level CLI parser for `relnotes`.
#[derive(Debug, Parser)]
#[command(
    name = "relnotes",
    version,
    about = "Generate release notes from the last commit, Jira tickets, and an LLM"
)]
pub struct Cli {
    /// Log at debug level (overridden by `RUST_LOG`).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate release notes for the tip of a branch.
    Generate {
        /// Path to the local git working copy.
        #[arg(long)]
        repo_path: PathBuf,
        /// Branch to document; the working copy is switched to it.
        #[arg(long, default_value = "main")]
        branch: String,
        /// Jira project key whose tickets provide context.
        #[arg(long)]
        jira_project_key: String,
        /// Directory to save the Markdown notes in.
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
        /// Post the notes to the configured Teams webhook.
        #[arg(long)]
        send_to_teams: bool,
        /// Leave the codebase snapshot out of the prompt.
        #[arg(long)]
        no_codebase: bool,
        /// Match denied extensions as suffixes instead of substrings.
        #[arg(long)]
        strict_extensions: bool,
        /// Maximum number of project tickets to fetch.
        #[arg(long, default_value_t = DEFAULT_MAX_TICKETS)]
        max_tickets: u32,
    },
    /// Extract the diff and codebase snapshot without calling any service.
    Snapshot {
        /// Path to the local git working copy.
        #[arg(long)]
        repo_path: PathBuf,
        /// Branch to inspect; the working copy is switched to it.
        #[arg(long, default_value = "main")]
        branch: String,
        /// Match denied extensions as suffixes instead of substrings.
        #[arg(long)]
        strict_extensions: bool,
        /// Maximum total characters in the snapshot.
        #[arg(long, default_value_t = DEFAULT_SNAPSHOT_CEILING)]
        ceiling: usize,
        /// Print the full context as JSON instead of a summary.
        #[arg(long)]
        json: bool,
    },
    /// Check that the required environment variables are set.
    Check {
        /// Also require `TEAMS_WEBHOOK_URL`.
        #[arg(long)]
        require_teams: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_generate_with_defaults() {
        let cli = Cli::parse_from([
            "relnotes",
            "generate",
            "--repo-path",
            "/tmp/repo",
            "--jira-project-key",
            "SCRUM",
        ]);
        let Command::Generate { branch, output_dir, send_to_teams, max_tickets, no_codebase, .. } =
            cli.command
        else {
            panic!("expected generate");
        };
        assert_eq!(branch, "main");
        assert_eq!(output_dir.to_str(), Some("generated_release_notes"));
        assert!(!send_to_teams);
        assert!(!no_codebase);
        assert_eq!(max_tickets, 50);
    }

    #[test]
    fn generate_requires_project_key() {
        assert!(Cli::try_parse_from(["relnotes", "generate", "--repo-path", "."]).is_err());
    }

    #[test]
    fn parses_snapshot_flags() {
        let cli = Cli::parse_from([
            "relnotes", "snapshot", "--repo-path", ".", "--branch", "dev", "--ceiling", "1000",
            "--json", "--verbose",
        ]);
        assert!(cli.verbose);
        let Command::Snapshot { branch, ceiling, json, strict_extensions, .. } = cli.command else {
            panic!("expected snapshot");
        };
        assert_eq!(branch, "dev");
        assert_eq!(ceiling, 1000);
        assert!(json);
        assert!(!strict_extensions);
    }

    #[test]
    fn parses_check() {
        let cli = Cli::parse_from(["relnotes", "check", "--require-teams"]);
        assert!(matches!(cli.command, Command::Check { require_teams: true }));
    }
}
