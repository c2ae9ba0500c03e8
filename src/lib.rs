//! Core library for the `relnotes` CLI.
//!
//! The pipeline extracts the last commit's diff and a bounded codebase
//! snapshot from a git working copy, gathers Jira tickets, asks Gemini for
//! Markdown release notes, saves them, and optionally posts them to Teams.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod ports;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod test_support;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    logging::init(cli.verbose);
    commands::dispatch(&cli)
}
