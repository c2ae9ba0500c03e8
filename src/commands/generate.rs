//! `relnotes generate` command.

use std::path::PathBuf;

use crate::cassette::session::RecordingSession;
use crate::config::AppConfig;
use crate::context::ServiceContext;
use crate::pipeline::{self, PipelineOutcome, ReleaseRequest, DEFAULT_MAX_OUTPUT_TOKENS};
use crate::snapshot::{ExtensionMatch, SnapshotOptions};

/// Environment variable naming a directory to record cassettes into.
pub const RECORD_ENV: &str = "RELNOTES_RECORD";

/// Parsed `generate` arguments.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Working copy to document.
    pub repo_path: PathBuf,
    /// Branch to document.
    pub branch: String,
    /// Jira project key.
    pub project_key: String,
    /// Output directory.
    pub output_dir: PathBuf,
    /// Post to Teams.
    pub send_to_teams: bool,
    /// Include the codebase snapshot in the prompt.
    pub include_codebase: bool,
    /// Extension matching mode.
    pub extension_match: ExtensionMatch,
    /// Maximum project tickets.
    pub max_tickets: u32,
}

/// Execute the `generate` command.
///
/// When `RELNOTES_RECORD` is set to a directory path, clock, LLM, ticket,
/// and notifier interactions are recorded to per-port cassette files below
/// it.
///
/// # Errors
///
/// Returns an error string if configuration is incomplete or any pipeline
/// stage fails.
pub fn run(args: &GenerateArgs) -> Result<(), String> {
    let credentials =
        AppConfig::from_env().validate(args.send_to_teams).map_err(|e| e.to_string())?;

    let request = ReleaseRequest {
        repo_path: args.repo_path.clone(),
        branch: args.branch.clone(),
        project_key: args.project_key.clone(),
        output_dir: args.output_dir.clone(),
        send_to_teams: args.send_to_teams,
        include_codebase: args.include_codebase,
        max_tickets: args.max_tickets,
        snapshot: SnapshotOptions {
            extension_match: args.extension_match,
            ..SnapshotOptions::default()
        },
        model: credentials.gemini_model.clone(),
        max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
    };

    let (ctx, session) = match std::env::var_os(RECORD_ENV) {
        Some(dir) => {
            let (ctx, session) = ServiceContext::recording_at(&PathBuf::from(dir), &credentials)?;
            (ctx, Some(session))
        }
        None => (ServiceContext::live(&credentials), None),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;
    let result = runtime.block_on(pipeline::run(&ctx, &request));

    // Finish recording even when the run failed; adapters must drop first.
    if let Some(session) = session {
        drop(ctx);
        finish_recording(session)?;
    }

    match result.map_err(|e| e.to_string())? {
        PipelineOutcome::Skipped { commit, reason } => {
            println!("No release notes generated for {commit}: {reason}.");
        }
        PipelineOutcome::Generated(report) => {
            println!("Release notes saved to {}", report.saved_to.display());
            println!(
                "  commit {} | {} ticket(s) | snapshot {} file(s){}",
                report.commit,
                report.ticket_count,
                report.snapshot_files,
                if report.snapshot_truncated.is_some() { " (truncated)" } else { "" },
            );
            if report.notified {
                println!("  posted to Microsoft Teams");
            }
        }
    }
    Ok(())
}

fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
