//! The release pipeline: extract, gather tickets, generate, save, notify.

pub mod keys;
pub mod output;
pub mod prompt;

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::context::ServiceContext;
use crate::error::PipelineError;
use crate::ports::{CompletionRequest, Notification, Ticket, TicketTracker};
use crate::snapshot::{self, CommitDiff, SnapshotOptions};

pub use keys::extract_ticket_keys;
pub use output::save_release_notes;
pub use prompt::{build_prompt, PromptInput};

/// Default number of project tickets fetched for context.
pub const DEFAULT_MAX_TICKETS: u32 = 50;

/// Default cap on generated tokens.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;

/// Default directory for saved notes.
pub const DEFAULT_OUTPUT_DIR: &str = "generated_release_notes";

/// Parameters of one pipeline run.
#[derive(Debug, Clone)]
pub struct ReleaseRequest {
    /// Working copy to document.
    pub repo_path: PathBuf,
    /// Branch whose tip commit is documented.
    pub branch: String,
    /// Jira project key used for the project ticket query.
    pub project_key: String,
    /// Directory the notes are saved to.
    pub output_dir: PathBuf,
    /// Whether to post the notes to Teams.
    pub send_to_teams: bool,
    /// Whether the codebase snapshot is included in the prompt.
    pub include_codebase: bool,
    /// Maximum project tickets fetched.
    pub max_tickets: u32,
    /// Snapshot traversal settings.
    pub snapshot: SnapshotOptions,
    /// LLM model identifier.
    pub model: String,
    /// Cap on generated tokens.
    pub max_output_tokens: u32,
}

/// Why a run produced no notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The tip commit has no parent.
    RootCommit,
    /// The tip commit changes nothing.
    EmptyDiff,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootCommit => f.write_str("initial commit has no parent to diff against"),
            Self::EmptyDiff => f.write_str("last commit has an empty diff"),
        }
    }
}

/// Summary of a run that generated notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseReport {
    /// Documented commit.
    pub commit: String,
    /// Where the notes were written.
    pub saved_to: PathBuf,
    /// Number of tickets given to the model.
    pub ticket_count: usize,
    /// Ticket keys found in the diff.
    pub referenced_keys: Vec<String>,
    /// Files in the codebase snapshot.
    pub snapshot_files: usize,
    /// Characters in the codebase snapshot.
    pub snapshot_chars: usize,
    /// File cut at the snapshot ceiling, if any.
    pub snapshot_truncated: Option<String>,
    /// Whether the notes were posted to Teams.
    pub notified: bool,
}

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Nothing to document.
    Skipped {
        /// Tip commit.
        commit: String,
        /// Why generation was skipped.
        reason: SkipReason,
    },
    /// Notes were generated and saved.
    Generated(ReleaseReport),
}

/// Runs the full pipeline against `ctx`.
///
/// # Errors
///
/// Returns the [`PipelineError`] of the first stage that fails. Ticket
/// tracker failures are logged and do not fail the run.
pub async fn run(
    ctx: &ServiceContext,
    request: &ReleaseRequest,
) -> Result<PipelineOutcome, PipelineError> {
    info!(
        repo = %request.repo_path.display(),
        branch = %request.branch,
        "extracting repository context"
    );
    let repo = snapshot::extract(
        ctx.git.as_ref(),
        &request.repo_path,
        &request.branch,
        &request.snapshot,
    )?;

    let diff = match &repo.diff {
        CommitDiff::RootCommit => return Ok(skipped(repo.commit, SkipReason::RootCommit)),
        CommitDiff::Changes(text) if text.trim().is_empty() => {
            return Ok(skipped(repo.commit, SkipReason::EmptyDiff));
        }
        CommitDiff::Changes(text) => text.as_str(),
    };

    let referenced = extract_ticket_keys(diff);
    let tickets = gather_tickets(
        ctx.tickets.as_ref(),
        &request.project_key,
        &referenced,
        request.max_tickets,
    )
    .await;
    info!(tickets = tickets.len(), referenced = referenced.len(), "gathered ticket context");

    let issued_at = ctx.clock.now();
    let prompt = build_prompt(&PromptInput {
        diff,
        tickets: &tickets,
        snapshot: request.include_codebase.then_some(&repo.snapshot),
        commit: &repo.commit,
        release_date: issued_at.date_naive(),
    });

    info!(
        model = %request.model,
        prompt_chars = prompt.chars().count(),
        "generating release notes"
    );
    let completion = ctx
        .llm
        .complete(&CompletionRequest {
            model: request.model.clone(),
            prompt,
            max_tokens: request.max_output_tokens,
        })
        .await
        .map_err(|e| PipelineError::Generation(e.to_string()))?;
    info!(
        prompt_tokens = completion.prompt_tokens,
        completion_tokens = completion.completion_tokens,
        "release notes generated"
    );

    let saved_to =
        save_release_notes(ctx.fs.as_ref(), &request.output_dir, issued_at, &completion.text)
            .map_err(|e| PipelineError::Save(e.to_string()))?;
    info!(path = %saved_to.display(), "release notes saved");

    if request.send_to_teams {
        let notification = Notification {
            title: format!("Release Notes for Commit: {}", short_commit(&repo.commit)),
            text: completion.text,
        };
        if let Err(e) = ctx.notifier.send(&notification).await {
            return Err(PipelineError::Notify { saved_to, message: e.to_string() });
        }
        info!("release notes posted to Teams");
    }

    Ok(PipelineOutcome::Generated(ReleaseReport {
        commit: repo.commit,
        saved_to,
        ticket_count: tickets.len(),
        referenced_keys: referenced.into_iter().collect(),
        snapshot_files: repo.snapshot.len(),
        snapshot_chars: repo.snapshot.total_chars(),
        snapshot_truncated: repo.snapshot.truncated_path().map(String::from),
        notified: request.send_to_teams,
    }))
}

fn skipped(commit: String, reason: SkipReason) -> PipelineOutcome {
    info!(commit = %commit, %reason, "skipping release note generation");
    PipelineOutcome::Skipped { commit, reason }
}

fn short_commit(commit: &str) -> &str {
    commit.char_indices().nth(7).map_or(commit, |(i, _)| &commit[..i])
}

/// JQL listing a project's tickets, newest first.
#[must_use]
pub fn project_jql(project_key: &str) -> String {
    format!("project = \"{}\" ORDER BY created DESC", project_key.replace('"', "\\\""))
}

/// Collects project tickets plus any tickets referenced in the diff that the
/// project query did not return. Referenced tickets come first.
///
/// Tracker failures are logged and yield fewer (possibly zero) tickets.
pub async fn gather_tickets(
    tracker: &dyn TicketTracker,
    project_key: &str,
    referenced: &BTreeSet<String>,
    max_tickets: u32,
) -> Vec<Ticket> {
    let mut tickets = match tracker.search(&project_jql(project_key), max_tickets).await {
        Ok(found) => found,
        Err(e) => {
            warn!(
                project = project_key,
                error = %e,
                "could not fetch project tickets; continuing without them"
            );
            Vec::new()
        }
    };

    let missing: Vec<&str> = referenced
        .iter()
        .map(String::as_str)
        .filter(|key| !tickets.iter().any(|t| t.key == *key))
        .collect();
    if !missing.is_empty() {
        let jql = format!("key in ({})", missing.join(", "));
        let limit = u32::try_from(missing.len()).unwrap_or(u32::MAX);
        match tracker.search(&jql, limit).await {
            Ok(found) => tickets.extend(found),
            Err(e) => {
                warn!(keys = %missing.join(","), error = %e, "could not fetch referenced tickets");
            }
        }
    }

    let (mut ordered, rest): (Vec<Ticket>, Vec<Ticket>) =
        tickets.into_iter().partition(|t| referenced.contains(&t.key));
    ordered.extend(rest);
    ordered
}
