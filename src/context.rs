//! Service context bundling all port trait objects.

use std::path::Path;

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::gemini::GeminiClient;
use crate::adapters::live::git::LiveGitRepo;
use crate::adapters::live::jira::JiraTracker;
use crate::adapters::live::teams::{TeamsNotifier, UnconfiguredNotifier};
use crate::adapters::recording::{
    RecordingClock, RecordingLlmClient, RecordingNotifier, RecordingTicketTracker,
};
use crate::adapters::replaying::{
    ReplayingClock, ReplayingLlmClient, ReplayingNotifier, ReplayingTicketTracker,
};
use crate::cassette::config::{CassetteConfig, PortReplayers};
use crate::cassette::format::Cassette;
use crate::cassette::session::RecordingSession;
use crate::config::Credentials;
use crate::ports::{Clock, FileSystem, GitRepo, LlmClient, Notifier, TicketTracker};

/// Bundles every external boundary the pipeline touches.
///
/// Constructors wire up live, recording, or replaying adapters. Git and
/// the filesystem are always live: extraction and saving operate on real
/// directories even when the network ports are replayed.
pub struct ServiceContext {
    /// Wall clock for output file names and prompt dates.
    pub clock: Box<dyn Clock>,
    /// Filesystem for saving release notes.
    pub fs: Box<dyn FileSystem>,
    /// Git repository queries and branch checkout.
    pub git: Box<dyn GitRepo>,
    /// Language model used to write the notes.
    pub llm: Box<dyn LlmClient>,
    /// Ticket tracker providing Jira context.
    pub tickets: Box<dyn TicketTracker>,
    /// Chat channel that receives the notes.
    pub notifier: Box<dyn Notifier>,
}

fn live_notifier(credentials: &Credentials) -> Box<dyn Notifier> {
    match &credentials.teams_webhook_url {
        Some(url) => Box::new(TeamsNotifier::new(url.clone())),
        None => Box::new(UnconfiguredNotifier),
    }
}

impl ServiceContext {
    /// Creates a context talking to Gemini, Jira, and Teams.
    #[must_use]
    pub fn live(credentials: &Credentials) -> Self {
        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            git: Box::new(LiveGitRepo),
            llm: Box::new(GeminiClient::new(credentials.gemini_api_key.clone())),
            tickets: Box::new(JiraTracker::new(credentials.jira.clone())),
            notifier: live_notifier(credentials),
        }
    }

    /// Creates a live context whose clock, LLM, tickets, and notifier calls
    /// are recorded to per-port cassettes below `base_dir`.
    ///
    /// Drop the context before calling [`RecordingSession::finish`].
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory cannot be created.
    pub fn recording_at(
        base_dir: &Path,
        credentials: &Credentials,
    ) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(base_dir)?;
        let live = Self::live(credentials);
        let ctx = Self {
            clock: Box::new(RecordingClock::new(live.clock, session.clock.clone())),
            fs: live.fs,
            git: live.git,
            llm: Box::new(RecordingLlmClient::new(live.llm, session.llm.clone())),
            tickets: Box::new(RecordingTicketTracker::new(live.tickets, session.tickets.clone())),
            notifier: Box::new(RecordingNotifier::new(live.notifier, session.notifier.clone())),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a single cassette holding every port.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self::from_replayers(PortReplayers::from_cassette(&cassette)))
    }

    /// Creates a replaying context from per-port cassettes. Ports with no
    /// cassette panic when called.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured cassette cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        Ok(Self::from_replayers(config.load_all()?))
    }

    fn from_replayers(replayers: PortReplayers) -> Self {
        Self {
            clock: Box::new(
                replayers.clock.map_or_else(ReplayingClock::unconfigured, ReplayingClock::new),
            ),
            fs: Box::new(LiveFileSystem),
            git: Box::new(LiveGitRepo),
            llm: Box::new(
                replayers
                    .llm
                    .map_or_else(ReplayingLlmClient::unconfigured, ReplayingLlmClient::new),
            ),
            tickets: Box::new(
                replayers
                    .tickets
                    .map_or_else(ReplayingTicketTracker::unconfigured, ReplayingTicketTracker::new),
            ),
            notifier: Box::new(
                replayers
                    .notifier
                    .map_or_else(ReplayingNotifier::unconfigured, ReplayingNotifier::new),
            ),
        }
    }
}
