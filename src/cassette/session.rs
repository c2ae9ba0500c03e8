//! A recording session: one cassette per port under a timestamped directory.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::ports;
use super::recorder::CassetteRecorder;

/// Shared handle to a recorder, held by a recording adapter.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

/// Per-port recorders writing to `<base>/<timestamp>/<port>.cassette.yaml`.
pub struct RecordingSession {
    /// Recorder for clock reads.
    pub clock: SharedRecorder,
    /// Recorder for LLM completions.
    pub llm: SharedRecorder,
    /// Recorder for ticket searches.
    pub tickets: SharedRecorder,
    /// Recorder for notifications.
    pub notifier: SharedRecorder,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Starts a session in a fresh timestamped directory below `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory already exists or cannot
    /// be created.
    pub fn new(base_dir: &Path) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = base_dir.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let recorder = |port: &str| -> SharedRecorder {
            let path = output_dir.join(cassette_file_name(port));
            Arc::new(Mutex::new(CassetteRecorder::new(path, format!("{timestamp}-{port}"))))
        };

        Ok(Self {
            clock: recorder(ports::CLOCK),
            llm: recorder(ports::LLM),
            tickets: recorder(ports::TICKETS),
            notifier: recorder(ports::NOTIFIER),
            output_dir,
        })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes every port's cassette and returns the session directory.
    ///
    /// Ports that saw no calls still get an (empty) cassette so the
    /// directory is always complete.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds a recorder or a cassette
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        for (port, shared) in [
            (ports::CLOCK, self.clock),
            (ports::LLM, self.llm),
            (ports::TICKETS, self.tickets),
            (ports::NOTIFIER, self.notifier),
        ] {
            let recorder = Arc::try_unwrap(shared)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
        }
        Ok(self.output_dir)
    }
}

/// File name used for a port's cassette inside a session directory.
#[must_use]
pub fn cassette_file_name(port: &str) -> String {
    format!("{port}.cassette.yaml")
}
