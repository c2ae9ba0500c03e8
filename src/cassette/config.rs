//! Per-port cassette selection for replay.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::format::Cassette;
use super::replayer::CassetteReplayer;
use super::{ports, session::cassette_file_name};

/// Shared replayer handle held by a replaying adapter.
pub type SharedReplayer = Arc<Mutex<CassetteReplayer>>;

/// Cassette file per port. Ports left as `None` replay nothing and panic
/// if called.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Cassette for the clock port.
    pub clock: Option<PathBuf>,
    /// Cassette for the LLM port.
    pub llm: Option<PathBuf>,
    /// Cassette for the ticket tracker port.
    pub tickets: Option<PathBuf>,
    /// Cassette for the notifier port.
    pub notifier: Option<PathBuf>,
}

/// Loaded replayers, one per configured port.
pub struct PortReplayers {
    /// Clock replayer.
    pub clock: Option<SharedReplayer>,
    /// LLM replayer.
    pub llm: Option<SharedReplayer>,
    /// Ticket tracker replayer.
    pub tickets: Option<SharedReplayer>,
    /// Notifier replayer.
    pub notifier: Option<SharedReplayer>,
}

impl CassetteConfig {
    /// Picks up whichever `<port>.cassette.yaml` files exist in a recording
    /// session directory.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        let find = |port: &str| {
            let path = dir.join(cassette_file_name(port));
            path.is_file().then_some(path)
        };
        Self {
            clock: find(ports::CLOCK),
            llm: find(ports::LLM),
            tickets: find(ports::TICKETS),
            notifier: find(ports::NOTIFIER),
        }
    }

    /// Loads every configured cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured cassette cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        fn load(path: Option<&Path>) -> Result<Option<SharedReplayer>, String> {
            path.map(|p| {
                let cassette = Cassette::load(p)?;
                Ok(Arc::new(Mutex::new(CassetteReplayer::new(&cassette))))
            })
            .transpose()
        }

        Ok(PortReplayers {
            clock: load(self.clock.as_deref())?,
            llm: load(self.llm.as_deref())?,
            tickets: load(self.tickets.as_deref())?,
            notifier: load(self.notifier.as_deref())?,
        })
    }
}

impl PortReplayers {
    /// Serves every port from a single cassette. Each port gets its own
    /// replayer so cursors stay independent.
    #[must_use]
    pub fn from_cassette(cassette: &Cassette) -> Self {
        let shared = || Some(Arc::new(Mutex::new(CassetteReplayer::new(cassette))));
        Self { clock: shared(), llm: shared(), tickets: shared(), notifier: shared() }
    }
}
