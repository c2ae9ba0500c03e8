//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs a stderr fmt subscriber. `RUST_LOG` wins when set; otherwise
/// the level is `info`, or `debug` with `verbose`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
