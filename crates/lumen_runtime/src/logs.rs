//! Logging setup for the command-line tool.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Installs the global subscriber, logging to stderr.
///
/// `RUST_LOG` takes precedence; otherwise warnings are shown, or debug
/// output when `verbose` is set. Calling this more than once is harmless.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    // A subscriber may already be installed, e.g. by a test harness.
    let _ = Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
