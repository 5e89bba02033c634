//! `tracing` subscriber setup.
//!
//! Logging is off unless `RUST_LOG` or `JIRAT_DEBUG` is set, matching the
//! switch used by the `msg_*!` macros. `RUST_LOG` takes the usual
//! `EnvFilter` syntax. `JIRAT_DEBUG` alone enables `debug` for this crate.
//! Everything is written to stderr so command output on stdout stays clean.

use super::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "jirat=debug";

pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    // A second init (e.g. from a test harness) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init();
}
