//! Tracing initialization and configuration.

use std::sync::Once;

use ::tracing::{Dispatch, Subscriber};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::logging_config::DEFAULT_LOG_FILTER;

static INIT: Once = Once::new();

/// Initialize the dorkscope tracing/logging system.
///
/// Reads the `DORKSCOPE_LOG` environment variable for per-crate log levels.
/// Format: `DORKSCOPE_LOG=dorkscope_synth=debug,dorkscope_risk=info`
///
/// Falls back to `warn` if `DORKSCOPE_LOG` is not set or is invalid.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_filter(DEFAULT_LOG_FILTER);
}

/// Initialize tracing, using `fallback` when `DORKSCOPE_LOG` is unset.
///
/// Output goes to stderr so reports on stdout stay machine-readable.
pub fn init_tracing_with_filter(fallback: &str) {
    INIT.call_once(|| {
        // A host that already installed a global subscriber keeps it.
        let _ = subscriber(resolve_filter(fallback)).try_init();
    });
}

/// Run `f` with a scoped subscriber on the default filter.
///
/// Covers work that happens before the global subscriber can be installed,
/// such as loading the config that names the log filter.
pub fn with_bootstrap_tracing<T>(f: impl FnOnce() -> T) -> T {
    let dispatch = Dispatch::new(subscriber(resolve_filter(DEFAULT_LOG_FILTER)));
    ::tracing::dispatcher::with_default(&dispatch, f)
}

fn resolve_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env("DORKSCOPE_LOG")
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
}
