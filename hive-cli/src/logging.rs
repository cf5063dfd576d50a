//! Logging setup
//!
//! One subscriber per process, installed at entry-point startup. The
//! default filter can be overridden through `RUST_LOG`. Diagnostics go to
//! stderr; standard output is reserved for the final status line.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the process-wide tracing subscriber
///
/// # Arguments
/// * `default_filter` - Filter directive used when `RUST_LOG` is not set
pub fn init(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
