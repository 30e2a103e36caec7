//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at process start
//! - Respect `RUST_LOG` when set, default the crate to info otherwise

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging subsystem. Call once, before any other work.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "proxy_prefix=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
