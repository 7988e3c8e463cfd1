//! Logging utilities for the Artistry backend.
//!
//! All crates log through `tracing`. This module installs the subscriber once at
//! startup.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO level.
///
/// # Examples
///
/// ```
/// use artistry_common::logging;
///
/// logging::init();
/// // later calls are harmless
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level for the `artistry` crates.
///
/// `RUST_LOG` is honoured for everything else. If a global subscriber is already
/// installed (tests, embedding) this is a no-op.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    match format!("artistry={}", level).parse() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(err) => eprintln!("invalid log directive for level {}: {}", level, err),
    }

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
