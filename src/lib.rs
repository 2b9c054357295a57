pub mod config;
pub mod cost;
pub mod dataset;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod server;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Can only be called
/// once per process.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
