//! Probe harness for the value-semantics libraries.
//!
//! Each probe builds a handful of boxed values or shared sequences and
//! records the verdicts of identity and equality checks on them. The
//! `valsem` binary prints those verdicts; tests assert on them directly.

pub mod commands;
mod config;
mod errors;
pub mod probes;

pub use config::{parse_pool_config, pool_config_from_env, ProbeConfig, INT_CACHE_HIGH_VAR};
pub use errors::CliError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=valsem_alias=debug` or `RUST_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
