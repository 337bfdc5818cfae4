//! Roster CLI - terminal front end for the staffing dashboard
//!
//! Wires configuration, logging, the file-backed store and the report
//! client together behind the `roster` binary.

#![warn(unreachable_pub)]

pub mod commands;
pub mod config;
pub mod confirm;
pub mod render;

pub use commands::{execute, Command, Context};
pub use config::{ConfigError, RosterConfig};
pub use confirm::StdinConfirm;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber
///
/// `RUST_LOG` overrides the default `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
