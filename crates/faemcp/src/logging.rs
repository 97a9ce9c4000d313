//! Tracing setup
//!
//! Logs go to stderr; stdout carries the MCP protocol.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Variable read before `RUST_LOG`
pub const LOG_ENV: &str = "FAEMCP_LOG";

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(Level::WARN.as_str()));
    let filter = if verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}
