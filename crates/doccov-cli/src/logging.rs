//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout carries only the report.

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// verbosity-derived default. Calling this twice is a no-op.
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logging(Verbosity::Quiet);
        init_logging(Verbosity::Debug);
    }
}
