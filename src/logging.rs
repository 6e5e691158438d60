// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber initialization.
//!
//! Logs go to stderr. `RUST_LOG` selects the filter; the default is `info`.

use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggingError {
    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global stderr subscriber.
///
/// # Errors
///
/// Returns [`LoggingError::SubscriberAlreadySet`] if a global subscriber
/// was installed before.
pub fn init() -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
