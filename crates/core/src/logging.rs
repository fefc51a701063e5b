//! Structured logging infrastructure for mvplan.
//!
//! This module provides centralized logging initialization with support
//! for structured JSON output and environment-based configuration.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use tracing_subscriber::util::TryInitError;

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the logging system with structured output.
///
/// Log level can be configured via the `RUST_LOG` environment variable.
/// If not set, defaults to `info` level. Panics if a global subscriber is
/// already installed; use [`try_init`] where that can happen.
///
/// # Example
/// ```no_run
/// use mvplan_core::logging;
///
/// logging::init();
/// tracing::info!("Planner started");
/// ```
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .init();
}

/// Initialize the logging system with JSON output for production environments.
///
/// This format is suitable for log aggregation systems and structured log analysis.
/// Log level can be configured via the `RUST_LOG` environment variable.
///
/// # Example
/// ```no_run
/// use mvplan_core::logging;
///
/// logging::init_json();
/// tracing::info!(vehicle_id = "lauv-xplore-1", "Vehicle available");
/// ```
pub fn init_json() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().json().with_target(true).with_thread_ids(true))
        .init();
}

/// Like [`init`], but returns an error instead of panicking when a global
/// subscriber has already been set (test harnesses, embedding hosts).
pub fn try_init() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_init_is_repeatable() {
        // Only the first call in the process can install the subscriber
        let _ = try_init();
        assert!(try_init().is_err());
    }
}
