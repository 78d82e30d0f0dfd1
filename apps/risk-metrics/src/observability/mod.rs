//! Logging setup for consumers of the metrics library.
//!
//! # Example
//!
//! ```ignore
//! use risk_metrics::config::LoggingConfig;
//! use risk_metrics::observability::init_tracing;
//!
//! init_tracing(&LoggingConfig::default())?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Error type for tracing operations.
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter directive '{directive}': {message}")]
    InvalidDirective {
        /// The rejected directive.
        directive: String,
        /// Parser message.
        message: String,
    },
    /// Failed to initialize tracing subscriber.
    #[error("failed to initialize tracing subscriber: {0}")]
    SubscriberError(String),
}

/// Build the log filter, preferring `RUST_LOG` over the configured level.
///
/// # Errors
///
/// Returns `TracingError::InvalidDirective` if `RUST_LOG` is unset and the
/// configured level does not parse.
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, TracingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level).map_err(|e| TracingError::InvalidDirective {
        directive: config.level.clone(),
        message: e.to_string(),
    })
}

/// Install the global tracing subscriber.
///
/// Emits JSON lines unless `config.format` is `pretty`.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TracingError> {
    let filter = build_env_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if config.format == "pretty" {
        builder.pretty().try_init()
    } else {
        builder.json().try_init()
    };

    installed.map_err(|e| TracingError::SubscriberError(e.to_string()))?;
    tracing::debug!(level = %config.level, format = %config.format, "Tracing initialized");
    Ok(())
}
