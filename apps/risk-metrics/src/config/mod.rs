//! Configuration module for risk metric computation.
//!
//! Loads metric parameters and logging settings from YAML, with environment
//! variable interpolation and validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use risk_metrics::config::load_config;
//!
//! // Load from default path (risk-metrics.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/metrics.yaml"))?;
//!
//! println!("CVaR alpha: {}", config.metrics.alpha);
//! ```

mod observability;
mod params;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use observability::{LoggingConfig, ObservabilityConfig};
pub use params::MetricParams;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "risk-metrics.yaml";

/// Supported log output formats.
const LOG_FORMATS: [&str; 2] = ["json", "pretty"];

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Metric parameters.
    #[serde(default)]
    pub metrics: MetricParams,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to [`DEFAULT_CONFIG_PATH`].
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    let config = load_config_from_string(&contents)?;
    tracing::info!(
        path,
        alpha = config.metrics.alpha,
        risk_free = config.metrics.risk_free,
        required_return = config.metrics.required_return,
        "Loaded risk metrics configuration"
    );

    Ok(config)
}

/// Load configuration from a YAML string (useful for testing).
///
/// A blank document yields the default configuration.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);

    let config: Config = if interpolated.trim().is_empty() {
        tracing::debug!("Empty configuration document, using defaults");
        Config::default()
    } else {
        serde_yaml_bw::from_str(&interpolated)?
    };

    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let params = &config.metrics;

    if !(params.alpha > 0.0 && params.alpha < 1.0) {
        return Err(ConfigError::ValidationError(
            "metrics.alpha must be strictly between 0.0 and 1.0".to_string(),
        ));
    }

    if !(-1.0..=1.0).contains(&params.risk_free) {
        return Err(ConfigError::ValidationError(
            "metrics.risk_free must be between -1.0 and 1.0".to_string(),
        ));
    }

    if !params.required_return.is_finite() {
        return Err(ConfigError::ValidationError(
            "metrics.required_return must be finite".to_string(),
        ));
    }

    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    Ok(())
}
