// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp))]

//! Risk Metrics - Rust Core Library
//!
//! Risk-adjusted performance statistics computed from periodic (monthly)
//! return series.
//!
//! # Modules
//!
//! - `metrics`: the metric functions, the `ReturnSeries` input type and the
//!   aggregated `MetricsReport`
//! - `config`: YAML configuration for metric parameters and logging
//! - `observability`: tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use risk_metrics::{ReturnSeries, max_drawdown, sortino_ratio};
//!
//! let returns = ReturnSeries::from([0.05, -0.10, 0.03, -0.08, 0.02]);
//! assert!(max_drawdown(&returns) < 0.0);
//! assert!(sortino_ratio(&ReturnSeries::from([0.01, 0.02]), 0.0).is_nan());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Metric functions and the series type they operate on.
pub mod metrics;

/// Configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod observability;

pub use config::{Config, ConfigError, MetricParams, load_config, load_config_from_string};
pub use metrics::{
    MetricsReport, ReturnSeries, calmar_ratio, cvar, drawdown_series, information_ratio,
    max_drawdown, sharpe_ratio, sortino_ratio, treynor_ratio, value_at_risk,
};
pub use observability::{TracingError, init_tracing};
