//! Metric parameter configuration.

use serde::{Deserialize, Serialize};

use crate::metrics::{DEFAULT_ALPHA, DEFAULT_REQUIRED_RETURN, DEFAULT_RISK_FREE};

/// Scalar parameters shared by the metric functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricParams {
    /// Threshold below which a return counts as downside (Sortino).
    #[serde(default = "default_required_return")]
    pub required_return: f64,
    /// Annualized risk-free rate (Sharpe, Treynor).
    #[serde(default = "default_risk_free")]
    pub risk_free: f64,
    /// Confidence level for VaR/CVaR.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

impl Default for MetricParams {
    fn default() -> Self {
        Self {
            required_return: default_required_return(),
            risk_free: default_risk_free(),
            alpha: default_alpha(),
        }
    }
}

const fn default_required_return() -> f64 {
    DEFAULT_REQUIRED_RETURN
}

const fn default_risk_free() -> f64 {
    DEFAULT_RISK_FREE
}

const fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}
