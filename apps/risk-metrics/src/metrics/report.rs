//! Aggregated metric report for one return series.

use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::config::MetricParams;

use super::drawdown::{calmar_ratio, max_drawdown};
use super::format::{format_optional_ratio, format_pct, format_ratio};
use super::ratios::{information_ratio, sharpe_ratio, sortino_ratio, treynor_ratio};
use super::series::ReturnSeries;
use super::tail::{cvar, value_at_risk};

/// Every metric computed for one return series.
///
/// Undefined metrics are NaN and serialize as JSON `null`; reading a report
/// back turns `null` into NaN again. Relative metrics are left out of the
/// JSON when no benchmark was supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Number of periods in the series, missing ones included.
    pub observations: usize,
    /// Sortino ratio (annualized).
    #[serde(deserialize_with = "nan_from_null")]
    pub sortino_ratio: f64,
    /// Sharpe ratio (annualized).
    #[serde(deserialize_with = "nan_from_null")]
    pub sharpe_ratio: f64,
    /// Calmar ratio.
    #[serde(deserialize_with = "nan_from_null")]
    pub calmar_ratio: f64,
    /// Maximum drawdown (negative fraction, e.g. -0.20 = 20% decline).
    #[serde(deserialize_with = "nan_from_null")]
    pub max_drawdown: f64,
    /// Value at Risk at the configured confidence (a return, not a loss).
    #[serde(deserialize_with = "nan_from_null")]
    pub value_at_risk: f64,
    /// Conditional Value at Risk at the configured confidence.
    #[serde(deserialize_with = "nan_from_null")]
    pub cvar: f64,
    /// Treynor ratio, when a benchmark was supplied.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_nan_from_null"
    )]
    pub treynor_ratio: Option<f64>,
    /// Information ratio, when a benchmark was supplied.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_nan_from_null"
    )]
    pub information_ratio: Option<f64>,
}

/// serde_json writes NaN as `null`; map it back.
fn nan_from_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// A field that is present but `null` was computed and came out NaN.
fn present_nan_from_null<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    nan_from_null(deserializer).map(Some)
}

impl MetricsReport {
    /// Compute every metric for `returns`.
    ///
    /// Relative metrics are only computed when `benchmark` is given.
    #[must_use]
    pub fn compute(
        returns: &ReturnSeries,
        benchmark: Option<&ReturnSeries>,
        params: &MetricParams,
    ) -> Self {
        let report = Self {
            observations: returns.len(),
            sortino_ratio: sortino_ratio(returns, params.required_return),
            sharpe_ratio: sharpe_ratio(returns, params.risk_free),
            calmar_ratio: calmar_ratio(returns),
            max_drawdown: max_drawdown(returns),
            value_at_risk: value_at_risk(returns, params.alpha),
            cvar: cvar(returns, params.alpha),
            treynor_ratio: benchmark.map(|b| treynor_ratio(returns, b, params.risk_free)),
            information_ratio: benchmark.map(|b| information_ratio(returns, b)),
        };

        let undefined = report.undefined_metrics();
        if !undefined.is_empty() {
            debug!(
                observations = report.observations,
                undefined = ?undefined,
                "Metrics undefined for series"
            );
        }

        report
    }

    /// Compute reports for many series in parallel, preserving input order.
    ///
    /// Every series is paired with the same `benchmark`.
    #[must_use]
    pub fn compute_batch(
        series: &[ReturnSeries],
        benchmark: Option<&ReturnSeries>,
        params: &MetricParams,
    ) -> Vec<Self> {
        info!(
            series = series.len(),
            with_benchmark = benchmark.is_some(),
            "Computing metric reports"
        );

        series
            .par_iter()
            .map(|returns| Self::compute(returns, benchmark, params))
            .collect()
    }

    /// Names of the metrics that came out undefined (NaN).
    ///
    /// Metrics skipped for lack of a benchmark are not listed.
    #[must_use]
    pub fn undefined_metrics(&self) -> Vec<&'static str> {
        let metrics = [
            ("sortino_ratio", Some(self.sortino_ratio)),
            ("sharpe_ratio", Some(self.sharpe_ratio)),
            ("calmar_ratio", Some(self.calmar_ratio)),
            ("max_drawdown", Some(self.max_drawdown)),
            ("value_at_risk", Some(self.value_at_risk)),
            ("cvar", Some(self.cvar)),
            ("treynor_ratio", self.treynor_ratio),
            ("information_ratio", self.information_ratio),
        ];

        metrics
            .into_iter()
            .filter(|(_, value)| value.is_some_and(f64::is_nan))
            .map(|(name, _)| name)
            .collect()
    }

    /// Export the report to pretty-printed JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Generate a summary report.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Risk Metrics Summary\n\
             ====================\n\
             \n\
             Observations: {}\n\
             \n\
             Sortino Ratio: {}\n\
             Sharpe Ratio: {}\n\
             Calmar Ratio: {}\n\
             Treynor Ratio: {}\n\
             Information Ratio: {}\n\
             \n\
             Max Drawdown: {}\n\
             VaR: {}\n\
             CVaR: {}",
            self.observations,
            format_ratio(self.sortino_ratio),
            format_ratio(self.sharpe_ratio),
            format_ratio(self.calmar_ratio),
            format_optional_ratio(self.treynor_ratio),
            format_optional_ratio(self.information_ratio),
            format_pct(self.max_drawdown),
            format_pct(self.value_at_risk),
            format_pct(self.cvar),
        )
    }
}
