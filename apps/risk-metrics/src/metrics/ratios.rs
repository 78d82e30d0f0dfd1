//! Risk-adjusted return ratios.
//!
//! Every ratio annualizes a monthly mean by [`PERIODS_PER_YEAR`] and a
//! monthly deviation by its square root. An undefined result (empty or zero
//! denominator) is reported as `f64::NAN`, never as an error or infinity.
//! Missing (NaN) periods are left out of every mean and deviation.

use super::constants::{PERIODS_PER_YEAR, SQRT_PERIODS_PER_YEAR};
use super::math::{covariance, downside_deviation, mean, std_dev, variance};
use super::series::ReturnSeries;

/// Subtract a constant monthly risk-free rate from every period.
fn excess_returns(returns: &[f64], risk_free: f64) -> Vec<f64> {
    let monthly_rf = risk_free / PERIODS_PER_YEAR;
    returns.iter().map(|r| r - monthly_rf).collect()
}

/// Annualized mean over annualized deviation, NaN if either is undefined
/// or the deviation is zero.
fn annualized_ratio(values: &[f64], deviation: Option<f64>) -> f64 {
    let (Some(avg), Some(deviation)) = (mean(values), deviation) else {
        return f64::NAN;
    };
    if deviation == 0.0 {
        return f64::NAN;
    }
    (avg * PERIODS_PER_YEAR) / (deviation * SQRT_PERIODS_PER_YEAR)
}

/// Calculate the Sortino ratio.
///
/// Sortino = (mean × 12) / (downside deviation × √12), where the downside
/// deviation is the root-mean-square of the returns strictly below
/// `required_return`. NaN when no return falls below the threshold or the
/// downside deviation is exactly zero.
pub fn sortino_ratio(returns: &ReturnSeries, required_return: f64) -> f64 {
    let Some(downside_dev) = downside_deviation(returns, required_return) else {
        return f64::NAN;
    };
    annualized_ratio(returns, Some(downside_dev))
}

/// Calculate the Sharpe ratio.
///
/// Sharpe = (mean excess × 12) / (std excess × √12), where excess subtracts
/// `risk_free / 12` from each period and the standard deviation uses the
/// n - 1 divisor. NaN for fewer than two returns or zero deviation.
pub fn sharpe_ratio(returns: &ReturnSeries, risk_free: f64) -> f64 {
    let excess = excess_returns(returns, risk_free);
    annualized_ratio(&excess, std_dev(&excess))
}

/// Calculate the Treynor ratio.
///
/// Treynor = (mean excess × 12) / β, with
/// β = cov(excess, benchmark excess) / var(benchmark excess).
///
/// Beta is undefined when the benchmark excess has zero (or undefined)
/// variance; the ratio is then NaN. A beta of exactly zero is guarded
/// separately and also yields NaN.
pub fn treynor_ratio(returns: &ReturnSeries, benchmark: &ReturnSeries, risk_free: f64) -> f64 {
    let excess = excess_returns(returns, risk_free);
    let bench_excess = excess_returns(benchmark, risk_free);

    let var_bench = variance(&bench_excess).unwrap_or(f64::NAN);
    let beta = if var_bench == 0.0 {
        f64::NAN
    } else {
        covariance(&excess, &bench_excess).unwrap_or(f64::NAN) / var_bench
    };

    if beta == 0.0 || beta.is_nan() {
        return f64::NAN;
    }

    let Some(avg) = mean(&excess) else {
        return f64::NAN;
    };
    (avg * PERIODS_PER_YEAR) / beta
}

/// Calculate the Information ratio.
///
/// IR = (mean active × 12) / (tracking error × √12), where active returns
/// are `returns - benchmark` index by index and the tracking error is their
/// sample standard deviation. NaN for fewer than two paired observations or
/// zero tracking error.
pub fn information_ratio(returns: &ReturnSeries, benchmark: &ReturnSeries) -> f64 {
    let active: Vec<f64> = returns.iter().zip(benchmark).map(|(r, b)| r - b).collect();
    annualized_ratio(&active, std_dev(&active))
}
