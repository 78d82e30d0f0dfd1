//! Risk-adjusted performance metrics over monthly return series.
//!
//! Implements standard metrics as pure functions of one or two series:
//! - Sortino ratio (downside risk-adjusted returns)
//! - Sharpe ratio (volatility-adjusted returns)
//! - Calmar ratio (drawdown-adjusted returns)
//! - Treynor ratio (beta-adjusted returns)
//! - Information ratio (tracking-error-adjusted active returns)
//! - Maximum drawdown (peak-to-trough decline)
//! - Value at Risk and Conditional Value at Risk
//!
//! An undefined result is returned as `f64::NAN`, so tabular consumers can
//! filter it with `is_nan` instead of handling errors.

mod constants;
mod drawdown;
mod format;
mod math;
mod ratios;
mod report;
mod series;
mod tail;

pub use constants::{
    DEFAULT_ALPHA, DEFAULT_REQUIRED_RETURN, DEFAULT_RISK_FREE, PERIODS_PER_YEAR,
    SQRT_PERIODS_PER_YEAR,
};
pub use drawdown::{calmar_ratio, drawdown_series, max_drawdown};
pub use format::{UNDEFINED, format_optional_ratio, format_pct, format_ratio};
pub use ratios::{information_ratio, sharpe_ratio, sortino_ratio, treynor_ratio};
pub use report::MetricsReport;
pub use series::ReturnSeries;
pub use tail::{cvar, value_at_risk};
