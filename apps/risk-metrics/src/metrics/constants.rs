//! Constants for performance metric calculations.

/// Return periods per year. Input series are monthly.
pub const PERIODS_PER_YEAR: f64 = 12.0;

/// Square root of [`PERIODS_PER_YEAR`], used to annualize volatility.
pub const SQRT_PERIODS_PER_YEAR: f64 = 3.464_101_615_137_754_4;

/// Default threshold below which a return counts as downside.
pub const DEFAULT_REQUIRED_RETURN: f64 = 0.0;

/// Default annualized risk-free rate.
pub const DEFAULT_RISK_FREE: f64 = 0.0;

/// Default CVaR confidence level.
pub const DEFAULT_ALPHA: f64 = 0.95;
