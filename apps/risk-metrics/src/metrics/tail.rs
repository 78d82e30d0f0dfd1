//! Tail-risk metrics: Value at Risk and Conditional Value at Risk.

use super::math::{mean, quantile};
use super::series::ReturnSeries;

/// Calculate historical Value at Risk at confidence `alpha`.
///
/// The empirical `(1 - alpha)` quantile of the returns, linearly
/// interpolated between order statistics. Expressed as a return (a loss is
/// negative), not as a positive loss amount. Missing (NaN) periods are
/// dropped first. NaN for a series with no present return or an `alpha`
/// outside `[0, 1]`.
pub fn value_at_risk(returns: &ReturnSeries, alpha: f64) -> f64 {
    quantile(returns, 1.0 - alpha).unwrap_or(f64::NAN)
}

/// Calculate Conditional Value at Risk (expected shortfall) at confidence
/// `alpha`.
///
/// Mean of every return at or below [`value_at_risk`]. Because the boundary
/// is inclusive and the quantile interpolated, the tail can hold slightly
/// more or fewer than `(1 - alpha) * n` observations on small samples.
pub fn cvar(returns: &ReturnSeries, alpha: f64) -> f64 {
    let var = value_at_risk(returns, alpha);
    if var.is_nan() {
        return f64::NAN;
    }

    let tail: Vec<f64> = returns.iter().copied().filter(|r| *r <= var).collect();
    mean(&tail).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_returns() -> ReturnSeries {
        ReturnSeries::from([
            0.04, -0.02, 0.01, -0.08, 0.03, 0.02, -0.05, 0.00, 0.06, -0.01,
        ])
    }

    #[test]
    fn test_value_at_risk_interpolates() {
        // Sorted: -0.08, -0.05, ...; h = 9 * 0.05 = 0.45
        let expected = -0.08 + 0.45 * (-0.05 - -0.08);
        assert!((value_at_risk(&ten_returns(), 0.95) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_cvar_averages_inclusive_tail() {
        // Only -0.08 lies at or below the interpolated VaR of -0.0665
        assert!((cvar(&ten_returns(), 0.95) - -0.08).abs() < 1e-12);

        // alpha = 0.5: VaR is the median 0.005; five returns at or below it
        let expected = (-0.02 + -0.08 - 0.05 + 0.00 - 0.01) / 5.0;
        assert!((cvar(&ten_returns(), 0.5) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_cvar_boundary_is_inclusive() {
        // alpha = 1.0 puts VaR exactly on the minimum
        let returns = ReturnSeries::from([0.02, -0.03, -0.03, 0.01]);
        assert_eq!(cvar(&returns, 1.0), -0.03);
    }

    #[test]
    fn test_cvar_single_element() {
        let returns = ReturnSeries::from([-0.07]);
        for alpha in [0.01, 0.5, 0.95, 0.99] {
            assert_eq!(cvar(&returns, alpha), -0.07);
        }
    }

    #[test]
    fn test_missing_periods_are_skipped() {
        let mut values = ten_returns().into_inner();
        values.insert(3, f64::NAN);
        let gappy = ReturnSeries::from(values);

        for alpha in [0.5, 0.95] {
            assert_eq!(value_at_risk(&gappy, alpha), value_at_risk(&ten_returns(), alpha));
            assert_eq!(cvar(&gappy, alpha), cvar(&ten_returns(), alpha));
        }
        assert!(cvar(&ReturnSeries::from([f64::NAN]), 0.95).is_nan());
    }

    #[test]
    fn test_cvar_undefined_cases() {
        assert!(cvar(&ReturnSeries::default(), 0.95).is_nan());
        assert!(cvar(&ten_returns(), 1.5).is_nan());
        assert!(cvar(&ten_returns(), f64::NAN).is_nan());
    }
}
