//! Drawdown metrics over a compounded wealth curve.

use super::constants::PERIODS_PER_YEAR;
use super::math::mean;
use super::series::ReturnSeries;

/// Per-period drawdown of the wealth curve implied by `returns`.
///
/// Each return is treated as continuously compounded: wealth at period `i`
/// is `exp(r_0 + ... + r_i)`, with no baseline of 1 prepended. Drawdown is
/// `(wealth - peak) / peak` against the running peak up to and including
/// that period, so every value is `<= 0`.
///
/// A missing (NaN) period has no drawdown of its own and is reported as
/// NaN; it adds nothing to the running sum, so later periods keep
/// compounding from the last present one.
pub fn drawdown_series(returns: &ReturnSeries) -> Vec<f64> {
    let mut cumulative = 0.0;
    let mut peak = f64::NEG_INFINITY;

    returns
        .iter()
        .map(|r| {
            if r.is_nan() {
                return f64::NAN;
            }
            cumulative += r;
            let wealth = cumulative.exp();
            peak = peak.max(wealth);
            (wealth - peak) / peak
        })
        .collect()
}

/// Calculate the maximum drawdown.
///
/// Returns the most negative present value of [`drawdown_series`]. A wealth
/// curve that never declines gives `0.0`; a series with no present period
/// gives NaN.
pub fn max_drawdown(returns: &ReturnSeries) -> f64 {
    drawdown_series(returns)
        .into_iter()
        .filter(|d| !d.is_nan())
        .reduce(f64::min)
        .unwrap_or(f64::NAN)
}

/// Calculate the Calmar ratio.
///
/// Calmar = (mean × 12) / |max drawdown|. NaN when the maximum drawdown is
/// exactly zero; there is no tolerance, so a tiny negative drawdown still
/// produces a (large) finite ratio.
pub fn calmar_ratio(returns: &ReturnSeries) -> f64 {
    let mdd = max_drawdown(returns);
    if mdd == 0.0 {
        return f64::NAN;
    }

    let Some(avg) = mean(returns) else {
        return f64::NAN;
    };
    (avg * PERIODS_PER_YEAR) / mdd.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawdown_series_tracks_running_peak() {
        let returns = ReturnSeries::from([0.1, -0.1, 0.2]);
        let path = drawdown_series(&returns);

        assert_eq!(path.len(), 3);
        assert_eq!(path[0], 0.0);
        // Back to exp(0) = 1 from a peak of exp(0.1)
        assert!((path[1] - ((-0.1_f64).exp() - 1.0)).abs() < 1e-12);
        assert_eq!(path[2], 0.0);
    }

    #[test]
    fn test_max_drawdown() {
        let returns = ReturnSeries::from([0.05, -0.10, 0.03, -0.08, 0.02]);
        // Peak exp(0.05) at the first period, trough exp(-0.10) at the fourth
        let expected = (-0.15_f64).exp() - 1.0;
        assert!((max_drawdown(&returns) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_max_drawdown_flat_and_rising() {
        assert_eq!(max_drawdown(&ReturnSeries::from([0.0, 0.0, 0.0])), 0.0);
        assert_eq!(max_drawdown(&ReturnSeries::from([0.01; 4])), 0.0);
        assert_eq!(max_drawdown(&ReturnSeries::from([-0.3])), 0.0);
    }

    #[test]
    fn test_max_drawdown_empty_is_nan() {
        assert!(max_drawdown(&ReturnSeries::default()).is_nan());
        assert!(drawdown_series(&ReturnSeries::default()).is_empty());
    }

    #[test]
    fn test_missing_period_is_skipped() {
        let returns = ReturnSeries::from([0.05, f64::NAN, -0.3, 0.01]);
        let path = drawdown_series(&returns);

        assert_eq!(path[0], 0.0);
        assert!(path[1].is_nan());
        // Wealth goes from exp(0.05) to exp(-0.25) across the gap
        assert!((path[2] - ((-0.3_f64).exp() - 1.0)).abs() < 1e-12);
        assert!((max_drawdown(&returns) - ((-0.3_f64).exp() - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_max_drawdown_all_missing_is_nan() {
        let returns = ReturnSeries::from([f64::NAN, f64::NAN]);
        assert!(max_drawdown(&returns).is_nan());
        assert!(calmar_ratio(&returns).is_nan());
    }

    #[test]
    fn test_calmar_ratio_skips_missing_period() {
        let returns = ReturnSeries::from([0.05, f64::NAN, -0.3, 0.01]);
        let avg = (0.05 - 0.3 + 0.01) / 3.0;
        let expected = (avg * 12.0) / (1.0 - (-0.3_f64).exp());
        assert!((calmar_ratio(&returns) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_calmar_ratio() {
        let returns = ReturnSeries::from([0.05, -0.10, 0.03, -0.08, 0.02]);
        let avg = (0.05 - 0.10 + 0.03 - 0.08 + 0.02) / 5.0;
        let expected = (avg * 12.0) / (1.0 - (-0.15_f64).exp());
        assert!((calmar_ratio(&returns) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_calmar_zero_drawdown_is_nan() {
        assert!(calmar_ratio(&ReturnSeries::from([0.02, 0.01, 0.03])).is_nan());
        assert!(calmar_ratio(&ReturnSeries::from([-0.05])).is_nan());
        assert!(calmar_ratio(&ReturnSeries::default()).is_nan());
    }
}
