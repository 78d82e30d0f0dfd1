//! Statistical math utilities for performance metric calculations.
//!
//! Variance, standard deviation and covariance use the sample convention
//! (divide by n - 1). This is fixed: small-sample results depend on it.
//!
//! NaN marks a missing period. Every helper skips missing values (paired
//! helpers skip a pair when either side is missing) and counts only the
//! values that are present.

/// Values that are present (not NaN).
fn present(values: &[f64]) -> impl Iterator<Item = f64> + '_ {
    values.iter().copied().filter(|v| !v.is_nan())
}

/// Calculate mean of a slice of values.
pub fn mean(values: &[f64]) -> Option<f64> {
    let (sum, count) = present(values)
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}

/// Calculate sample variance (n - 1 divisor).
///
/// Deviations are taken after shifting every value by the first one, so a
/// constant series has a variance of exactly zero.
pub fn variance(values: &[f64]) -> Option<f64> {
    let values: Vec<f64> = present(values).collect();
    if values.len() < 2 {
        return None;
    }

    let pivot = values[0];
    let shifted: Vec<f64> = values.iter().map(|v| v - pivot).collect();
    let avg = mean(&shifted)?;
    let variance_sum: f64 = shifted.iter().map(|d| (d - avg) * (d - avg)).sum();
    Some(variance_sum / (shifted.len() - 1) as f64)
}

/// Calculate sample standard deviation (n - 1 divisor).
pub fn std_dev(values: &[f64]) -> Option<f64> {
    variance(values).map(f64::sqrt)
}

/// Calculate sample covariance (n - 1 divisor) of two paired slices.
///
/// Pairs are taken index by index; values past the end of the shorter
/// slice have no partner and are ignored. Both sides are shifted by their
/// first pair, as in [`variance`].
pub fn covariance(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (*x, *y))
        .filter(|(x, y)| !x.is_nan() && !y.is_nan())
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let (x_pivot, y_pivot) = pairs[0];
    let dx: Vec<f64> = pairs.iter().map(|(x, _)| x - x_pivot).collect();
    let dy: Vec<f64> = pairs.iter().map(|(_, y)| y - y_pivot).collect();
    let x_avg = mean(&dx)?;
    let y_avg = mean(&dy)?;
    let co_sum: f64 = dx
        .iter()
        .zip(&dy)
        .map(|(x, y)| (x - x_avg) * (y - y_avg))
        .sum();
    Some(co_sum / (pairs.len() - 1) as f64)
}

/// Root-mean-square of the values strictly below `threshold`.
///
/// Values are squared around zero, not around the threshold or the mean.
/// Returns `None` when no value falls below the threshold.
pub fn downside_deviation(values: &[f64], threshold: f64) -> Option<f64> {
    let downside: Vec<f64> = present(values).filter(|v| *v < threshold).collect();
    if downside.is_empty() {
        return None;
    }

    let squares: Vec<f64> = downside.iter().map(|v| v * v).collect();
    mean(&squares).map(f64::sqrt)
}

/// Empirical quantile with linear interpolation between order statistics.
///
/// For sorted sample `x` of length `n`, position `h = (n - 1) * q`,
/// `a = x[floor(h)]`, `b = x[floor(h) + 1]` and `t = h - floor(h)`. The
/// result is `a + t * (b - a)` for `t < 0.5` and `b - (1 - t) * (b - a)`
/// otherwise, interpolating from the nearer order statistic.
/// Returns `None` for a sample with no present value or `q` outside `[0, 1]`.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if !(0.0..=1.0).contains(&q) {
        return None;
    }

    let mut sorted: Vec<f64> = present(values).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let h = (sorted.len() - 1) as f64 * q;
    let lower = h.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let fraction = h - h.floor();

    let (a, b) = (sorted[lower], sorted[upper]);
    let diff = b - a;
    if fraction >= 0.5 {
        Some(b - diff * (1.0 - fraction))
    } else {
        Some(a + diff * fraction)
    }
}
