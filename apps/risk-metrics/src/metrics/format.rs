//! Formatting utilities for performance metrics display.

/// Placeholder shown for an undefined (NaN) metric.
pub const UNDEFINED: &str = "N/A";

/// Format a fractional value as percentage string.
#[must_use]
pub fn format_pct(value: f64) -> String {
    if value.is_nan() {
        return UNDEFINED.to_string();
    }
    format!("{:.2}%", value * 100.0)
}

/// Format a ratio with 2 decimal places.
#[must_use]
pub fn format_ratio(value: f64) -> String {
    if value.is_nan() {
        return UNDEFINED.to_string();
    }
    format!("{value:.2}")
}

/// Format an optional ratio; a missing ratio renders like an undefined one.
#[must_use]
pub fn format_optional_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), format_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_pct(0.1523), "15.23%");
        assert_eq!(format_pct(-0.139_292), "-13.93%");
        assert_eq!(format_pct(-0.1), "-10.00%");
        assert_eq!(format_ratio(2.354), "2.35");
        assert_eq!(format_optional_ratio(Some(1.0)), "1.00");
        assert_eq!(format_optional_ratio(None), "N/A");
    }

    #[test]
    fn test_format_nan_as_undefined() {
        assert_eq!(format_pct(f64::NAN), "N/A");
        assert_eq!(format_ratio(f64::NAN), "N/A");
        assert_eq!(format_optional_ratio(Some(f64::NAN)), "N/A");
        assert_eq!(format_optional_ratio(None), UNDEFINED);
    }
}
