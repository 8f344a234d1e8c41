/// Convert a Celsius temperature to Fahrenheit.
///
/// Full precision is kept; rounding is left to [`format_one_decimal`].
///
/// # Examples
/// ```
/// use minyr::utils::celsius_to_fahrenheit;
///
/// assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
/// assert!((celsius_to_fahrenheit(6.0) - 42.8).abs() < 1e-9);
/// ```
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Format a temperature with exactly one fractional digit
pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}
