//! Thumb label text.

/// Formats `value` with exactly `digits` fractional digits.
pub fn format_value(value: f64, digits: usize) -> String {
    format!("{value:.digits$}")
}
