//! Number formatting for the calculator display.

/// Results keep at most this many fractional digits.
pub const MAX_FRACTION_DIGITS: usize = 8;

/// Parse an operand as typed into the display ("5.", "0.25", "-3").
pub fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Format a result for the display.
///
/// Integral values print without a fraction. Everything else is rounded to
/// [`MAX_FRACTION_DIGITS`] with trailing zeros and a dangling point removed.
/// Returns `None` for NaN and infinities.
pub fn format_number(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    // -0 and 0 both render as "0"
    let value = if value == 0.0 { 0.0 } else { value };

    if value.fract() == 0.0 {
        return Some(format!("{}", value));
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };
    Some(trimmed.to_string())
}

/// Format an operand rewritten in place (percent).
///
/// Keeps full precision: the shortest text that parses back to `value`.
/// Returns `None` for NaN and infinities.
pub fn format_operand(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let value = if value == 0.0 { 0.0 } else { value };
    Some(format!("{}", value))
}
