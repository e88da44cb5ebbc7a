//! Number <-> text conversion for the display and the entry buffer.
//!
//! Results are written back into the entry buffer so they can be chained,
//! so whatever [`format_number`] produces must parse again with
//! [`parse_entry`].

/// Smallest magnitude printed in exponent form
const EXPONENT_ABOVE: f64 = 1e21;

/// Non-zero magnitudes below this are printed in exponent form
const EXPONENT_BELOW: f64 = 1e-6;

/// Format a number for the display.
///
/// - integral values have no fractional part (`10`, not `10.0`)
/// - negative zero prints as `0`
/// - infinities print as `Infinity` / `-Infinity`
/// - very large or very small magnitudes use a signed exponent (`1e+21`, `1.5e-7`)
///
/// ```rust
/// use calc_core::engine::number_text::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        let text = format!("{:e}", value);
        // `{:e}` omits the sign on positive exponents
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        };
    }

    format!("{}", value)
}

/// Convert entry buffer text to a number.
///
/// Text that does not parse (only reachable by typing digits after a
/// chained `Infinity` or `NaN`) yields NaN.
pub fn parse_entry(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_formatted_text_parses_back() {
        for value in [10.0, -3.5, 1e21, 1.5e-7, 0.30000000000000004] {
            assert_eq!(parse_entry(&format_number(value)), value);
        }
        assert_eq!(parse_entry("Infinity"), f64::INFINITY);
        assert_eq!(parse_entry("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_entry("NaN").is_nan());
    }

    #[test]
    fn test_parse_entry_buffer_shapes() {
        assert_eq!(parse_entry("0"), 0.0);
        assert_eq!(parse_entry("5."), 5.0);
        assert_eq!(parse_entry("0.25"), 0.25);
        assert!(parse_entry("Infinity5").is_nan());
    }
}
