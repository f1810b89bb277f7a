//! JavaScript-compatible textual rendering of values

use std::fmt;

use super::PropValue;

/// JavaScript `Number::toString` for base 10.
///
/// Integral values print without a fractional part, `-0` prints as `0`,
/// and magnitudes outside `[1e-6, 1e21)` use exponent notation with an
/// explicit sign (`1e+21`, `1e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", n);
    }

    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

impl fmt::Display for PropValue {
    /// JavaScript `ToString`. `Unknown` prints as `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::String(s) => write!(f, "{}", s),
            PropValue::Number(n) => write!(f, "{}", format_number(*n)),
            PropValue::Boolean(b) => write!(f, "{}", b),
            PropValue::Undefined => write!(f, "undefined"),
            PropValue::Unknown => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integral_numbers() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_fractional_numbers() {
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_exponent_notation() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_display_values() {
        assert_eq!(PropValue::string("bar").to_string(), "bar");
        assert_eq!(PropValue::Number(-1.0).to_string(), "-1");
        assert_eq!(PropValue::Boolean(true).to_string(), "true");
        assert_eq!(PropValue::Undefined.to_string(), "undefined");
        assert_eq!(PropValue::Unknown.to_string(), "null");
    }
}
