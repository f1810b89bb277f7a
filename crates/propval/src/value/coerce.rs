//! JavaScript type coercions: ToNumber, ToBoolean, ToInt32

use super::PropValue;

impl PropValue {
    /// JavaScript `ToNumber`.
    ///
    /// `Unknown` coerces like `null` (0), `Undefined` like `undefined` (NaN).
    pub fn to_number(&self) -> f64 {
        match self {
            PropValue::String(s) => string_to_number(s),
            PropValue::Number(n) => *n,
            PropValue::Boolean(true) => 1.0,
            PropValue::Boolean(false) => 0.0,
            PropValue::Undefined => f64::NAN,
            PropValue::Unknown => 0.0,
        }
    }

    /// JavaScript `ToBoolean`.
    pub fn to_boolean(&self) -> bool {
        match self {
            PropValue::String(s) => !s.is_empty(),
            PropValue::Number(n) => !(*n == 0.0 || n.is_nan()),
            PropValue::Boolean(b) => *b,
            PropValue::Undefined | PropValue::Unknown => false,
        }
    }

    /// JavaScript `ToInt32`: NaN and infinities become 0, everything else
    /// is truncated and wrapped modulo 2^32.
    pub fn to_int32(&self) -> i32 {
        number_to_int32(self.to_number())
    }
}

fn number_to_int32(n: f64) -> i32 {
    if !n.is_finite() {
        return 0;
    }
    let wrapped = n.trunc().rem_euclid(4_294_967_296.0);
    wrapped as u32 as i32
}

/// JavaScript `StringToNumber`.
///
/// Surrounding whitespace is ignored and the empty string is 0. Accepts
/// decimal literals, signed `Infinity`, and unsigned `0x` / `0o` / `0b`
/// integers. Anything else is NaN.
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_digits(&s[2..], radix);
    }

    if is_decimal_literal(s) {
        s.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// `[+-] digits [. digits] [(e|E) [+-] digits]`, with at least one mantissa digit.
///
/// Rust's float parser also takes `inf` and `nan`; JavaScript does not.
fn is_decimal_literal(s: &str) -> bool {
    fn strip_sign(part: &str) -> &str {
        part.strip_prefix(|c: char| c == '+' || c == '-')
            .unwrap_or(part)
    }
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    let s = strip_sign(s);
    let (mantissa, exponent) = match s.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };

    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int.is_empty() && frac.is_empty() {
        return false;
    }
    if !all_digits(int) || !all_digits(frac) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = strip_sign(exp);
            !exp.is_empty() && all_digits(exp)
        }
    }
}
