// Number bases, base-aware parsing of the input buffer and display formatting
//
// RUST CONCEPT: Parsing uses "longest valid prefix" semantics
// A buffer like "5-3" parses as 5 and "-" alone parses as NaN. Nothing here
// ever fails; invalid text becomes NaN, which the display renders as "Error".

use core::fmt;
use core::str::FromStr;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};

use crate::input::InputError;

/// Text shown for a not-a-number value
pub const ERROR_TEXT: &str = "Error";

/// Decimal exponents above this switch base-10 output to scientific notation
const MAX_PLAIN_EXPONENT: i32 = 21;
/// Decimal exponents at or below this switch base-10 output to scientific notation
const MIN_PLAIN_EXPONENT: i32 = -6;

/// The numeral system used for digit entry and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Base {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hexadecimal,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal];

    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    /// Short word used to select this base from the command line
    pub fn name(self) -> &'static str {
        match self {
            Base::Binary => "bin",
            Base::Octal => "oct",
            Base::Decimal => "dec",
            Base::Hexadecimal => "hex",
        }
    }

    /// Only base 10 has a fractional input syntax
    pub fn allows_decimal_point(self) -> bool {
        self == Base::Decimal
    }

    /// Whether the A-F keys are live
    pub fn accepts_hex_letters(self) -> bool {
        self == Base::Hexadecimal
    }

    /// Whether `ch` may be typed into the input buffer in this base
    ///
    /// The sign character is accepted in every base; the decimal point only
    /// in base 10. Letters are matched case-insensitively.
    pub fn accepts(self, ch: char) -> bool {
        match ch {
            '-' => true,
            '.' => self.allows_decimal_point(),
            _ => ch.to_digit(self.radix()).is_some(),
        }
    }
}

impl TryFrom<u32> for Base {
    type Error = InputError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        match radix {
            2 => Ok(Base::Binary),
            8 => Ok(Base::Octal),
            10 => Ok(Base::Decimal),
            16 => Ok(Base::Hexadecimal),
            other => Err(InputError::InvalidBase(other.to_string())),
        }
    }
}

impl FromStr for Base {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(base) = Base::ALL.into_iter().find(|b| b.name() == s) {
            return Ok(base);
        }
        s.parse::<u32>()
            .map_err(|_| InputError::InvalidBase(s.to_string()))
            .and_then(Base::try_from)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.radix())
    }
}

/// Parse a committed buffer using the rule for `base`
///
/// Base 10 takes a floating-point parse; every other base takes an integer
/// parse in that radix.
pub fn parse_in_base(text: &str, base: Base) -> f64 {
    match base {
        Base::Decimal => parse_decimal(text),
        other => parse_integer(text, other.radix()),
    }
}

/// Floating-point parse of the longest numeric prefix of `text`
pub fn parse_decimal(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].to_ascii_lowercase().parse::<f64>().unwrap_or(f64::NAN)
}

/// Integer parse of the longest run of `radix` digits at the start of `text`
pub fn parse_integer(text: &str, radix: u32) -> f64 {
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digit_len = rest
        .chars()
        .take_while(|c| c.to_digit(radix).is_some())
        .count();
    if digit_len == 0 {
        return f64::NAN;
    }

    // RUST CONCEPT: BigInt accumulates digit runs longer than any machine integer
    let magnitude = BigInt::parse_bytes(rest[..digit_len].as_bytes(), radix)
        .and_then(|n| n.to_f64())
        .unwrap_or(f64::NAN);

    if negative { -magnitude } else { magnitude }
}

/// Render `value` the way the display shows it in `base`
pub fn format_value(value: f64, base: Base) -> String {
    if value.is_nan() {
        return ERROR_TEXT.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    match base {
        Base::Decimal => format_decimal(value),
        other => format_truncated(value, other.radix()),
    }
}

// Non-decimal bases show the integer part only (truncated toward zero)
fn format_truncated(value: f64, radix: u32) -> String {
    let truncated = value.trunc();
    if truncated == 0.0 {
        return "0".to_string();
    }
    match BigInt::from_f64(truncated) {
        Some(n) => n.to_str_radix(radix).to_uppercase(),
        None => ERROR_TEXT.to_string(),
    }
}

// Shortest round-trip digits, plain notation for exponents in (-6, 21]
fn format_decimal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest digits that round-trip, e.g. "6.5025e4"
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = match exponent.parse::<i32>() {
        Ok(e) => e + 1,
        Err(_) => return scientific,
    };

    let body = if k <= n && n <= MAX_PLAIN_EXPONENT {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exp = n - 1;
        let exp_sign = if exp >= 0 { "+" } else { "-" };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, exp_sign, exp.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, exp_sign, exp.abs())
        }
    };

    format!("{}{}", sign, body)
}
