//! Small decimal helpers shared by the evaluators.
//!
//! Everything here works on `BigDecimal` and never goes through `f64`.

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, Sign};
use num_traits::{One, ToPrimitive, Zero};
use pmf_core::{Error, Result};

/// Decimal places used when the raw field is empty, non-numeric, or zero.
pub const DEFAULT_DECIMAL_PLACES: u32 = 10;

/// Upper bound on requested decimal places.
pub const MAX_DECIMAL_PLACES: u32 = 1000;

/// Largest integer argument the evaluators accept. Factorials and exact
/// powers grow with it.
pub const MAX_COUNT: u64 = 10_000;

/// Most fractional digits accepted for `p` and `lambda`.
pub const MAX_FRACTION_DIGITS: i64 = 100;

/// Largest Poisson rate; `e^lambda` is expanded as a series.
pub const MAX_RATE: u32 = 1000;

/// Significant digits kept by [`to_brief`] before switching to exponent form.
const BRIEF_DIGITS: usize = 30;

/// Parse a trimmed raw field as a decimal. Any failure is the generic
/// [`Error::InvalidInput`].
pub fn parse_decimal(raw: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(raw.trim()).map_err(|_| Error::InvalidInput)
}

/// Whether `x` has no fractional part. Reads the normalized exponent, so
/// `1e-1000000000` is answered without building `10^scale`.
pub fn is_integer(x: &BigDecimal) -> bool {
    x.is_zero() || x.normalized().as_bigint_and_exponent().1 <= 0
}

/// Whether `x` is an integer `>= 0`.
pub fn is_count(x: &BigDecimal) -> bool {
    is_integer(x) && !is_negative(x)
}

#[inline]
pub fn is_negative(x: &BigDecimal) -> bool {
    x < &BigDecimal::zero()
}

/// Digits before the decimal point of `|x|`, read off the exponent
/// without rescaling. Zero for `|x| < 1`.
fn integer_digits(x: &BigDecimal) -> i64 {
    if x.is_zero() {
        return 0;
    }
    let (_, scale) = x.as_bigint_and_exponent();
    (x.digits() as i64).saturating_sub(scale).max(0)
}

/// Convert a non-negative integer-valued decimal to `u64`, up to
/// [`MAX_COUNT`].
pub fn to_count(x: &BigDecimal) -> Result<u64> {
    if !is_count(x) {
        return Err(Error::Computation(format!(
            "expected a non-negative integer, got {}",
            to_brief(x)
        )));
    }
    if x.is_zero() {
        return Ok(0);
    }
    // Size check first: `to_u64` rescales to the exponent.
    let out_of_range =
        || Error::Computation(format!("count {} exceeds {}", to_brief(x), MAX_COUNT));
    if integer_digits(x) > 20 {
        return Err(out_of_range());
    }
    x.to_u64().filter(|&n| n <= MAX_COUNT).ok_or_else(out_of_range)
}

/// Normalize `x`, rejecting more than [`MAX_FRACTION_DIGITS`] fractional
/// digits.
pub fn bounded_fraction(name: &str, x: &BigDecimal) -> Result<BigDecimal> {
    let x = x.normalized();
    let (_, scale) = x.as_bigint_and_exponent();
    if scale > MAX_FRACTION_DIGITS {
        return Err(Error::Computation(format!(
            "{} has more than {} fractional digits",
            name, MAX_FRACTION_DIGITS
        )));
    }
    Ok(x)
}

/// [`bounded_fraction`] plus `x <= MAX_RATE`.
pub fn bounded_rate(name: &str, x: &BigDecimal) -> Result<BigDecimal> {
    let too_large = || Error::Computation(format!("{} exceeds {}", name, MAX_RATE));
    if integer_digits(x) > 4 {
        return Err(too_large());
    }
    let x = bounded_fraction(name, x)?;
    if x > BigDecimal::from(MAX_RATE) {
        return Err(too_large());
    }
    Ok(x)
}

/// Exact `base^exp` by square-and-multiply. `0^0 = 1`.
pub fn powu(base: &BigDecimal, mut exp: u64) -> BigDecimal {
    let mut result = BigDecimal::one();
    let mut b = base.clone();
    while exp > 0 {
        if exp & 1 == 1 {
            result = &result * &b;
        }
        exp >>= 1;
        if exp > 0 {
            b = &b * &b;
        }
    }
    result
}

/// `a / b`, rejecting a zero divisor instead of panicking.
pub fn checked_div(a: &BigDecimal, b: &BigDecimal) -> Result<BigDecimal> {
    if b.is_zero() {
        return Err(Error::Computation("division by zero".to_string()));
    }
    Ok(a / b)
}

/// Resolve the raw "decimals" field.
///
/// Reads the leading integer of the string (after optional whitespace and
/// sign). Missing, non-numeric or zero input falls back to
/// [`DEFAULT_DECIMAL_PLACES`]. A negative or oversized value is a
/// computation error.
pub fn decimal_places(raw: &str) -> Result<u32> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    let digits = rest[..len].trim_start_matches('0');
    if digits.is_empty() {
        return Ok(DEFAULT_DECIMAL_PLACES);
    }
    if negative {
        return Err(Error::Computation(format!("decimal places must be >= 0, got -{}", digits)));
    }
    digits.parse::<u32>().ok().filter(|&d| d <= MAX_DECIMAL_PLACES).ok_or_else(|| {
        Error::Computation(format!(
            "decimal places must be <= {}, got {}",
            MAX_DECIMAL_PLACES, digits
        ))
    })
}

/// Round half-up to `places` decimals and render in plain notation,
/// always with exactly `places` fractional digits.
pub fn to_fixed(value: &BigDecimal, places: u32) -> String {
    let rounded = value.with_scale_round(i64::from(places), RoundingMode::HalfUp);
    let (digits, scale) = rounded.as_bigint_and_exponent();
    format_plain(&digits, scale, places as usize)
}

/// Normalized plain notation: `0.50` -> `0.5`, `1e3` -> `1000`.
pub fn to_plain(value: &BigDecimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    let (digits, scale) = value.normalized().as_bigint_and_exponent();
    format_plain(&digits, scale, 0)
}

/// Short form for messages: plain notation when it is small, otherwise
/// `d.ddd...e<exp>` with at most [`BRIEF_DIGITS`] significant digits.
pub fn to_brief(value: &BigDecimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    let (digits, scale) = value.normalized().as_bigint_and_exponent();
    let magnitude = digits.magnitude().to_string();
    if magnitude.len() <= BRIEF_DIGITS && scale.unsigned_abs() <= BRIEF_DIGITS as u64 {
        return format_plain(&digits, scale, 0);
    }
    let exponent = (magnitude.len() as i64 - 1).saturating_sub(scale);
    let sign = if digits.sign() == Sign::Minus { "-" } else { "" };
    let (lead, rest) = magnitude.split_at(1);
    match rest.len() {
        0 => format!("{}{}e{}", sign, lead, exponent),
        n if n < BRIEF_DIGITS => format!("{}{}.{}e{}", sign, lead, rest, exponent),
        _ => format!("{}{}.{}...e{}", sign, lead, &rest[..BRIEF_DIGITS - 1], exponent),
    }
}

fn format_plain(digits: &BigInt, scale: i64, min_frac: usize) -> String {
    let mut magnitude = digits.magnitude().to_string();
    let (int_part, mut frac_part) = if scale <= 0 {
        if magnitude != "0" {
            magnitude.extend(std::iter::repeat_n('0', scale.unsigned_abs() as usize));
        }
        (magnitude, String::new())
    } else {
        let scale = scale as usize;
        if magnitude.len() <= scale {
            magnitude.insert_str(0, &"0".repeat(scale + 1 - magnitude.len()));
        }
        let split = magnitude.len() - scale;
        let frac = magnitude.split_off(split);
        (magnitude, frac)
    };
    while frac_part.len() < min_frac {
        frac_part.push('0');
    }

    let mut out = String::with_capacity(int_part.len() + frac_part.len() + 2);
    if digits.sign() == Sign::Minus {
        out.push('-');
    }
    out.push_str(&int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(&frac_part);
    }
    out
}
