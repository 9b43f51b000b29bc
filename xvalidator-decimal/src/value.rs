// Decimal literal parsing and canonical rendering

use crate::{DecimalError, Result};
use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::{BigInt, Sign};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

// Plain ASCII only: optional minus, integer digits, optional fraction.
static DECIMAL_LITERAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap());

/// An arbitrary-precision decimal that remembers how many fractional digits
/// it was written with.
///
/// `"100.500"` and `"100.5"` compare equal but render differently, and the
/// precision/scale rules count the digits of the rendered form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecimalValue(BigDecimal);

/// Digit budget used by a value, sign excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitCounts {
    /// Integer digits after stripping leading zeros (at least 1)
    pub integer: usize,
    /// Digits after the decimal point
    pub fractional: usize,
}

impl DecimalValue {
    /// Parse a strict decimal literal such as `-123.45`.
    ///
    /// Exponents, a leading `+`, whitespace, a bare `.5` or `5.` are all
    /// rejected.
    pub fn parse(input: &str) -> Result<Self> {
        if !DECIMAL_LITERAL_REGEX.is_match(input) {
            return Err(DecimalError::malformed_value(input));
        }
        BigDecimal::from_str(input)
            .map(Self)
            .map_err(|_| DecimalError::malformed_value(input))
    }

    /// Wrap an already constructed decimal.
    pub fn from_big_decimal(value: BigDecimal) -> Self {
        Self(value)
    }

    pub fn as_big_decimal(&self) -> &BigDecimal {
        &self.0
    }

    pub fn into_inner(self) -> BigDecimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.as_bigint_and_exponent().0.sign() == Sign::Minus
    }

    /// Canonical string: sign, integer digits without leading zeros,
    /// fractional digits exactly as stored.
    ///
    /// Values wider than [`MAX_RENDERED_DIGITS`] render in exponent form
    /// instead, which [`DecimalValue::parse`] rejects.
    pub fn canonical_string(&self) -> String {
        render_canonical(&self.0)
    }

    /// Count integer and fractional digits of the canonical form.
    pub fn digit_counts(&self) -> DigitCounts {
        let (unscaled, scale) = self.0.as_bigint_and_exponent();
        let layout = Layout::of(&unscaled, scale);
        DigitCounts {
            integer: saturating_usize(layout.integer),
            fractional: saturating_usize(layout.fractional),
        }
    }
}

/// Longest plain rendering produced; no precision limit can admit more
/// digits than an `i32` holds.
pub const MAX_RENDERED_DIGITS: u64 = i32::MAX as u64;

// Digit layout of `unscaled * 10^-scale` in positional notation.
struct Layout {
    digits: String,
    integer: u64,
    fractional: u64,
}

impl Layout {
    fn of(unscaled: &BigInt, scale: i64) -> Self {
        let digits = unscaled.magnitude().to_string();
        let len = digits.len() as u64;

        let (integer, fractional) = if scale <= 0 {
            if unscaled.sign() == Sign::NoSign {
                (1, 0)
            } else {
                (len.saturating_add(scale.unsigned_abs()), 0)
            }
        } else {
            let scale = scale.unsigned_abs();
            if len <= scale {
                (1, scale)
            } else {
                (len - scale, scale)
            }
        };

        Self {
            digits,
            integer,
            fractional,
        }
    }
}

fn saturating_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Render a decimal in plain positional notation, keeping its scale.
pub(crate) fn render_canonical(value: &BigDecimal) -> String {
    let (unscaled, scale) = value.as_bigint_and_exponent();
    let layout = Layout::of(&unscaled, scale);

    if layout.integer.saturating_add(layout.fractional) > MAX_RENDERED_DIGITS {
        return format!("{}E{}", unscaled, -i128::from(scale));
    }

    let Layout {
        digits,
        integer,
        fractional,
    } = layout;
    let (integer, fractional) = (integer as usize, fractional as usize);

    let mut out = String::with_capacity(integer + fractional + 2);
    if unscaled.sign() == Sign::Minus {
        out.push('-');
    }

    if fractional == 0 {
        out.push_str(&digits);
        if unscaled.sign() != Sign::NoSign {
            out.extend(std::iter::repeat_n('0', integer - digits.len()));
        }
        return out;
    }

    if digits.len() <= fractional {
        out.push('0');
        out.push('.');
        out.extend(std::iter::repeat_n('0', fractional - digits.len()));
        out.push_str(&digits);
    } else {
        let (integer_part, fractional_part) = digits.split_at(integer);
        out.push_str(integer_part);
        out.push('.');
        out.push_str(fractional_part);
    }
    out
}

impl FromStr for DecimalValue {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<BigDecimal> for DecimalValue {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_string())
    }
}
