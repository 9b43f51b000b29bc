// Precision/scale validation

use crate::{DecimalError, DecimalLimit, DecimalValue, Result, parse_decimal_params};

/// Check a parsed value against a precision/scale limit.
///
/// The fraction may use at most `scale` digits and the integer part (leading
/// zeros stripped, sign ignored) at most `precision - scale` digits,
/// regardless of how many fractional digits the value actually uses.
///
/// Every value uses at least one integer digit, so a negative scale or a
/// negative `precision - scale` rejects everything.
pub fn check_precision_scale(value: &DecimalValue, limit: DecimalLimit) -> Result<()> {
    let counts = value.digit_counts();

    if width(counts.fractional) > i64::from(limit.scale) {
        return Err(DecimalError::ScaleExceeded {
            digits: counts.fractional,
            scale: limit.scale,
        });
    }

    let allowed = limit.max_integer_digits();
    if width(counts.integer) > allowed {
        return Err(DecimalError::PrecisionExceeded {
            digits: counts.integer,
            allowed,
            precision: limit.precision,
            scale: limit.scale,
        });
    }

    Ok(())
}

fn width(digits: usize) -> i64 {
    i64::try_from(digits).unwrap_or(i64::MAX)
}

/// Boolean form of [`check_precision_scale`].
pub fn validate_precision_scale(value: &DecimalValue, limit: DecimalLimit) -> bool {
    check_precision_scale(value, limit).is_ok()
}

/// The `decimal` rule: parse `value` and check it against the limit
/// described by `param` (`""`, `"<scale>"` or `"<precision>:<scale>"`).
///
/// ```
/// use xvalidator_decimal::check_decimal;
///
/// assert!(check_decimal("12345678.12", "10:2").is_ok());
/// assert!(check_decimal("123456789", "10:2").is_err());
/// assert!(check_decimal("123.456", "2").is_err());
/// ```
pub fn check_decimal(value: &str, param: &str) -> Result<()> {
    let parsed = DecimalValue::parse(value)?;
    check_precision_scale(&parsed, parse_decimal_params(param))
}

/// Boolean form of [`check_decimal`]; every failure is `false`.
pub fn validate_decimal(value: &str, param: &str) -> bool {
    check_decimal(value, param).is_ok()
}
