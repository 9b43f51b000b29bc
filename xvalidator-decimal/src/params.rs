// Rule parameter parsing
//
// Parameters are static rule configuration text. `decimal` parameters never
// fail to parse (unparsable halves keep their defaults); `decimal_if`
// parameters have a strict shape and report `MalformedParameter`.

use crate::{DecimalError, Result};

/// Default maximum number of significant digits.
pub const DEFAULT_PRECISION: i32 = 38;

/// Default maximum number of fractional digits.
pub const DEFAULT_SCALE: i32 = 18;

/// Maximum precision and scale a decimal may use.
///
/// `precision` reserves `scale` slots for the fraction; the rest is the
/// integer digit budget. A negative scale, or `scale > precision`, is
/// allowed and admits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalLimit {
    pub precision: i32,
    pub scale: i32,
}

impl DecimalLimit {
    /// `(38, 18)`, mirroring common fixed-point database columns.
    pub const DEFAULT: DecimalLimit = DecimalLimit::new(DEFAULT_PRECISION, DEFAULT_SCALE);

    pub const fn new(precision: i32, scale: i32) -> Self {
        Self { precision, scale }
    }

    /// Parse a `decimal` rule parameter; see [`parse_decimal_params`].
    pub fn parse(param: &str) -> Self {
        parse_decimal_params(param)
    }

    /// Whether the limit only admits integers.
    pub fn is_integer_only(&self) -> bool {
        self.scale == 0
    }

    /// Integer digits left after reserving `scale` fractional slots.
    /// Negative when `scale > precision` or `precision` is negative.
    pub fn max_integer_digits(&self) -> i64 {
        i64::from(self.precision) - i64::from(self.scale)
    }
}

impl Default for DecimalLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parse a `decimal` rule parameter into a precision/scale limit.
///
/// - `""` gives the defaults
/// - `"<scale>"` sets the scale only
/// - `"<precision>:<scale>"` sets both, each half independently
///
/// Each half is a signed base-10 integer. A half that does not parse, or
/// does not fit in an `i32`, keeps its default; a parameter with more than
/// one `:` keeps both defaults. Negative halves are kept as written, which
/// leaves a limit that rejects every value.
///
/// ```
/// use xvalidator_decimal::{parse_decimal_params, DecimalLimit};
///
/// assert_eq!(parse_decimal_params("10:6"), DecimalLimit::new(10, 6));
/// assert_eq!(parse_decimal_params("10:abc"), DecimalLimit::new(10, 18));
/// assert_eq!(parse_decimal_params("2"), DecimalLimit::new(38, 2));
/// assert_eq!(parse_decimal_params("-1"), DecimalLimit::new(38, -1));
/// ```
pub fn parse_decimal_params(param: &str) -> DecimalLimit {
    let mut limit = DecimalLimit::DEFAULT;

    if param.is_empty() {
        return limit;
    }

    if param.contains(':') {
        let parts: Vec<&str> = param.split(':').collect();
        if let [precision, scale] = parts.as_slice() {
            if let Ok(precision) = precision.parse::<i32>() {
                limit.precision = precision;
            }
            if let Ok(scale) = scale.parse::<i32>() {
                limit.scale = scale;
            }
        }
    } else if let Ok(scale) = param.parse::<i32>() {
        limit.scale = scale;
    }

    limit
}

/// Parsed `decimal_if` parameter: `<rule>@<field>=<expected>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConditionalParam {
    /// Inner `decimal` parameter, empty for the defaults
    pub rule: String,
    /// Sibling field to inspect
    pub field: String,
    /// Value the sibling must hold for the rule to apply
    pub expected: String,
}

impl ConditionalParam {
    /// Parse a `decimal_if` parameter; see [`parse_conditional_param`].
    pub fn parse(param: &str) -> Result<Self> {
        parse_conditional_param(param)
    }

    /// Precision/scale limit of the inner rule.
    pub fn limit(&self) -> DecimalLimit {
        parse_decimal_params(&self.rule)
    }
}

/// Parse a `decimal_if` parameter.
///
/// Exactly one `@` is required, and exactly one `=` after it. The rule, the
/// field name and the expected value may each be empty.
///
/// ```
/// use xvalidator_decimal::parse_conditional_param;
///
/// let param = parse_conditional_param("2@Mode=mode1").unwrap();
/// assert_eq!(
///     (param.rule.as_str(), param.field.as_str(), param.expected.as_str()),
///     ("2", "Mode", "mode1")
/// );
/// assert!(parse_conditional_param("2Mode=mode1").is_err());
/// ```
pub fn parse_conditional_param(param: &str) -> Result<ConditionalParam> {
    let parts: Vec<&str> = param.split('@').collect();
    let [rule, condition] = parts.as_slice() else {
        return Err(DecimalError::malformed_parameter(
            param,
            "expected exactly one '@'",
        ));
    };

    let condition_parts: Vec<&str> = condition.split('=').collect();
    let [field, expected] = condition_parts.as_slice() else {
        return Err(DecimalError::malformed_parameter(
            param,
            "expected exactly one '=' after '@'",
        ));
    };

    Ok(ConditionalParam {
        rule: (*rule).to_string(),
        field: (*field).to_string(),
        expected: (*expected).to_string(),
    })
}
