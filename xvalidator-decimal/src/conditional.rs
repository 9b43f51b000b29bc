// Conditional decimal validation (decimal_if)

use crate::{
    ConditionalParam, DecimalError, DecimalValue, FieldAccess, Result, check_precision_scale,
};
use tracing::{trace, warn};

/// What the conditional rule did with the target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOutcome {
    /// The sibling held the expected value and the target passed
    Applied,
    /// The sibling held another value; the target was not inspected
    Skipped,
}

/// The `decimal_if` rule.
///
/// `param` has the form `<rule>@<field>=<expected>`. When `parent`'s field
/// `<field>` currently equals `<expected>`, `value` must satisfy the
/// `decimal` rule `<rule>`; otherwise the rule passes without looking at
/// `value`. A sibling that does not exist fails the rule.
///
/// ```
/// use std::collections::HashMap;
/// use xvalidator_decimal::{check_decimal_if, ConditionOutcome};
///
/// let mut record = HashMap::new();
/// record.insert("Type".to_string(), "debit".to_string());
///
/// assert_eq!(
///     check_decimal_if("not-a-number", "2@Type=credit", &record),
///     Ok(ConditionOutcome::Skipped)
/// );
///
/// record.insert("Type".to_string(), "credit".to_string());
/// assert!(check_decimal_if("100.500", "2@Type=credit", &record).is_err());
/// ```
pub fn check_decimal_if(
    value: &str,
    param: &str,
    parent: &dyn FieldAccess,
) -> Result<ConditionOutcome> {
    let condition = ConditionalParam::parse(param).inspect_err(|err| {
        warn!(param, error = %err, "decimal_if parameter is malformed");
    })?;

    let Some(current) = parent.field_value(&condition.field) else {
        warn!(
            field = %condition.field,
            "decimal_if refers to a field the record does not have"
        );
        return Err(DecimalError::SiblingNotFound {
            field: condition.field,
        });
    };

    if current != condition.expected {
        trace!(
            field = %condition.field,
            expected = %condition.expected,
            "decimal_if condition not met, skipping"
        );
        return Ok(ConditionOutcome::Skipped);
    }

    let parsed = DecimalValue::parse(value)?;
    check_precision_scale(&parsed, condition.limit())?;
    Ok(ConditionOutcome::Applied)
}

/// Boolean form of [`check_decimal_if`]; a skipped check passes.
pub fn validate_decimal_if(value: &str, param: &str, parent: &dyn FieldAccess) -> bool {
    check_decimal_if(value, param, parent).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FailureKind, NoFields};
    use std::collections::HashMap;

    fn record(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_condition_not_met_skips() {
        let parent = record(&[("Type", "debit")]);
        assert_eq!(
            check_decimal_if("not-a-number", "2@Type=credit", &parent),
            Ok(ConditionOutcome::Skipped)
        );
        assert!(validate_decimal_if("123.456789", "2@Type=credit", &parent));
    }

    #[test]
    fn test_condition_met_applies() {
        let parent = record(&[("Type", "credit")]);
        assert_eq!(
            check_decimal_if("100.50", "2@Type=credit", &parent),
            Ok(ConditionOutcome::Applied)
        );
        assert_eq!(
            check_decimal_if("100.500", "2@Type=credit", &parent),
            Err(DecimalError::ScaleExceeded { digits: 3, scale: 2 })
        );
        assert_eq!(
            check_decimal_if("not-a-number", "2@Type=credit", &parent)
                .unwrap_err()
                .kind(),
            FailureKind::MalformedValue
        );
    }

    #[test]
    fn test_inner_rule_forms() {
        let parent = record(&[
            ("Mode", "default"),
            ("Type", "integer"),
            ("Status", "active"),
        ]);

        assert!(validate_decimal_if("123.456789012345", "@Mode=default", &parent));
        assert!(validate_decimal_if("12345", "0@Type=integer", &parent));
        assert!(!validate_decimal_if("123.45", "0@Type=integer", &parent));
        assert!(validate_decimal_if("1234.567890", "10:6@Status=active", &parent));
        assert!(!validate_decimal_if("12345678901.567890", "10:6@Status=active", &parent));
    }

    #[test]
    fn test_sibling_not_found_fails_closed() {
        let parent = record(&[("Type", "credit")]);
        assert_eq!(
            check_decimal_if("1.00", "2@Kind=credit", &parent),
            Err(DecimalError::SiblingNotFound {
                field: "Kind".to_string()
            })
        );
        assert!(!validate_decimal_if("1.00", "2@Type=credit", &NoFields));
    }

    #[test]
    fn test_malformed_parameter_fails() {
        let parent = record(&[("Mode", "mode1")]);
        let err = check_decimal_if("1.00", "2Mode=mode1", &parent).unwrap_err();
        assert_eq!(err.kind(), FailureKind::MalformedParameter);
        assert!(!validate_decimal_if("1.00", "2@Mode=mode=1", &parent));
    }

    #[test]
    fn test_empty_expected_value_matches_empty_sibling() {
        let parent = record(&[("Mode", "")]);
        assert!(!validate_decimal_if("abc", "2@Mode=", &parent));

        let parent = record(&[("Mode", "set")]);
        assert!(validate_decimal_if("abc", "2@Mode=", &parent));
    }
}
