// Relational comparison rules (dgt, dgte, dlt, dlte, deq, dneq)

use crate::{DecimalError, DecimalValue, Result};
use std::fmt;

/// Relational operator applied between a field value and a rule operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Gt,
    Gte,
    Lt,
    Lte,
    Eq,
    Neq,
}

impl CompareOp {
    pub const ALL: [CompareOp; 6] = [
        CompareOp::Gt,
        CompareOp::Gte,
        CompareOp::Lt,
        CompareOp::Lte,
        CompareOp::Eq,
        CompareOp::Neq,
    ];

    /// Rule name this operator is registered under.
    pub fn rule_name(&self) -> &'static str {
        match self {
            CompareOp::Gt => "dgt",
            CompareOp::Gte => "dgte",
            CompareOp::Lt => "dlt",
            CompareOp::Lte => "dlte",
            CompareOp::Eq => "deq",
            CompareOp::Neq => "dneq",
        }
    }

    /// Look an operator up by rule name.
    pub fn from_rule_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.rule_name() == name)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
            CompareOp::Eq => "==",
            CompareOp::Neq => "!=",
        }
    }

    /// English phrase, e.g. "greater than or equal to".
    pub fn description(&self) -> &'static str {
        match self {
            CompareOp::Gt => "greater than",
            CompareOp::Gte => "greater than or equal to",
            CompareOp::Lt => "less than",
            CompareOp::Lte => "less than or equal to",
            CompareOp::Eq => "equal to",
            CompareOp::Neq => "not equal to",
        }
    }

    /// Exact numeric comparison `lhs <op> rhs`; scale does not matter.
    pub fn apply(&self, lhs: &DecimalValue, rhs: &DecimalValue) -> bool {
        match self {
            CompareOp::Gt => lhs > rhs,
            CompareOp::Gte => lhs >= rhs,
            CompareOp::Lt => lhs < rhs,
            CompareOp::Lte => lhs <= rhs,
            CompareOp::Eq => lhs == rhs,
            CompareOp::Neq => lhs != rhs,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Compare a field string with the rule's operand text.
///
/// The value is parsed first, then the operand; whichever fails first is
/// reported. A false predicate is `ComparisonFailed`.
pub fn check_comparison(op: CompareOp, value: &str, param: &str) -> Result<()> {
    let lhs = DecimalValue::parse(value)?;
    let rhs = DecimalValue::parse(param)
        .map_err(|_| DecimalError::malformed_parameter(param, "operand is not a decimal literal"))?;

    if op.apply(&lhs, &rhs) {
        Ok(())
    } else {
        Err(DecimalError::ComparisonFailed {
            op,
            value: lhs.to_string(),
            operand: rhs.to_string(),
        })
    }
}

/// Boolean form of [`check_comparison`]; malformed input fails closed.
///
/// ```
/// use xvalidator_decimal::{validate_comparison, CompareOp};
///
/// assert!(validate_comparison(CompareOp::Gt, "150", "100"));
/// assert!(!validate_comparison(CompareOp::Gt, "abc", "100"));
/// assert!(!validate_comparison(CompareOp::Gt, "150", "abc"));
/// ```
pub fn validate_comparison(op: CompareOp, value: &str, param: &str) -> bool {
    check_comparison(op, value, param).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FailureKind;

    fn dec(s: &str) -> DecimalValue {
        DecimalValue::parse(s).unwrap()
    }

    #[test]
    fn test_operators() {
        let big = dec("100.50");
        let small = dec("50.25");
        let same = dec("100.5");

        let cases = [
            (CompareOp::Gt, &big, &small, true),
            (CompareOp::Gt, &small, &big, false),
            (CompareOp::Gte, &big, &small, true),
            (CompareOp::Gte, &big, &same, true),
            (CompareOp::Gte, &small, &big, false),
            (CompareOp::Lt, &small, &big, true),
            (CompareOp::Lt, &big, &small, false),
            (CompareOp::Lte, &small, &big, true),
            (CompareOp::Lte, &big, &same, true),
            (CompareOp::Lte, &big, &small, false),
            (CompareOp::Eq, &big, &same, true),
            (CompareOp::Eq, &big, &small, false),
            (CompareOp::Neq, &big, &small, true),
            (CompareOp::Neq, &big, &same, false),
        ];

        for (op, lhs, rhs, expected) in cases {
            assert_eq!(op.apply(lhs, rhs), expected, "{lhs} {} {rhs}", op.symbol());
        }
    }

    #[test]
    fn test_rule_names_round_trip() {
        for op in CompareOp::ALL {
            assert_eq!(CompareOp::from_rule_name(op.rule_name()), Some(op));
        }
        assert_eq!(CompareOp::from_rule_name("decimal"), None);
    }

    #[test]
    fn test_check_comparison() {
        assert!(check_comparison(CompareOp::Gt, "150.00", "100.00").is_ok());
        assert!(check_comparison(CompareOp::Eq, "100.00", "100.00").is_ok());
        assert!(check_comparison(CompareOp::Eq, "100.50", "100.5").is_ok());
        assert!(check_comparison(CompareOp::Lt, "-1000000000000000000000000000000.1", "-1e0").is_err());
        assert!(check_comparison(CompareOp::Lt, "-1000000000000000000000000000000.1", "-1").is_ok());

        assert_eq!(
            check_comparison(CompareOp::Gt, "50.00", "100.00"),
            Err(DecimalError::ComparisonFailed {
                op: CompareOp::Gt,
                value: "50.00".to_string(),
                operand: "100.00".to_string(),
            })
        );
        assert_eq!(
            check_comparison(CompareOp::Eq, "100.01", "100.00").unwrap_err().kind(),
            FailureKind::OutOfLimit
        );
    }

    #[test]
    fn test_fail_closed() {
        assert_eq!(
            check_comparison(CompareOp::Gt, "abc", "100").unwrap_err().kind(),
            FailureKind::MalformedValue
        );
        assert_eq!(
            check_comparison(CompareOp::Gt, "150", "abc").unwrap_err().kind(),
            FailureKind::MalformedParameter
        );
        // value errors win when both sides are malformed
        assert_eq!(
            check_comparison(CompareOp::Neq, "x", "y").unwrap_err().kind(),
            FailureKind::MalformedValue
        );

        for op in CompareOp::ALL {
            assert!(!validate_comparison(op, "invalid", "100.00"));
            assert!(!validate_comparison(op, "100.00", "invalid"));
        }
    }
}
