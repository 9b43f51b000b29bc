// Decimal rule failures

use crate::CompareOp;
use thiserror::Error;

/// Coarse classification of a decimal rule failure.
///
/// Every kind collapses to the same boolean verdict at the rule boundary;
/// the kind only exists for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The candidate string is not a decimal literal
    MalformedValue,
    /// The rule's static parameter does not match its grammar
    MalformedParameter,
    /// The value parsed but exceeds its limits or fails a comparison
    OutOfLimit,
    /// A conditional rule names a field the record does not have
    SiblingNotFound,
}

/// Reason a decimal rule rejected a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    #[error("'{value}' is not a decimal literal")]
    MalformedValue { value: String },

    #[error("malformed rule parameter '{param}': {reason}")]
    MalformedParameter { param: String, reason: &'static str },

    #[error("{digits} fractional digits exceed scale {scale}")]
    ScaleExceeded { digits: usize, scale: i32 },

    #[error(
        "{digits} integer digits exceed the {allowed} allowed by precision {precision} and scale {scale}"
    )]
    PrecisionExceeded {
        digits: usize,
        allowed: i64,
        precision: i32,
        scale: i32,
    },

    #[error("{value} is not {op} {operand}")]
    ComparisonFailed {
        op: CompareOp,
        value: String,
        operand: String,
    },

    #[error("field '{field}' not found")]
    SiblingNotFound { field: String },
}

impl DecimalError {
    pub(crate) fn malformed_value(value: &str) -> Self {
        Self::MalformedValue {
            value: value.to_string(),
        }
    }

    pub(crate) fn malformed_parameter(param: &str, reason: &'static str) -> Self {
        Self::MalformedParameter {
            param: param.to_string(),
            reason,
        }
    }

    /// Classify this failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            DecimalError::MalformedValue { .. } => FailureKind::MalformedValue,
            DecimalError::MalformedParameter { .. } => FailureKind::MalformedParameter,
            DecimalError::ScaleExceeded { .. }
            | DecimalError::PrecisionExceeded { .. }
            | DecimalError::ComparisonFailed { .. } => FailureKind::OutOfLimit,
            DecimalError::SiblingNotFound { .. } => FailureKind::SiblingNotFound,
        }
    }
}

pub type Result<T> = std::result::Result<T, DecimalError>;
