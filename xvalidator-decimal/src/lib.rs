//! Decimal constraint engine for xvalidator
//!
//! Checks numeric strings against precision/scale limits and relational
//! bounds using arbitrary-precision decimals, and gates a precision/scale
//! check on the value of a sibling field.
//!
//! Every rule has a `check_*` form returning the precise [`DecimalError`]
//! and a `validate_*` form that collapses all failures to `false`.
//!
//! # Examples
//!
//! ## Precision and scale
//!
//! ```
//! use xvalidator_decimal::{validate_decimal, parse_decimal_params, DecimalLimit};
//!
//! // at most 8 integer digits and 2 fractional digits
//! assert!(validate_decimal("12345678.12", "10:2"));
//! assert!(!validate_decimal("123456789", "10:2"));
//!
//! // scale only, precision defaults to 38
//! assert_eq!(parse_decimal_params("2"), DecimalLimit::new(38, 2));
//! assert!(!validate_decimal("123.456", "2"));
//! ```
//!
//! ## Comparisons
//!
//! ```
//! use xvalidator_decimal::{validate_comparison, CompareOp};
//!
//! assert!(validate_comparison(CompareOp::Eq, "100.50", "100.5"));
//! assert!(validate_comparison(CompareOp::Lte, "-3", "0"));
//! ```
//!
//! ## Conditional rules
//!
//! ```
//! use serde_json::json;
//! use xvalidator_decimal::validate_decimal_if;
//!
//! let payment = json!({ "type": "debit", "amount": "not-a-number" });
//!
//! // the condition is unmet, so the amount is not inspected
//! assert!(validate_decimal_if("not-a-number", "2@type=credit", &payment));
//! ```

mod access;
mod compare;
mod conditional;
mod error;
mod params;
mod precision;
mod value;

pub use access::*;
pub use compare::*;
pub use conditional::*;
pub use error::*;
pub use params::*;
pub use precision::*;
pub use value::*;
