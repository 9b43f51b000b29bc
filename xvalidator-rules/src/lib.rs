//! Tag-driven record validation for xvalidator
//!
//! Records expose their fields through [`FieldAccess`]; a [`Schema`] maps
//! field names to comma separated rule tags; a [`Validator`] runs the rules
//! from its [`RuleRegistry`] and collects English messages for every
//! failure.
//!
//! Built-in rules:
//!
//! | Rule | Parameter |
//! |------|-----------|
//! | `required` | none |
//! | `omitempty` | none; skips the field's remaining rules when it is empty |
//! | `decimal` | `""`, `"<scale>"` or `"<precision>:<scale>"` |
//! | `dgt` `dgte` `dlt` `dlte` `deq` `dneq` | decimal operand |
//! | `decimal_if` | `"<decimal param>@<field>=<value>"` |
//! | `https_url` | none |
//! | `mobile_e164` | optional ISO region, e.g. `TH` (feature `phone`) |
//! | `password_strength` | none; policy from [`ValidatorConfig`] |
//!
//! # Examples
//!
//! ## Validating a record
//!
//! ```
//! use serde_json::json;
//! use xvalidator_rules::{Schema, Validator};
//!
//! let schema = Schema::new()
//!     .field("price", "required,decimal=10:2,dgt=0")
//!     .field("website", "omitempty,https_url");
//!
//! let validator = Validator::new();
//!
//! let good = json!({ "price": "19.99", "website": "" });
//! assert!(validator.validate(&good, &schema).is_ok());
//!
//! let bad = json!({ "price": "0", "website": "http://example.com" });
//! let errors = validator.validate(&bad, &schema).unwrap_err();
//! assert_eq!(
//!     errors.to_string(),
//!     "price must be greater than 0; website must be a valid HTTPS URL"
//! );
//! ```
//!
//! ## Single values
//!
//! ```
//! use xvalidator_rules::Validator;
//!
//! let validator = Validator::new();
//! assert!(validator.var("100.50", "deq=100.5").is_ok());
//! assert!(validator.var("Weak", "password_strength").is_err());
//! ```
//!
//! ## Custom rules
//!
//! ```
//! use xvalidator_rules::Validator;
//!
//! let validator = Validator::builder()
//!     .register("currency", |fl| matches!(fl.value, "THB" | "USD" | "EUR"))
//!     .build();
//!
//! assert!(validator.var("THB", "required,currency").is_ok());
//! assert!(validator.var("XXX", "currency").is_err());
//! ```

mod config;
mod errors;
pub mod messages;
mod password;
mod registry;
mod rules;
mod traits;
mod validator;
mod validators;

pub use config::*;
pub use errors::*;
pub use password::*;
pub use registry::*;
pub use rules::*;
pub use traits::*;
pub use validator::*;
pub use validators::*;

pub use xvalidator_decimal::{AsFieldValue, FieldAccess, NoFields, impl_field_access};
