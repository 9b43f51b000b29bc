// Validation traits

use crate::{Schema, ValidatorConfig};
use std::sync::Arc;
use xvalidator_decimal::FieldAccess;

/// Everything a rule handler can see about the field under validation.
pub struct FieldLevel<'a> {
    /// Field name as written in the schema; empty for [`Validator::var`](crate::Validator::var)
    pub field: &'a str,
    /// Current value of the field
    pub value: &'a str,
    /// Rule parameter, the text after `=` in the tag
    pub param: &'a str,
    /// The record the field belongs to, for sibling lookups
    pub parent: &'a dyn FieldAccess,
    pub config: &'a ValidatorConfig,
}

/// A registered rule. Returns `true` when the value passes.
pub type RuleFn = Arc<dyn Fn(&FieldLevel<'_>) -> bool + Send + Sync>;

/// Types that carry their own validation schema.
///
/// ```
/// use once_cell::sync::Lazy;
/// use xvalidator_decimal::impl_field_access;
/// use xvalidator_rules::{Schema, Validate, Validator};
///
/// struct Order {
///     total: String,
///     callback: String,
/// }
///
/// impl_field_access!(Order { total, callback });
///
/// static ORDER_SCHEMA: Lazy<Schema> = Lazy::new(|| {
///     Schema::new()
///         .field("total", "required,decimal=10:2,dgt=0")
///         .field("callback", "omitempty,https_url")
/// });
///
/// impl Validate for Order {
///     fn schema(&self) -> &Schema {
///         &ORDER_SCHEMA
///     }
/// }
///
/// let order = Order { total: "99.90".into(), callback: String::new() };
/// assert!(Validator::new().validate_struct(&order).is_ok());
/// ```
pub trait Validate: FieldAccess {
    /// Rules applied to this value's fields
    fn schema(&self) -> &Schema;
}
