// Field access capability and value adapters

use crate::DecimalValue;
use crate::value::render_canonical;
use bigdecimal::BigDecimal;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Read access to the named fields of a record.
///
/// This is all the conditional rule needs from the record being validated:
/// the current string value of a sibling, or `None` when the record has no
/// field of that name (or it cannot be read as a string).
pub trait FieldAccess {
    fn field_value(&self, name: &str) -> Option<String>;
}

impl<T: FieldAccess + ?Sized> FieldAccess for &T {
    fn field_value(&self, name: &str) -> Option<String> {
        (**self).field_value(name)
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for Box<T> {
    fn field_value(&self, name: &str) -> Option<String> {
        (**self).field_value(name)
    }
}

impl FieldAccess for HashMap<String, String> {
    fn field_value(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FieldAccess for BTreeMap<String, String> {
    fn field_value(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FieldAccess for Map<String, Value> {
    fn field_value(&self, name: &str) -> Option<String> {
        self.get(name).and_then(json_field_value)
    }
}

/// Only JSON objects have fields.
impl FieldAccess for Value {
    fn field_value(&self, name: &str) -> Option<String> {
        self.as_object().and_then(|map| map.field_value(name))
    }
}

fn json_field_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// A record with no fields, used when validating a lone value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFields;

impl FieldAccess for NoFields {
    fn field_value(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Conversion of a field's value to the string the rules inspect.
///
/// Structured decimals render to their canonical string with the scale
/// preserved, so `decimal=2` rejects a `BigDecimal` holding `1.500`.
pub trait AsFieldValue {
    fn as_field_value(&self) -> String;
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> String {
        self.clone()
    }
}

impl AsFieldValue for str {
    fn as_field_value(&self) -> String {
        self.to_string()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    fn as_field_value(&self) -> String {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue> AsFieldValue for Option<T> {
    fn as_field_value(&self) -> String {
        self.as_ref()
            .map(|value| value.as_field_value())
            .unwrap_or_default()
    }
}

impl AsFieldValue for BigDecimal {
    fn as_field_value(&self) -> String {
        render_canonical(self)
    }
}

impl AsFieldValue for DecimalValue {
    fn as_field_value(&self) -> String {
        self.canonical_string()
    }
}

impl AsFieldValue for rust_decimal::Decimal {
    fn as_field_value(&self) -> String {
        // Display keeps the scale: 1.50 renders as "1.50"
        self.to_string()
    }
}

macro_rules! display_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_field_value!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Implement [`FieldAccess`] for a struct by listing the fields that can be
/// read by name. Each listed field must implement [`AsFieldValue`].
///
/// ```
/// use xvalidator_decimal::{impl_field_access, FieldAccess};
///
/// struct Payment {
///     mode: String,
///     amount: String,
/// }
///
/// impl_field_access!(Payment { mode, amount });
///
/// let payment = Payment { mode: "credit".into(), amount: "10.00".into() };
/// assert_eq!(payment.field_value("mode").as_deref(), Some("credit"));
/// assert_eq!(payment.field_value("missing"), None);
/// ```
#[macro_export]
macro_rules! impl_field_access {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::FieldAccess for $ty {
            fn field_value(&self, name: &str) -> ::std::option::Option<::std::string::String> {
                match name {
                    $(
                        stringify!($field) => ::std::option::Option::Some(
                            $crate::AsFieldValue::as_field_value(&self.$field),
                        ),
                    )*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };
}
