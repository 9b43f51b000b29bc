// Validation errors

use std::fmt;
use thiserror::Error;
use xvalidator_decimal::DecimalError;

/// Validation error for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field name that failed validation
    pub field: String,

    /// Error message
    pub message: String,

    /// Rule that failed
    pub constraint: String,

    /// Rule parameter as written in the tag
    pub param: String,

    /// Value that failed validation (optional)
    pub value: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint: "custom".to_string(),
            param: String::new(),
            value: None,
        }
    }

    /// Set the constraint name
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }

    /// Set the rule parameter
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }

    /// Set the invalid value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors, in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a new validation errors collection
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Add an error
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Get errors for a specific field
    pub fn get_field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Check whether a field failed
    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Messages of all errors
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "field": e.field,
                    "message": e.message,
                    "constraint": e.constraint,
                    "param": e.param,
                    "value": e.value,
                })
            }).collect::<Vec<_>>()
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::new(vec![error])
    }
}

/// Authoring mistakes found in a schema before any data is validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("field '{field}' uses unregistered rule '{rule}'")]
    UnknownRule { field: String, rule: String },

    #[error("field '{field}' has an invalid '{rule}' parameter: {source}")]
    InvalidParameter {
        field: String,
        rule: String,
        #[source]
        source: DecimalError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_builder() {
        let error = ValidationError::new("amount", "amount must be greater than 0")
            .with_constraint("dgt")
            .with_param("0")
            .with_value("-1");

        assert_eq!(error.field, "amount");
        assert_eq!(error.constraint, "dgt");
        assert_eq!(error.param, "0");
        assert_eq!(error.value.as_deref(), Some("-1"));
        assert_eq!(error.to_string(), "amount must be greater than 0");
    }

    #[test]
    fn test_errors_display_joins_messages() {
        let errors = ValidationErrors::new(vec![
            ValidationError::new("a", "a is a required field"),
            ValidationError::new("b", "b must be a valid HTTPS URL"),
        ]);

        assert_eq!(
            errors.to_string(),
            "a is a required field; b must be a valid HTTPS URL"
        );
        assert!(errors.has_field_error("b"));
        assert_eq!(errors.get_field_errors("a").len(), 1);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::default().into_result().is_ok());

        let errors: ValidationErrors = ValidationError::new("a", "bad").into();
        assert_eq!(errors.clone().into_result(), Err(errors));
    }

    #[test]
    fn test_to_json() {
        let errors: ValidationErrors = ValidationError::new("rate", "rate is bad")
            .with_constraint("decimal")
            .with_param("10:6")
            .into();

        let json = errors.to_json();
        assert_eq!(json["errors"][0]["field"], "rate");
        assert_eq!(json["errors"][0]["constraint"], "decimal");
        assert_eq!(json["errors"][0]["param"], "10:6");
        assert!(json["errors"][0]["value"].is_null());
    }
}
