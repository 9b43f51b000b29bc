// Tag-driven validator

use crate::{
    FieldLevel, FieldRules, OMIT_EMPTY, RuleCall, RuleRegistry, RuleRegistryBuilder, Schema,
    SchemaError, Validate, ValidationError, ValidationErrors, ValidatorConfig, messages,
    parse_tag,
};
use std::sync::Arc;
use tracing::{debug, warn};
use xvalidator_decimal::{CompareOp, DecimalError, DecimalValue, FieldAccess, NoFields};

/// Validates records against schemas using a fixed rule registry.
///
/// Cheap to clone; the registry and configuration are shared.
///
/// ```
/// use std::collections::HashMap;
/// use xvalidator_rules::{Schema, Validator};
///
/// let validator = Validator::new();
/// let schema = Schema::new()
///     .field("Mode", "required")
///     .field("Amount", "decimal_if=10:2@Mode=credit");
///
/// let mut payment = HashMap::new();
/// payment.insert("Mode".to_string(), "credit".to_string());
/// payment.insert("Amount".to_string(), "100.500".to_string());
///
/// let errors = validator.validate(&payment, &schema).unwrap_err();
/// assert_eq!(
///     errors.to_string(),
///     "Amount must be a decimal with precision ≤ 10 and scale ≤ 2 when Mode equals 'credit'"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    registry: Arc<RuleRegistry>,
    config: Arc<ValidatorConfig>,
}

impl Validator {
    /// Validator with every built-in rule and the default configuration
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Validator with every built-in rule
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Start a builder preloaded with the built-in rules
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate every field named by `schema` on `record`.
    ///
    /// Fields are checked in schema order; every failure is collected.
    pub fn validate(
        &self,
        record: &dyn FieldAccess,
        schema: &Schema,
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for field in schema.fields() {
            match record.field_value(&field.field) {
                Some(value) => {
                    self.validate_field(&field.field, &value, &field.rules, record, &mut errors)
                }
                None => {
                    warn!(field = %field.field, "schema names a field the record does not have");
                    errors.add(
                        ValidationError::new(&field.field, messages::missing_field(&field.field))
                            .with_constraint("missing_field"),
                    );
                }
            }
        }

        if !errors.is_empty() {
            debug!(
                fields = schema.len(),
                errors = errors.len(),
                "record failed validation"
            );
        }
        errors.into_result()
    }

    /// Validate a value that carries its own schema
    pub fn validate_struct<T: Validate>(&self, value: &T) -> Result<(), ValidationErrors> {
        self.validate(value, value.schema())
    }

    /// Validate a single value against a tag.
    ///
    /// The value has no siblings, so `decimal_if` always fails. Errors carry
    /// an empty field name.
    pub fn var(&self, value: &str, tag: &str) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        self.validate_field("", value, &parse_tag(tag), &NoFields, &mut errors);
        errors.into_result()
    }

    /// Find schema mistakes without validating any data: unregistered rule
    /// names, malformed `decimal_if` parameters and comparison operands that
    /// are not decimal literals.
    pub fn check_schema(&self, schema: &Schema) -> Result<(), SchemaError> {
        schema
            .fields()
            .iter()
            .try_for_each(|field| self.check_field(field))
    }

    fn check_field(&self, field: &FieldRules) -> Result<(), SchemaError> {
        for rule in &field.rules {
            if rule.name == OMIT_EMPTY {
                continue;
            }
            if !self.registry.contains(&rule.name) {
                return Err(SchemaError::UnknownRule {
                    field: field.field.clone(),
                    rule: rule.name.clone(),
                });
            }
            check_rule_param(rule).map_err(|source| SchemaError::InvalidParameter {
                field: field.field.clone(),
                rule: rule.name.clone(),
                source,
            })?;
        }
        Ok(())
    }

    fn validate_field(
        &self,
        field: &str,
        value: &str,
        rules: &[RuleCall],
        parent: &dyn FieldAccess,
        errors: &mut ValidationErrors,
    ) {
        for rule in rules {
            if rule.name == OMIT_EMPTY {
                if value.is_empty() {
                    break;
                }
                continue;
            }

            let fl = FieldLevel {
                field,
                value,
                param: &rule.param,
                parent,
                config: &self.config,
            };

            let error = match self.registry.get(&rule.name) {
                Some(handler) if handler(&fl) => continue,
                Some(_) => ValidationError::new(field, messages::render(&rule.name, &fl)),
                None => {
                    warn!(field, rule = %rule.name, "unknown validation rule");
                    ValidationError::new(field, messages::unknown_rule(field, &rule.name))
                }
            };

            let error = error
                .with_constraint(&rule.name)
                .with_param(&rule.param);
            // password values stay out of error reports
            let error = if rule.name == "password_strength" {
                error
            } else {
                error.with_value(value)
            };
            errors.add(error);

            if self.config.fail_fast {
                break;
            }
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

fn check_rule_param(rule: &RuleCall) -> Result<(), DecimalError> {
    if rule.name == "decimal_if" {
        xvalidator_decimal::parse_conditional_param(&rule.param)?;
    } else if CompareOp::from_rule_name(&rule.name).is_some()
        && DecimalValue::parse(&rule.param).is_err()
    {
        return Err(DecimalError::MalformedParameter {
            param: rule.param.clone(),
            reason: "operand is not a decimal literal",
        });
    }
    Ok(())
}

/// Builder for [`Validator`]
pub struct ValidatorBuilder {
    config: ValidatorConfig,
    rules: RuleRegistryBuilder,
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        Self {
            config: ValidatorConfig::default(),
            rules: RuleRegistryBuilder::new().with_builtin_rules(),
        }
    }

    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a custom rule, replacing a built-in one of the same name
    pub fn register<F>(mut self, name: impl Into<String>, rule: F) -> Self
    where
        F: Fn(&FieldLevel<'_>) -> bool + Send + Sync + 'static,
    {
        self.rules = self.rules.register(name, rule);
        self
    }

    pub fn build(self) -> Validator {
        Validator {
            registry: Arc::new(self.rules.build()),
            config: Arc::new(self.config),
        }
    }
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_var() {
        let validator = Validator::new();

        assert!(validator.var("123.45", "decimal=10:2").is_ok());
        assert!(validator.var("https://example.com", "https_url").is_ok());

        let errors = validator.var("invalid", "decimal=10:2").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors[0].field, "");
        assert_eq!(
            errors.to_string(),
            " must be a decimal with precision ≤ 10 and scale ≤ 2"
        );
    }

    #[test]
    fn test_var_decimal_if_fails_closed() {
        let errors = Validator::new()
            .var("1.00", "decimal_if=2@Mode=credit")
            .unwrap_err();
        assert_eq!(errors.errors[0].constraint, "decimal_if");
    }

    #[test]
    fn test_omitempty() {
        let validator = Validator::new();
        let schema = Schema::new().field("website", "omitempty,https_url");

        assert!(validator.validate(&record(&[("website", "")]), &schema).is_ok());
        assert!(
            validator
                .validate(&record(&[("website", "http://x.com")]), &schema)
                .is_err()
        );
    }

    #[test]
    fn test_fail_fast_stops_at_first_failure() {
        let schema = Schema::new().field("amount", "required,decimal=2,dgt=0");
        let data = record(&[("amount", "")]);

        let errors = Validator::new().validate(&data, &schema).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors[0].constraint, "required");

        let config = ValidatorConfig {
            fail_fast: false,
            ..ValidatorConfig::default()
        };
        let errors = Validator::with_config(config)
            .validate(&data, &schema)
            .unwrap_err();
        let constraints: Vec<&str> = errors.errors.iter().map(|e| e.constraint.as_str()).collect();
        assert_eq!(constraints, vec!["required", "decimal", "dgt"]);
    }

    #[test]
    fn test_errors_follow_schema_order() {
        let schema = Schema::new()
            .field("b", "https_url")
            .field("a", "required");
        let errors = Validator::new()
            .validate(&record(&[("a", ""), ("b", "nope")]), &schema)
            .unwrap_err();

        let fields: Vec<&str> = errors.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["b", "a"]);
    }

    #[test]
    fn test_missing_field() {
        let schema = Schema::new().field("amount", "decimal");
        let errors = Validator::new()
            .validate(&record(&[]), &schema)
            .unwrap_err();

        assert_eq!(errors.errors[0].constraint, "missing_field");
        assert_eq!(errors.errors[0].message, "amount is not present on the record");
    }

    #[test]
    fn test_unknown_rule_fails_closed() {
        let schema = Schema::new().field("code", "iso4217");
        let errors = Validator::new()
            .validate(&record(&[("code", "THB")]), &schema)
            .unwrap_err();

        assert_eq!(errors.errors[0].constraint, "iso4217");
        assert_eq!(
            errors.errors[0].message,
            "code uses unknown validation rule 'iso4217'"
        );
    }

    #[test]
    fn test_password_value_not_reported() {
        let schema = Schema::new().field("password", "password_strength");
        let errors = Validator::new()
            .validate(&record(&[("password", "weak")]), &schema)
            .unwrap_err();

        assert!(errors.errors[0].value.is_none());
    }

    #[test]
    fn test_custom_rule() {
        let validator = Validator::builder()
            .register("is_even", |fl| {
                fl.value.parse::<i64>().map(|n| n % 2 == 0).unwrap_or(false)
            })
            .build();

        assert!(validator.var("4", "required,is_even").is_ok());
        let errors = validator.var("5", "is_even").unwrap_err();
        assert_eq!(
            errors.to_string(),
            "Field validation for '' failed on the 'is_even' rule"
        );
        // built-in rules are still present
        assert!(validator.var("1.5", "decimal=1").is_ok());
    }

    #[test]
    fn test_check_schema() {
        let validator = Validator::new();

        let good = Schema::new()
            .field("Mode", "required")
            .field("Amount", "omitempty,decimal_if=10:2@Mode=credit,dgte=0");
        assert!(validator.check_schema(&good).is_ok());

        let unknown = Schema::new().field("Amount", "decimal,money");
        assert_eq!(
            validator.check_schema(&unknown),
            Err(SchemaError::UnknownRule {
                field: "Amount".to_string(),
                rule: "money".to_string(),
            })
        );

        let malformed = Schema::new().field("Amount", "decimal_if=2Mode=credit");
        assert!(matches!(
            validator.check_schema(&malformed),
            Err(SchemaError::InvalidParameter { ref rule, .. }) if rule == "decimal_if"
        ));

        let bad_operand = Schema::new().field("Amount", "dgt=abc");
        assert!(matches!(
            validator.check_schema(&bad_operand),
            Err(SchemaError::InvalidParameter { ref rule, .. }) if rule == "dgt"
        ));
    }
}
