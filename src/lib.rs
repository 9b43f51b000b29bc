// xvalidator - struct and field validation with arbitrary-precision decimal rules
//
// The decimal constraint engine lives in `xvalidator-decimal`; tag parsing,
// the rule registry and the `Validator` facade live in `xvalidator-rules`.

pub use xvalidator_decimal as decimal;
pub use xvalidator_rules as rules;

pub use xvalidator_decimal::{
    CompareOp, ConditionOutcome, ConditionalParam, DEFAULT_PRECISION, DEFAULT_SCALE,
    DecimalError, DecimalLimit, DecimalValue, FailureKind, NoFields, check_comparison,
    check_decimal, check_decimal_if, check_precision_scale, parse_conditional_param,
    parse_decimal_params, validate_comparison, validate_decimal, validate_decimal_if,
    validate_precision_scale,
};
pub use xvalidator_rules::{
    AsFieldValue, ConfigError, FieldAccess, FieldLevel, PasswordError, PasswordPolicy, RuleCall,
    RuleFn, RuleRegistry, RuleRegistryBuilder, Schema, SchemaError, Validate, ValidationError,
    ValidationErrors, Validator, ValidatorBuilder, ValidatorConfig, check_password_strength,
    impl_field_access, parse_tag,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AsFieldValue, CompareOp, DecimalError, DecimalLimit, DecimalValue, FieldAccess,
        FieldLevel, Schema, Validate, ValidationError, ValidationErrors, Validator,
        ValidatorConfig, impl_field_access,
    };
}
