// English failure messages

use crate::{FieldLevel, PasswordPolicy};
use xvalidator_decimal::{
    CompareOp, DEFAULT_PRECISION, DEFAULT_SCALE, FieldAccess, parse_conditional_param,
    parse_decimal_params,
};

/// Message for a failed rule, picked by rule name.
///
/// Unrecognised names (custom rules) get a generic message.
pub fn render(rule: &str, fl: &FieldLevel<'_>) -> String {
    match rule {
        "required" => required(fl.field),
        "decimal" => decimal(fl.field, fl.param),
        "decimal_if" => decimal_if(fl.field, fl.param, fl.parent),
        "https_url" => https_url(fl.field),
        "mobile_e164" => mobile_e164(fl.field),
        "password_strength" => password_strength(fl.field, &fl.config.password),
        _ => match CompareOp::from_rule_name(rule) {
            Some(op) => comparison(fl.field, op, fl.param),
            None => custom(fl.field, rule),
        },
    }
}

pub fn required(field: &str) -> String {
    format!("{} is a required field", field)
}

pub fn decimal(field: &str, param: &str) -> String {
    if param.is_empty() {
        return format!(
            "{} must be a decimal with precision ≤ {} and scale ≤ {}",
            field, DEFAULT_PRECISION, DEFAULT_SCALE
        );
    }

    let limit = parse_decimal_params(param);
    if limit.is_integer_only() {
        format!("{} must be an integer format (no decimal places)", field)
    } else {
        format!(
            "{} must be a decimal with precision ≤ {} and scale ≤ {}",
            field, limit.precision, limit.scale
        )
    }
}

pub fn decimal_if(field: &str, param: &str, parent: &dyn FieldAccess) -> String {
    let Ok(condition) = parse_conditional_param(param) else {
        return format!("{} conditional decimal validation failed", field);
    };

    if parent.field_value(&condition.field).is_none() {
        return format!(
            "{} conditional decimal validation failed: field '{}' not found",
            field, condition.field
        );
    }

    let limit = condition.limit();
    if limit.is_integer_only() {
        format!(
            "{} must be an integer format (no decimal places) when {} equals '{}'",
            field, condition.field, condition.expected
        )
    } else if condition.rule.is_empty() {
        format!(
            "{} must be a decimal with default precision and scale when {} equals '{}'",
            field, condition.field, condition.expected
        )
    } else {
        format!(
            "{} must be a decimal with precision ≤ {} and scale ≤ {} when {} equals '{}'",
            field, limit.precision, limit.scale, condition.field, condition.expected
        )
    }
}

pub fn comparison(field: &str, op: CompareOp, param: &str) -> String {
    let message = match op {
        CompareOp::Neq => format!("{} must not be equal to {}", field, param),
        _ => format!("{} must be {} {}", field, op.description(), param),
    };
    message.trim_end().to_string()
}

pub fn https_url(field: &str) -> String {
    format!("{} must be a valid HTTPS URL", field)
}

pub fn mobile_e164(field: &str) -> String {
    format!(
        "{} must be a valid mobile number in E.164 format (e.g., +66812345678)",
        field
    )
}

pub fn password_strength(field: &str, policy: &PasswordPolicy) -> String {
    format!(
        "{} must contain at least {} characters with: uppercase letter (A-Z), lowercase letter (a-z), digit (0-9), and special character ({})",
        field, policy.min_length, policy.special_chars
    )
}

pub fn unknown_rule(field: &str, rule: &str) -> String {
    format!("{} uses unknown validation rule '{}'", field, rule)
}

pub fn missing_field(field: &str) -> String {
    format!("{} is not present on the record", field)
}

pub fn custom(field: &str, rule: &str) -> String {
    format!("Field validation for '{}' failed on the '{}' rule", field, rule)
}
