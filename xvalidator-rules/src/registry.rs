// Rule registry

use crate::{FieldLevel, RuleFn, check_password_strength, is_https_url};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use xvalidator_decimal::{CompareOp, validate_comparison, validate_decimal, validate_decimal_if};

/// Immutable map of rule names to handlers.
///
/// Built once through [`RuleRegistryBuilder`] and shared read-only.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, RuleFn>,
}

impl RuleRegistry {
    /// Start an empty registry
    pub fn builder() -> RuleRegistryBuilder {
        RuleRegistryBuilder::new()
    }

    /// Registry holding every built-in rule
    pub fn with_builtin_rules() -> Self {
        RuleRegistryBuilder::new().with_builtin_rules().build()
    }

    pub fn get(&self, name: &str) -> Option<&RuleFn> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}

/// Builder for [`RuleRegistry`]
#[derive(Default)]
pub struct RuleRegistryBuilder {
    rules: HashMap<String, RuleFn>,
}

impl RuleRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule; a later registration under the same name wins
    pub fn register<F>(mut self, name: impl Into<String>, rule: F) -> Self
    where
        F: Fn(&FieldLevel<'_>) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        if self.rules.insert(name.clone(), Arc::new(rule)).is_some() {
            debug!(rule = %name, "replacing registered validation rule");
        }
        self
    }

    /// `decimal`, `decimal_if` and the comparison rules `dgt` .. `dneq`
    pub fn register_decimal_rules(mut self) -> Self {
        self = self
            .register("decimal", |fl| validate_decimal(fl.value, fl.param))
            .register("decimal_if", |fl| {
                validate_decimal_if(fl.value, fl.param, fl.parent)
            });

        for op in CompareOp::ALL {
            self = self.register(op.rule_name(), move |fl| {
                validate_comparison(op, fl.value, fl.param)
            });
        }
        self
    }

    /// `https_url`
    pub fn register_url_rules(self) -> Self {
        self.register("https_url", |fl| is_https_url(fl.value))
    }

    /// `mobile_e164`
    #[cfg(feature = "phone")]
    pub fn register_phone_rules(self) -> Self {
        self.register("mobile_e164", |fl| crate::is_mobile_e164(fl.value, fl.param))
    }

    /// `password_strength`, using the validator's password policy
    pub fn register_password_rules(self) -> Self {
        self.register("password_strength", |fl| {
            check_password_strength(fl.value, &fl.config.password).is_ok()
        })
    }

    /// Every built-in rule, including `required`
    pub fn with_builtin_rules(self) -> Self {
        let builder = self
            .register("required", |fl| !fl.value.trim().is_empty())
            .register_decimal_rules()
            .register_url_rules()
            .register_password_rules();

        #[cfg(feature = "phone")]
        let builder = builder.register_phone_rules();

        builder
    }

    pub fn build(self) -> RuleRegistry {
        debug!(rules = self.rules.len(), "rule registry built");
        RuleRegistry { rules: self.rules }
    }
}
