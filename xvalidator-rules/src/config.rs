// Validator configuration

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable prefix for [`ValidatorConfig::from_env`].
pub const ENV_PREFIX: &str = "XVALIDATOR";

/// Special characters accepted by `password_strength` by default.
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

/// Password strength requirements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum length in bytes
    pub min_length: usize,
    /// Maximum length in bytes
    pub max_length: usize,
    /// Characters that count as "special"
    pub special_chars: String,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 100,
            special_chars: DEFAULT_SPECIAL_CHARS.to_string(),
        }
    }
}

/// Settings shared by every rule invocation of a [`Validator`](crate::Validator).
///
/// ```
/// use xvalidator_rules::ValidatorConfig;
///
/// let config = ValidatorConfig::from_toml_str(r#"
///     fail_fast = false
///
///     [password]
///     min_length = 12
/// "#).unwrap();
///
/// assert!(!config.fail_fast);
/// assert_eq!(config.password.min_length, 12);
/// assert_eq!(config.password.max_length, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Stop at the first failing rule of a field
    pub fail_fast: bool,
    pub password: PasswordPolicy,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            fail_fast: true,
            password: PasswordPolicy::default(),
        }
    }
}

impl ValidatorConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Defaults overridden by `XVALIDATOR_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for
    /// `XVALIDATOR_FAIL_FAST`, `XVALIDATOR_PASSWORD_MIN_LENGTH` and
    /// `XVALIDATOR_PASSWORD_MAX_LENGTH`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(&env_key("FAIL_FAST")) {
            config.fail_fast = parse_bool(&env_key("FAIL_FAST"), &value)?;
        }
        if let Some(value) = lookup(&env_key("PASSWORD_MIN_LENGTH")) {
            config.password.min_length = parse_usize(&env_key("PASSWORD_MIN_LENGTH"), &value)?;
        }
        if let Some(value) = lookup(&env_key("PASSWORD_MAX_LENGTH")) {
            config.password.max_length = parse_usize(&env_key("PASSWORD_MAX_LENGTH"), &value)?;
        }

        Ok(config)
    }
}

fn env_key(key: &str) -> String {
    format!("{}_{}", ENV_PREFIX, key)
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert!(config.fail_fast);
        assert_eq!(config.password.min_length, 8);
        assert_eq!(config.password.max_length, 100);
        assert_eq!(config.password.special_chars, DEFAULT_SPECIAL_CHARS);
    }

    #[test]
    fn test_empty_toml_keeps_defaults() {
        let config = ValidatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_toml_overrides() {
        let config = ValidatorConfig::from_toml_str(
            r#"
            [password]
            max_length = 64
            special_chars = "!?"
            "#,
        )
        .unwrap();

        assert!(config.fail_fast);
        assert_eq!(config.password.min_length, 8);
        assert_eq!(config.password.max_length, 64);
        assert_eq!(config.password.special_chars, "!?");
    }

    #[test]
    fn test_invalid_toml() {
        let result = ValidatorConfig::from_toml_str("fail_fast = \"sometimes\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ValidatorConfig::from_file("/nonexistent/xvalidator-12345.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_lookup_overrides() {
        let config = ValidatorConfig::from_lookup(lookup(&[
            ("XVALIDATOR_FAIL_FAST", "false"),
            ("XVALIDATOR_PASSWORD_MIN_LENGTH", "12"),
        ]))
        .unwrap();

        assert!(!config.fail_fast);
        assert_eq!(config.password.min_length, 12);
        assert_eq!(config.password.max_length, 100);
    }

    #[test]
    fn test_lookup_invalid_value() {
        let result = ValidatorConfig::from_lookup(lookup(&[(
            "XVALIDATOR_PASSWORD_MAX_LENGTH",
            "lots",
        )]));

        match result {
            Err(ConfigError::InvalidValue { key, value }) => {
                assert_eq!(key, "XVALIDATOR_PASSWORD_MAX_LENGTH");
                assert_eq!(value, "lots");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }
}
