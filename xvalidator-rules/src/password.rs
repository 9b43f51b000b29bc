// Password strength

use crate::PasswordPolicy;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("password must be at least {0} characters long")]
    TooShort(usize),

    #[error("password must not exceed {0} characters")]
    TooLong(usize),

    #[error("password must contain at least one: {}", .0.join(", "))]
    Missing(Vec<String>),
}

/// Check a password against a policy.
///
/// Lengths count UTF-8 bytes. Each of uppercase ASCII, lowercase ASCII,
/// digit and one of the policy's special characters must appear at least
/// once; all missing classes are reported together.
pub fn check_password_strength(
    password: &str,
    policy: &PasswordPolicy,
) -> Result<(), PasswordError> {
    let length = password.len();
    if length < policy.min_length {
        return Err(PasswordError::TooShort(policy.min_length));
    }
    if length > policy.max_length {
        return Err(PasswordError::TooLong(policy.max_length));
    }

    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in password.chars() {
        match c {
            'A'..='Z' => has_upper = true,
            'a'..='z' => has_lower = true,
            '0'..='9' => has_digit = true,
            _ if policy.special_chars.contains(c) => has_special = true,
            _ => {}
        }
    }

    let mut missing = Vec::new();
    if !has_upper {
        missing.push("uppercase letter".to_string());
    }
    if !has_lower {
        missing.push("lowercase letter".to_string());
    }
    if !has_digit {
        missing.push("digit".to_string());
    }
    if !has_special {
        missing.push(format!("special character ({})", policy.special_chars));
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PasswordError::Missing(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(password: &str) -> Result<(), PasswordError> {
        check_password_strength(password, &PasswordPolicy::default())
    }

    #[test]
    fn test_strong_passwords() {
        assert!(check("Test1234!").is_ok());
        assert!(check("Abcd1234!@#$").is_ok());
        assert!(check("MyP@ssw0rd!").is_ok());
        assert!(check("Abc123!@").is_ok());
        assert!(check(&format!("Abc123!{}", "x".repeat(93))).is_ok());
    }

    #[test]
    fn test_length_limits() {
        assert_eq!(check("Abc12!"), Err(PasswordError::TooShort(8)));
        assert_eq!(check(""), Err(PasswordError::TooShort(8)));
        assert_eq!(
            check(&format!("{}bc123!", "A".repeat(101))),
            Err(PasswordError::TooLong(100))
        );
        assert_eq!(
            check("Abc12!").unwrap_err().to_string(),
            "password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_missing_classes() {
        let message = |password: &str| check(password).unwrap_err().to_string();

        assert!(message("abcdefg123!").contains("uppercase letter"));
        assert!(message("ABCDEFG123!").contains("lowercase letter"));
        assert!(message("Abcdefgh!").contains("digit"));
        assert!(message("Abcdefgh123").contains("special character"));

        assert_eq!(
            check("abcdefgh"),
            Err(PasswordError::Missing(vec![
                "uppercase letter".to_string(),
                "digit".to_string(),
                format!("special character ({})", crate::DEFAULT_SPECIAL_CHARS),
            ]))
        );
    }

    #[test]
    fn test_length_counts_bytes() {
        // 7 characters, 13 bytes
        assert!(check("Ab1!€€€").is_ok());
        // 8 characters, 101 bytes
        let wide = format!("Ab1!{}", "€".repeat(32) + "x");
        assert_eq!(wide.len(), 101);
        assert_eq!(check(&wide), Err(PasswordError::TooLong(100)));
    }

    #[test]
    fn test_non_ascii_letters_do_not_count() {
        assert!(check("ÄÖÜäöü12!").is_err());
    }

    #[test]
    fn test_custom_policy() {
        let policy = PasswordPolicy {
            min_length: 4,
            max_length: 6,
            special_chars: "~".to_string(),
        };
        assert!(check_password_strength("Ab1~", &policy).is_ok());
        assert!(check_password_strength("Ab1!", &policy).is_err());
        assert_eq!(
            check_password_strength("Ab1~xyz", &policy),
            Err(PasswordError::TooLong(6))
        );
    }
}
