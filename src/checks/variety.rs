//! Character variety checks - lowercase, uppercase, digits, special chars.
//!
//! Special means any character outside `A-Z`, `a-z`, `0-9`, which covers
//! whitespace and the full OWASP punctuation set.

use crate::config::PolicyConfig;

/// Checks for at least one lowercase ASCII letter.
pub fn lowercase_check(password: &str, _config: &PolicyConfig) -> Option<String> {
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("The password must contain at least one lowercase letter.".to_string());
    }
    None
}

/// Checks for at least one uppercase ASCII letter.
pub fn uppercase_check(password: &str, _config: &PolicyConfig) -> Option<String> {
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("The password must contain at least one uppercase letter.".to_string());
    }
    None
}

/// Checks for at least one ASCII digit.
pub fn digit_check(password: &str, _config: &PolicyConfig) -> Option<String> {
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("The password must contain at least one number.".to_string());
    }
    None
}

/// Checks for at least one special character.
pub fn special_check(password: &str, _config: &PolicyConfig) -> Option<String> {
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Some("The password must contain at least one special character.".to_string());
    }
    None
}
