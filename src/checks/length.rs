//! Length checks - enforce the configured minimum and maximum.

use super::char_length;
use crate::config::PolicyConfig;

/// Checks if the password meets the configured minimum length.
///
/// # Returns
/// - `Some(message)` if the password is too short
/// - `None` if the password has sufficient length
pub fn min_length_check(password: &str, config: &PolicyConfig) -> Option<String> {
    if char_length(password) < config.min_length {
        return Some(format!(
            "The password must be at least {} characters long.",
            config.min_length
        ));
    }
    None
}

/// Checks if the password stays within the configured maximum length.
///
/// # Returns
/// - `Some(message)` if the password is too long
/// - `None` if the password is within bounds
pub fn max_length_check(password: &str, config: &PolicyConfig) -> Option<String> {
    if char_length(password) > config.max_length {
        return Some(format!(
            "The password must be fewer than {} characters.",
            config.max_length
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_too_short() {
        let config = PolicyConfig::default();
        let result = min_length_check("Short1!", &config);
        assert_eq!(
            result,
            Some("The password must be at least 10 characters long.".to_string())
        );
    }

    #[test]
    fn test_min_length_exactly_minimum() {
        let config = PolicyConfig::default();
        assert_eq!(min_length_check("exactly10!", &config), None);
    }

    #[test]
    fn test_min_length_message_uses_configured_value() {
        let mut config = PolicyConfig::default();
        config.min_length = 15;
        let result = min_length_check("tooshort", &config);
        assert_eq!(
            result,
            Some("The password must be at least 15 characters long.".to_string())
        );
    }

    #[test]
    fn test_max_length_exceeded() {
        let config = PolicyConfig::default();
        let long = "a".repeat(129);
        let result = max_length_check(&long, &config);
        assert_eq!(
            result,
            Some("The password must be fewer than 128 characters.".to_string())
        );
    }

    #[test]
    fn test_max_length_exactly_maximum() {
        let config = PolicyConfig::default();
        let at_limit = "a".repeat(128);
        assert_eq!(max_length_check(&at_limit, &config), None);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut config = PolicyConfig::default();
        config.min_length = 4;
        // 4 characters, 12 bytes
        assert_eq!(min_length_check("éééé", &config), None);
        config.max_length = 4;
        assert_eq!(max_length_check("éééé", &config), None);
    }
}
