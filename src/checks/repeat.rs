//! Repeated-run check - rejects runs of identical consecutive characters.

use crate::config::PolicyConfig;

/// Checks for runs of 3 or more identical consecutive characters.
///
/// Only contiguous runs count; non-adjacent repeats of the same character
/// are allowed.
///
/// # Returns
/// - `Some(message)` if a run of 3+ identical characters is found
/// - `None` otherwise
pub fn repeated_run_check(password: &str, _config: &PolicyConfig) -> Option<String> {
    let mut run_length = 1;
    let mut previous: Option<char> = None;

    for current in password.chars() {
        if previous == Some(current) {
            run_length += 1;
            if run_length >= 3 {
                return Some(
                    "The password may not contain sequences of three or more repeated characters."
                        .to_string(),
                );
            }
        } else {
            run_length = 1;
        }
        previous = Some(current);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_of_three_letters() {
        let config = PolicyConfig::default();
        assert!(repeated_run_check("L0veSexxxSecre+God", &config).is_some());
    }

    #[test]
    fn test_run_of_three_digits() {
        let config = PolicyConfig::default();
        assert!(repeated_run_check("pass111word", &config).is_some());
    }

    #[test]
    fn test_run_of_two_is_allowed() {
        let config = PolicyConfig::default();
        assert_eq!(repeated_run_check("L0veSexxSecre+God", &config), None);
    }

    #[test]
    fn test_non_adjacent_repeats_are_allowed() {
        let config = PolicyConfig::default();
        assert_eq!(repeated_run_check("axbxcxdxex", &config), None);
    }

    #[test]
    fn test_run_spanning_the_end() {
        let config = PolicyConfig::default();
        assert!(repeated_run_check("passworddd", &config).is_some());
    }

    #[test]
    fn test_short_and_empty_inputs() {
        let config = PolicyConfig::default();
        assert_eq!(repeated_run_check("", &config), None);
        assert_eq!(repeated_run_check("aa", &config), None);
    }
}
