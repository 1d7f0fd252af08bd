//! Password checks
//!
//! Each check inspects one aspect of the password against the policy.
//! Check order is part of the contract: failure indices reference position
//! in `REQUIRED_CHECKS` followed by `OPTIONAL_CHECKS`.

mod length;
mod repeat;
mod variety;

pub use length::{max_length_check, min_length_check};
pub use repeat::repeated_run_check;
pub use variety::{digit_check, lowercase_check, special_check, uppercase_check};

use crate::config::PolicyConfig;

/// Signature shared by every check.
/// - `Some(message)` - Check failed with a human-readable violation
/// - `None` - Check passed
pub type CheckFn = fn(&str, &PolicyConfig) -> Option<String>;

/// Mandatory checks; any failure marks the password not strong.
pub const REQUIRED_CHECKS: [CheckFn; 3] =
    [min_length_check, max_length_check, repeated_run_check];

/// Composition checks scored against `min_optional_tests_to_pass`.
pub const OPTIONAL_CHECKS: [CheckFn; 4] =
    [lowercase_check, uppercase_check, digit_check, special_check];

/// Password length in Unicode scalar values.
pub(crate) fn char_length(password: &str) -> usize {
    password.chars().count()
}
