//! Evaluation verdict - the structured result of one evaluation.

use serde::{Deserialize, Serialize};

/// Outcome of evaluating one password against the policy.
///
/// Check indices in `passed_tests` and `failed_tests` reference the combined
/// check list: required checks first (`0..=2`), optional checks continuing
/// after them (`3..=6`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// False as soon as any required check fails or the optional-check
    /// threshold is missed.
    pub strong: bool,
    /// True when passphrases are allowed and the input is long enough to
    /// qualify. Passphrases skip the optional checks entirely.
    pub is_passphrase: bool,
    /// All violation messages, required first then optional.
    pub errors: Vec<String>,
    pub required_test_errors: Vec<String>,
    pub optional_test_errors: Vec<String>,
    pub passed_tests: Vec<usize>,
    pub failed_tests: Vec<usize>,
    /// Count of optional checks with no violation. Stays zero when optional
    /// checks are skipped.
    pub optional_tests_passed: usize,
}

impl Default for Verdict {
    fn default() -> Self {
        Self {
            strong: true,
            is_passphrase: false,
            errors: Vec::new(),
            required_test_errors: Vec::new(),
            optional_test_errors: Vec::new(),
            passed_tests: Vec::new(),
            failed_tests: Vec::new(),
            optional_tests_passed: 0,
        }
    }
}
