//! Password policy evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::checks::{char_length, OPTIONAL_CHECKS, REQUIRED_CHECKS};
use crate::config::PolicyConfig;
use crate::verdict::Verdict;

/// Evaluates a password against the policy and returns a detailed verdict.
///
/// Every input produces a [`Verdict`]; policy violations are reported as
/// data, never as errors. Check indices continue from the required checks
/// into the optional ones, so the combined list is indexed `0..=6`.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `config` - The policy thresholds to evaluate against
pub fn evaluate(password: &SecretString, config: &PolicyConfig) -> Verdict {
    let pwd = password.expose_secret();
    let mut verdict = Verdict::default();

    let mut index = 0;
    for check in REQUIRED_CHECKS {
        match check(pwd, config) {
            Some(message) => {
                verdict.strong = false;
                verdict.errors.push(message.clone());
                verdict.required_test_errors.push(message);
                verdict.failed_tests.push(index);
            }
            None => verdict.passed_tests.push(index),
        }
        index += 1;
    }

    // Length alone decides the exemption; content is irrelevant.
    verdict.is_passphrase =
        config.allow_passphrases && char_length(pwd) >= config.min_phrase_length;

    if !verdict.is_passphrase {
        for check in OPTIONAL_CHECKS {
            match check(pwd, config) {
                Some(message) => {
                    verdict.errors.push(message.clone());
                    verdict.optional_test_errors.push(message);
                    verdict.failed_tests.push(index);
                }
                None => {
                    verdict.optional_tests_passed += 1;
                    verdict.passed_tests.push(index);
                }
            }
            index += 1;
        }
    }

    if !verdict.is_passphrase && verdict.optional_tests_passed < config.min_optional_tests_to_pass
    {
        verdict.strong = false;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        strong = verdict.strong,
        is_passphrase = verdict.is_passphrase,
        failed = verdict.failed_tests.len(),
        "password evaluated"
    );

    verdict
}
