//! Password strength policy evaluation library
//!
//! Evaluates a candidate password against a configurable strength policy
//! and returns a structured [`Verdict`] instead of a boolean, so callers
//! can present specific remediation messages.
//!
//! Three required checks (minimum length, maximum length, repeated-run
//! detection) always run. Four optional composition checks (lowercase,
//! uppercase, digit, special character) are scored against a threshold,
//! and sufficiently long inputs are exempted from them as passphrases.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{evaluate, PolicyConfig};
//! use secrecy::SecretString;
//!
//! let mut config = PolicyConfig::default();
//! config.merge_json(r#"{"minOptionalTestsToPass": 3}"#).unwrap();
//!
//! let password = SecretString::new("L0veSexSecre+God".to_string().into());
//! let verdict = evaluate(&password, &config);
//!
//! assert!(verdict.strong);
//! assert!(verdict.errors.is_empty());
//! ```

// Internal modules
mod checks;
mod config;
mod evaluator;
mod verdict;

// Public API
pub use config::{ConfigError, PolicyConfig};
pub use evaluator::evaluate;
pub use verdict::Verdict;
