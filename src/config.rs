//! Policy configuration
//!
//! Holds the tunable thresholds read by the evaluation engine.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration overrides: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Configuration overrides must be a JSON object")]
    NotAnObject,
}

/// Strength policy thresholds.
///
/// An owned value passed by reference into [`crate::evaluate`]; merges take
/// `&mut self`, so concurrent use is governed by the borrow checker rather
/// than internal locking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfig {
    /// Inputs at least `min_phrase_length` characters long skip the
    /// optional checks.
    pub allow_passphrases: bool,
    /// Upper bound on accepted length.
    pub max_length: usize,
    /// Lower bound on accepted length.
    pub min_length: usize,
    /// Length at or above which a password counts as a passphrase.
    pub min_phrase_length: usize,
    /// Optional checks that must pass when optional checks apply.
    pub min_optional_tests_to_pass: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            allow_passphrases: true,
            max_length: 128,
            min_length: 10,
            min_phrase_length: 20,
            min_optional_tests_to_pass: 4,
        }
    }
}

impl PolicyConfig {
    /// Applies a partial set of overrides keyed by wire field name.
    ///
    /// Keys that do not name an existing field are ignored, as are values
    /// of the wrong JSON type (including negative numbers, which cannot
    /// coerce to an unsigned length). Malformed input never errors and
    /// never introduces new configuration surface.
    pub fn merge(&mut self, overrides: &Map<String, Value>) {
        for (key, value) in overrides {
            match key.as_str() {
                "allowPassphrases" => {
                    if let Some(v) = value.as_bool() {
                        self.allow_passphrases = v;
                    }
                }
                "maxLength" => {
                    if let Some(v) = value.as_u64() {
                        self.max_length = v as usize;
                    }
                }
                "minLength" => {
                    if let Some(v) = value.as_u64() {
                        self.min_length = v as usize;
                    }
                }
                "minPhraseLength" => {
                    if let Some(v) = value.as_u64() {
                        self.min_phrase_length = v as usize;
                    }
                }
                "minOptionalTestsToPass" => {
                    if let Some(v) = value.as_u64() {
                        self.min_optional_tests_to_pass = v as usize;
                    }
                }
                _ => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Ignoring unknown configuration key: {}", key);
                }
            }
        }
    }

    /// Parses a JSON object from a string and applies [`Self::merge`].
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string is not valid JSON
    /// - The top-level value is not an object
    pub fn merge_json(&mut self, overrides: &str) -> Result<(), ConfigError> {
        let value: Value = serde_json::from_str(overrides)?;
        let map = value.as_object().ok_or(ConfigError::NotAnObject)?;
        self.merge(map);

        #[cfg(feature = "tracing")]
        tracing::debug!("Configuration after merge: {:?}", self);

        Ok(())
    }
}
