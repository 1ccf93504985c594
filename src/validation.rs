//! Output contract validation.
//!
//! Checks a feature's output against the per-token contract before it
//! reaches a training pipeline: one label list per token and well-formed
//! `"<name>=<value>"` labels. Useful when integrating a new feature or
//! a new collaborator implementation; the extractor itself does not pay
//! for these checks in release builds.
//!
//! # Usage
//!
//! ```
//! use token_features::features::{StartsWithUppercaseFeature, WindowFeature};
//! use token_features::validation::OutputValidator;
//! use token_features::window::Window;
//!
//! let feature = StartsWithUppercaseFeature::new();
//! let window = Window::from_words(["Berlin", "calling"]);
//! let output = feature.convert_window(&window);
//!
//! let result = OutputValidator::new().validate(feature.name(), &window, &output);
//! assert!(result.is_valid());
//! ```

use std::fmt;

use crate::features::TokenLabels;
use crate::window::Window;

/// Outcome of a single validation check.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationLevel {
    /// The check passed.
    Valid,
    /// The check found something questionable but usable.
    Warning(String),
    /// The check found a contract violation.
    Error(String),
}

impl ValidationLevel {
    /// Whether the check passed cleanly.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationLevel::Valid)
    }

    /// Whether the check produced a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, ValidationLevel::Warning(_))
    }

    /// Whether the check produced an error.
    pub fn is_error(&self) -> bool {
        matches!(self, ValidationLevel::Error(_))
    }
}

impl fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationLevel::Valid => write!(f, "Valid"),
            ValidationLevel::Warning(msg) => write!(f, "Warning: {msg}"),
            ValidationLevel::Error(msg) => write!(f, "Error: {msg}"),
        }
    }
}

/// Aggregated outcome of all checks run against one feature output.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    results: Vec<(String, ValidationLevel)>,
}

impl ValidationResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a check outcome.
    pub fn add(&mut self, check_name: &str, level: ValidationLevel) {
        self.results.push((check_name.to_string(), level));
    }

    /// Whether every check passed cleanly.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, level)| level.is_valid())
    }

    /// Whether any check errored.
    pub fn has_errors(&self) -> bool {
        self.results.iter().any(|(_, level)| level.is_error())
    }

    /// Messages of all warning-level checks.
    pub fn warnings(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter_map(|(_, level)| match level {
                ValidationLevel::Warning(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Messages of all error-level checks.
    pub fn errors(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter_map(|(_, level)| match level {
                ValidationLevel::Error(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All recorded checks with their outcomes.
    pub fn checks(&self) -> &[(String, ValidationLevel)] {
        &self.results
    }
}

/// Validates feature output against the per-token contract.
#[derive(Debug, Clone, Default)]
pub struct OutputValidator;

impl OutputValidator {
    /// Create a validator.
    pub fn new() -> Self {
        Self
    }

    /// Run all checks for one feature's output on one window.
    pub fn validate(
        &self,
        feature_name: &str,
        window: &Window,
        output: &[TokenLabels],
    ) -> ValidationResult {
        let mut result = ValidationResult::new();

        if output.len() == window.len() {
            result.add("output_length", ValidationLevel::Valid);
        } else {
            result.add(
                "output_length",
                ValidationLevel::Error(format!(
                    "feature `{feature_name}` produced {} label lists for {} tokens",
                    output.len(),
                    window.len()
                )),
            );
        }

        let mut label_check = ValidationLevel::Valid;
        'outer: for (i, labels) in output.iter().enumerate() {
            for label in labels {
                match label.split_once('=') {
                    Some((name, _)) if !name.is_empty() => {}
                    _ => {
                        label_check = ValidationLevel::Error(format!(
                            "feature `{feature_name}` emitted malformed label `{label}` at token {i}"
                        ));
                        break 'outer;
                    }
                }
            }
        }
        result.add("label_format", label_check);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_output_passes() {
        let window = Window::from_words(["a", "b"]);
        let output = vec![vec!["x=1".to_string()], vec![]];
        let result = OutputValidator::new().validate("test", &window, &output);
        assert!(result.is_valid());
        assert!(!result.has_errors());
    }

    #[test]
    fn test_length_mismatch_errors() {
        let window = Window::from_words(["a", "b"]);
        let output = vec![vec!["x=1".to_string()]];
        let result = OutputValidator::new().validate("test", &window, &output);
        assert!(result.has_errors());
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].contains("1 label lists for 2 tokens"));
    }

    #[test]
    fn test_malformed_label_errors() {
        let window = Window::from_words(["a"]);
        for bad in ["no_equals", "=valueless"] {
            let output = vec![vec![bad.to_string()]];
            let result = OutputValidator::new().validate("test", &window, &output);
            assert!(result.has_errors(), "`{bad}` should be rejected");
        }
    }

    #[test]
    fn test_empty_value_is_wellformed() {
        // Sentinel labels like `bcb=` carry an empty value on purpose.
        let window = Window::from_words(["a"]);
        let output = vec![vec!["bcb=".to_string()]];
        let result = OutputValidator::new().validate("test", &window, &output);
        assert!(result.is_valid());
    }

    #[test]
    fn test_empty_window_empty_output_valid() {
        let result = OutputValidator::new().validate("test", &Window::default(), &[]);
        assert!(result.is_valid());
    }
}
