//! Feature extraction configuration.
//!
//! One config struct carries every tunable the standard feature set
//! exposes. Defaults reproduce the values the downstream models were
//! trained against; override them with the builder methods when
//! experimenting.
//!
//! # Example
//!
//! ```
//! use token_features::FeatureConfig;
//!
//! let config = FeatureConfig::default()
//!     .with_topic_threshold(0.3)
//!     .with_affix_length(4);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for the standard feature set.
///
/// | Field | Default | Consumed by |
/// |-------|---------|-------------|
/// | `max_word_length` | 30 | token length cap |
/// | `pattern_max_length` | 15 | word-pattern truncation |
/// | `affix_length` | 3 | prefix/suffix extraction |
/// | `bitchain_length` | 7 | Brown bit-chain prefix |
/// | `topic_window_left` | 2 | topic sub-window span |
/// | `topic_window_right` | 2 | topic sub-window span |
/// | `topic_threshold` | 0.2 | topic probability cutoff |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Cap applied to the token-length feature.
    pub max_word_length: usize,

    /// Cap applied to word-shape patterns before the `~` marker.
    pub pattern_max_length: usize,

    /// Number of characters extracted by the prefix/suffix features.
    pub affix_length: usize,

    /// Bit-chain prefix length for the Brown bit-chain feature.
    pub bitchain_length: usize,

    /// Tokens of left context in the topic sub-window.
    pub topic_window_left: usize,

    /// Tokens of right context in the topic sub-window.
    pub topic_window_right: usize,

    /// Probability a topic must exceed (strictly) to be emitted.
    pub topic_threshold: f64,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            max_word_length: 30,
            pattern_max_length: 15,
            affix_length: 3,
            bitchain_length: 7,
            topic_window_left: 2,
            topic_window_right: 2,
            topic_threshold: 0.2,
        }
    }
}

impl FeatureConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token-length cap.
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = max_word_length;
        self
    }

    /// Set the word-pattern length cap.
    pub fn with_pattern_max_length(mut self, pattern_max_length: usize) -> Self {
        self.pattern_max_length = pattern_max_length;
        self
    }

    /// Set the affix length.
    pub fn with_affix_length(mut self, affix_length: usize) -> Self {
        self.affix_length = affix_length;
        self
    }

    /// Set the bit-chain prefix length.
    pub fn with_bitchain_length(mut self, bitchain_length: usize) -> Self {
        self.bitchain_length = bitchain_length;
        self
    }

    /// Set the topic sub-window span.
    pub fn with_topic_window(mut self, left: usize, right: usize) -> Self {
        self.topic_window_left = left;
        self.topic_window_right = right;
        self
    }

    /// Set the topic probability threshold.
    pub fn with_topic_threshold(mut self, topic_threshold: f64) -> Self {
        self.topic_threshold = topic_threshold;
        self
    }

    /// Check the config for values that would produce degenerate
    /// features.
    ///
    /// Zero-length caps and affixes would emit constant labels for
    /// every token; a threshold outside `[0, 1]` (or NaN) would either
    /// pass or drop every topic. Both are rejected explicitly instead
    /// of silently producing useless feature columns.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("max_word_length", self.max_word_length),
            ("pattern_max_length", self.pattern_max_length),
            ("affix_length", self.affix_length),
            ("bitchain_length", self.bitchain_length),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroLength { field });
            }
        }

        if !(0.0..=1.0).contains(&self.topic_threshold) {
            return Err(ConfigError::ThresholdOutOfRange {
                value: self.topic_threshold,
            });
        }

        Ok(())
    }
}

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A length field that must be at least 1 was 0.
    ZeroLength {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The topic threshold was outside `[0, 1]` or NaN.
    ThresholdOutOfRange {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength { field } => {
                write!(f, "config field `{field}` must be at least 1")
            }
            Self::ThresholdOutOfRange { value } => {
                write!(f, "topic threshold {value} is outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FeatureConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = FeatureConfig::new()
            .with_max_word_length(20)
            .with_affix_length(4)
            .with_topic_window(1, 3)
            .with_topic_threshold(0.5);
        assert_eq!(config.max_word_length, 20);
        assert_eq!(config.affix_length, 4);
        assert_eq!(config.topic_window_left, 1);
        assert_eq!(config.topic_window_right, 3);
        assert_eq!(config.topic_threshold, 0.5);
    }

    #[test]
    fn test_zero_length_rejected() {
        let config = FeatureConfig::default().with_affix_length(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroLength {
                field: "affix_length"
            })
        );
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let config = FeatureConfig::default().with_topic_threshold(1.5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdOutOfRange { .. })
        ));

        let config = FeatureConfig::default().with_topic_threshold(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_topic_window_is_valid() {
        // A [i, i] span is a legal (single-word) topic context.
        let config = FeatureConfig::default().with_topic_window(0, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = FeatureConfig::default().with_bitchain_length(5);
        let json = serde_json::to_string(&config).unwrap();
        let back: FeatureConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
