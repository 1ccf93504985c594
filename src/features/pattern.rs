//! Normalized word-shape patterns.
//!
//! Collapses a word to its orthographic shape in two ordered regex
//! stages: per-character class normalization, then run-length collapse.
//! `"Berlin"` becomes `Aa+`, `"U.S.A."` becomes `A.A.A.`, `"2024"`
//! stays `9999`.
//!
//! Stage order is load-bearing: class normalization must run before
//! collapsing, and within each stage the rules apply strictly in
//! sequence (the final `#` rule eats everything earlier rules left).

use regex::Regex;

use super::{TokenLabels, WindowFeature};
use crate::window::Window;

/// Symbol classes, applied in order. Later rules only see what earlier
/// rules left untouched.
const NORMALIZATION: [(&str, &str); 6] = [
    (r"[A-ZÄÖÜ]", "A"),
    (r"[a-zäöüß]", "a"),
    (r"[0-9]", "9"),
    (r"[\.\!\?\,\;]", "."),
    (r"[\(\)\[\]\{\}]", "("),
    (r"[^Aa9\.\(]", "#"),
];

/// Run-collapse rules. Digit runs are deliberately absent: a year keeps
/// all four digits (`9999`), which separates years from arbitrary long
/// numbers better than a collapsed `9+` would.
const COLLAPSE: [(&str, &str); 5] = [
    (r"[A]{2,}", "A+"),
    (r"[a]{2,}", "a+"),
    (r"[\.]{2,}", ".+"),
    (r"[\(]{2,}", "(+"),
    (r"[#]{2,}", "#+"),
];

/// Emits `wp=<pattern>`: the word's normalized shape.
///
/// Patterns longer than the configured maximum (default 15 characters)
/// are cut and get a trailing `~` marker so truncated shapes stay
/// distinguishable from naturally short ones.
///
/// # Example
///
/// ```
/// use token_features::features::{WindowFeature, WordPatternFeature};
/// use token_features::window::Window;
///
/// let feature = WordPatternFeature::new();
/// let out = feature.convert_window(&Window::from_words(["USA", "2024"]));
/// assert_eq!(out[0], vec!["wp=A+".to_string()]);
/// assert_eq!(out[1], vec!["wp=9999".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct WordPatternFeature {
    max_length: usize,
    truncation_marker: char,
    normalization: Vec<(Regex, &'static str)>,
    collapse: Vec<(Regex, &'static str)>,
}

impl WordPatternFeature {
    /// Create with the default 15-character pattern cap.
    pub fn new() -> Self {
        let compile = |rules: &[(&'static str, &'static str)]| {
            rules
                .iter()
                .map(|(pattern, to)| {
                    (
                        Regex::new(pattern).expect("hard-coded shape pattern must compile"),
                        *to,
                    )
                })
                .collect()
        };

        Self {
            max_length: 15,
            truncation_marker: '~',
            normalization: compile(&NORMALIZATION),
            collapse: compile(&COLLAPSE),
        }
    }

    /// Override the pattern length cap.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Shape of a single word.
    pub fn word_pattern(&self, word: &str) -> String {
        let mut pattern = word.to_string();
        for (regex, to) in &self.normalization {
            pattern = regex.replace_all(&pattern, *to).into_owned();
        }
        for (regex, to) in &self.collapse {
            pattern = regex.replace_all(&pattern, *to).into_owned();
        }

        if pattern.chars().count() > self.max_length {
            let mut cut: String = pattern.chars().take(self.max_length).collect();
            cut.push(self.truncation_marker);
            cut
        } else {
            pattern
        }
    }
}

impl Default for WordPatternFeature {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowFeature for WordPatternFeature {
    fn name(&self) -> &'static str {
        "word_pattern"
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        window
            .iter()
            .map(|token| vec![format!("wp={}", self.word_pattern(&token.word))])
            .collect()
    }
}
