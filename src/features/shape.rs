//! Surface-shape features.
//!
//! Every feature here is computed from the token's surface string alone —
//! no lookup resources, no context beyond the single word. They encode
//! the orthographic cues a sequence classifier leans on most: casing,
//! length, digit and punctuation content, and short affixes.
//!
//! Lengths and affixes count characters, not bytes, so umlauts and other
//! multi-byte letters behave like any other character.

use regex::Regex;

use super::{TokenLabels, WindowFeature};
use crate::window::Window;

/// Punctuation class shared by the presence/only features.
///
/// The set is fixed: `. , : ; ( ) [ ] ? !` — it matches what the
/// tokenizer upstream leaves attached to words.
const PUNCTUATION_CLASS: &str = r"[\.\,\:\;\(\)\[\]\?\!]";

/// Matches every character the affix features mask out with `#`:
/// anything outside the Latin letters (plus umlauts and ß) and a small
/// punctuation set.
const AFFIX_CLASS: &str = r"[^a-zA-ZäöüÄÖÜß\.\,\!\?]";

fn compile(pattern: &str) -> Regex {
    // All patterns in this module are fixed string literals.
    Regex::new(pattern).expect("hard-coded feature pattern must compile")
}

/// Emits `swu=1` if the word starts with an uppercase or titlecase
/// character, else `swu=0`.
///
/// Empty words emit `swu=0`.
#[derive(Debug, Clone, Default)]
pub struct StartsWithUppercaseFeature;

impl StartsWithUppercaseFeature {
    pub fn new() -> Self {
        Self
    }
}

impl WindowFeature for StartsWithUppercaseFeature {
    fn name(&self) -> &'static str {
        "starts_with_uppercase"
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        window
            .iter()
            .map(|token| {
                let upper = token
                    .word
                    .chars()
                    .next()
                    .map(char::is_uppercase)
                    .unwrap_or(false);
                vec![format!("swu={}", u8::from(upper))]
            })
            .collect()
    }
}

/// Emits `l=<length>` with the character count capped at a maximum.
///
/// The cap (default 30) bounds feature cardinality — a 45-character
/// token and a 90-character token both land on `l=30`.
#[derive(Debug, Clone)]
pub struct TokenLengthFeature {
    max_length: usize,
}

impl TokenLengthFeature {
    /// Create with the default cap of 30 characters.
    pub fn new() -> Self {
        Self { max_length: 30 }
    }

    /// Override the length cap.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

impl Default for TokenLengthFeature {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowFeature for TokenLengthFeature {
    fn name(&self) -> &'static str {
        "token_length"
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        window
            .iter()
            .map(|token| {
                let length = token.word.chars().count().min(self.max_length);
                vec![format!("l={length}")]
            })
            .collect()
    }
}

/// Emits `cD=1` if any digit occurs anywhere in the word, else `cD=0`.
#[derive(Debug, Clone)]
pub struct ContainsDigitsFeature {
    contains_digits: Regex,
}

impl ContainsDigitsFeature {
    pub fn new() -> Self {
        Self {
            contains_digits: compile(r"[0-9]"),
        }
    }
}

impl Default for ContainsDigitsFeature {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowFeature for ContainsDigitsFeature {
    fn name(&self) -> &'static str {
        "contains_digits"
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        window
            .iter()
            .map(|token| {
                let hit = self.contains_digits.is_match(&token.word);
                vec![format!("cD={}", u8::from(hit))]
            })
            .collect()
    }
}

/// Emits `cP=1` if any character of the fixed punctuation set occurs
/// anywhere in the word, else `cP=0`.
#[derive(Debug, Clone)]
pub struct ContainsPunctuationFeature {
    contains_punctuation: Regex,
}

impl ContainsPunctuationFeature {
    pub fn new() -> Self {
        Self {
            contains_punctuation: compile(PUNCTUATION_CLASS),
        }
    }
}

impl Default for ContainsPunctuationFeature {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowFeature for ContainsPunctuationFeature {
    fn name(&self) -> &'static str {
        "contains_punctuation"
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        window
            .iter()
            .map(|token| {
                let hit = self.contains_punctuation.is_match(&token.word);
                vec![format!("cP={}", u8::from(hit))]
            })
            .collect()
    }
}

/// Emits `oD=1` if the entire word consists of digits, else `oD=0`.
///
/// Anchored full-string match: `"2024"` hits, `"2024er"` does not, and
/// the empty word does not.
#[derive(Debug, Clone)]
pub struct OnlyDigitsFeature {
    only_digits: Regex,
}

impl OnlyDigitsFeature {
    pub fn new() -> Self {
        Self {
            only_digits: compile(r"^[0-9]+$"),
        }
    }
}

impl Default for OnlyDigitsFeature {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowFeature for OnlyDigitsFeature {
    fn name(&self) -> &'static str {
        "only_digits"
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        window
            .iter()
            .map(|token| {
                let hit = self.only_digits.is_match(&token.word);
                vec![format!("oD={}", u8::from(hit))]
            })
            .collect()
    }
}

/// Emits `oP=1` if the entire word consists of punctuation-set
/// characters, else `oP=0`.
#[derive(Debug, Clone)]
pub struct OnlyPunctuationFeature {
    only_punctuation: Regex,
}

impl OnlyPunctuationFeature {
    pub fn new() -> Self {
        Self {
            only_punctuation: compile(&format!("^{PUNCTUATION_CLASS}+$")),
        }
    }
}

impl Default for OnlyPunctuationFeature {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowFeature for OnlyPunctuationFeature {
    fn name(&self) -> &'static str {
        "only_punctuation"
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        window
            .iter()
            .map(|token| {
                let hit = self.only_punctuation.is_match(&token.word);
                vec![format!("oP={}", u8::from(hit))]
            })
            .collect()
    }
}

/// Emits `pf=<prefix>`: the first `affix_length` characters of the word
/// with every character outside the Latin-letter-plus-punctuation set
/// replaced by `#`.
///
/// Words shorter than the affix length yield shorter prefixes; nothing
/// is padded.
#[derive(Debug, Clone)]
pub struct PrefixFeature {
    affix_length: usize,
    mask: Regex,
}

impl PrefixFeature {
    /// Create with the default affix length of 3.
    pub fn new() -> Self {
        Self {
            affix_length: 3,
            mask: compile(AFFIX_CLASS),
        }
    }

    /// Override the affix length.
    pub fn with_affix_length(mut self, affix_length: usize) -> Self {
        self.affix_length = affix_length;
        self
    }
}

impl Default for PrefixFeature {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowFeature for PrefixFeature {
    fn name(&self) -> &'static str {
        "prefix"
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        window
            .iter()
            .map(|token| {
                let raw: String = token.word.chars().take(self.affix_length).collect();
                let prefix = self.mask.replace_all(&raw, "#");
                vec![format!("pf={prefix}")]
            })
            .collect()
    }
}

/// Emits `sf=<suffix>`: the last `affix_length` characters of the word,
/// masked the same way as [`PrefixFeature`].
#[derive(Debug, Clone)]
pub struct SuffixFeature {
    affix_length: usize,
    mask: Regex,
}

impl SuffixFeature {
    /// Create with the default affix length of 3.
    pub fn new() -> Self {
        Self {
            affix_length: 3,
            mask: compile(AFFIX_CLASS),
        }
    }

    /// Override the affix length.
    pub fn with_affix_length(mut self, affix_length: usize) -> Self {
        self.affix_length = affix_length;
        self
    }
}

impl Default for SuffixFeature {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowFeature for SuffixFeature {
    fn name(&self) -> &'static str {
        "suffix"
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        window
            .iter()
            .map(|token| {
                let chars: Vec<char> = token.word.chars().collect();
                let start = chars.len().saturating_sub(self.affix_length);
                let raw: String = chars[start..].iter().collect();
                let suffix = self.mask.replace_all(&raw, "#");
                vec![format!("sf={suffix}")]
            })
            .collect()
    }
}
