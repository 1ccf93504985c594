//! Per-token categorical feature extraction.
//!
//! Every feature implements one operation — [`WindowFeature::convert_window`] —
//! turning a window of N tokens into exactly N ordered label lists. The
//! label lists across all configured features are what a downstream
//! sequence classifier consumes, one concatenated list per token.
//!
//! # Feature families
//!
//! - [`shape`]: surface-shape features computed from the word alone
//!   (capitalization, length, digit/punctuation presence, affixes)
//! - [`pattern`]: normalized word-shape patterns (`"USA"` → `A+`)
//! - [`lookup`]: features wrapping one read-only lookup resource each
//!   (cluster ids, bit-chains, gazetteer membership, unigram rank)
//! - [`pos`]: part-of-speech tags, batched per window
//! - [`topics`]: sparse topic indicators from local sub-window spans
//!
//! No feature depends on another feature's output, and every feature is
//! a pure function of the window and its (read-only) resources — calls
//! are independent and freely parallelizable.
//!
//! # Label format
//!
//! Every label is a `"<name>=<value>"` string, e.g. `swu=1`, `wp=Aa+`,
//! `bc=217`. Lookup misses keep the sentinel conventions downstream
//! models were trained on: `-1` for missing ids and ranks, an empty
//! value for missing bit-chains, `0` for non-membership.

pub mod lookup;
pub mod pattern;
pub mod pos;
pub mod shape;
pub mod topics;

pub use lookup::{
    BrownBitchainFeature, BrownClusterFeature, EmbeddingClusterFeature, GazetteerFeature,
    UnigramRankFeature,
};
pub use pattern::WordPatternFeature;
pub use pos::PosTagFeature;
pub use shape::{
    ContainsDigitsFeature, ContainsPunctuationFeature, OnlyDigitsFeature, OnlyPunctuationFeature,
    PrefixFeature, StartsWithUppercaseFeature, SuffixFeature, TokenLengthFeature,
};
pub use topics::TopicFeature;

use crate::window::Window;

/// Labels describing a single token: zero or more `"<name>=<value>"` strings.
pub type TokenLabels = Vec<String>;

/// A feature extractor over token windows.
///
/// # Contract
///
/// - `convert_window` returns exactly `window.len()` entries, the i-th
///   describing the i-th token.
/// - Instances hold configuration and resource handles only; calls do
///   not observe or mutate prior-call state, so one instance can serve
///   many windows (and many threads — hence `Send + Sync`).
/// - Unknown or malformed words degrade to sentinel labels; extraction
///   itself never fails.
pub trait WindowFeature: Send + Sync {
    /// Short stable identifier, used in diagnostics and validation.
    fn name(&self) -> &'static str;

    /// Convert a window into one ordered label list per token.
    fn convert_window(&self, window: &Window) -> Vec<TokenLabels>;
}

impl<F: WindowFeature + ?Sized> WindowFeature for Box<F> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        (**self).convert_window(window)
    }
}
