//! Read-only lookup resources consumed by feature extractors.
//!
//! Every lookup a feature performs goes through one of the traits in
//! this module. Features own their resource handles (injected at
//! construction as `Arc<dyn Trait>`), never reach for ambient state,
//! and treat every miss as a sentinel rather than an error.
//!
//! # Trait map
//!
//! | Trait | Backing model | Shipped implementation |
//! |-------|---------------|------------------------|
//! | [`ClusterLookup`] | word-embedding / Brown clustering | [`WordClusters`], [`BrownClusters`] |
//! | [`BitchainLookup`] | hierarchical Brown clustering | [`BrownClusters`] |
//! | [`GazetteerLookup`] | known-name lists | [`HashGazetteer`] |
//! | [`RankLookup`] | corpus unigram frequencies | [`UnigramTable`] |
//! | [`PosTagger`] | part-of-speech tagger | external (trait only) |
//! | [`TopicModel`] | topic model | external (trait only) |
//!
//! The map-shaped resources ship with in-memory implementations because
//! they *are* plain lookups; taggers and topic models wrap real models
//! and stay behind the trait seam.

pub mod clusters;
pub mod gazetteer;
pub mod unigrams;

pub use clusters::{BrownClusters, WordClusters};
pub use gazetteer::HashGazetteer;
pub use unigrams::UnigramTable;

/// Maps a word to its flat cluster id.
///
/// Returns `None` for words the clustering never saw; callers render
/// that as the `-1` sentinel.
pub trait ClusterLookup: Send + Sync {
    /// Cluster id of `word`, if the word is mapped.
    fn cluster_of(&self, word: &str) -> Option<u64>;
}

/// Maps a word to its hierarchical cluster bit-chain.
///
/// The bit-chain encodes the root-to-leaf path in a hierarchical
/// clustering (e.g. Brown clusters). `None` for unmapped words; callers
/// render that as an empty chain.
pub trait BitchainLookup: Send + Sync {
    /// Bit-chain of `word`, if the word is mapped.
    fn bitchain_of(&self, word: &str) -> Option<&str>;
}

/// Membership test against a precompiled word list.
pub trait GazetteerLookup: Send + Sync {
    /// Whether `word` appears in the gazetteer.
    fn contains(&self, word: &str) -> bool;
}

/// Maps a word to its corpus frequency rank.
///
/// Rank 1 is the most frequent word. `None` for words absent from the
/// table; callers render that as the `-1` sentinel.
pub trait RankLookup: Send + Sync {
    /// Frequency rank of `word`, if present.
    fn rank_of(&self, word: &str) -> Option<u64>;
}

/// Part-of-speech tagger over a whole word sequence.
///
/// Contract: the returned pairs are positionally aligned with the input —
/// `result[i]` is `(words[i], tag_of(words[i]))` with exactly one pair
/// per input word. Tagging the whole sequence in one call lets
/// implementations use sentence context and amortizes invocation cost.
pub trait PosTagger: Send + Sync {
    /// Tag every word of the sequence, preserving order and length.
    fn tag(&self, words: &[&str]) -> Vec<(String, String)>;
}

/// Topic model queried with a raw text span.
///
/// Returns the inferred topic distribution as `(topic index, probability)`
/// pairs. No ordering is guaranteed; an empty distribution is valid.
pub trait TopicModel: Send + Sync {
    /// Topic distribution for `text`.
    fn topics(&self, text: &str) -> Vec<(usize, f64)>;
}
