//! In-memory cluster maps.
//!
//! Two table shapes cover the clustering models the features consume:
//!
//! - [`WordClusters`]: flat word → cluster id map, as produced by
//!   k-means over word embeddings.
//! - [`BrownClusters`]: word → (cluster id, bit-chain) map, as produced
//!   by hierarchical Brown clustering. The bit-chain is the root-to-leaf
//!   path ("0101...") and doubles as a coarse-to-fine cluster encoding
//!   when truncated.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::{BitchainLookup, ClusterLookup};

/// Flat word → cluster id table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordClusters {
    clusters: AHashMap<String, u64>,
}

impl WordClusters {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (word, cluster id) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        Self {
            clusters: pairs.into_iter().map(|(w, c)| (w.into(), c)).collect(),
        }
    }

    /// Insert or replace a word's cluster assignment.
    pub fn insert(&mut self, word: impl Into<String>, cluster: u64) {
        self.clusters.insert(word.into(), cluster);
    }

    /// Number of mapped words.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

impl ClusterLookup for WordClusters {
    fn cluster_of(&self, word: &str) -> Option<u64> {
        self.clusters.get(word).copied()
    }
}

/// Entry of a hierarchical cluster table: flat id plus path encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct BrownEntry {
    cluster: u64,
    bitchain: String,
}

/// Word → (cluster id, bit-chain) table from Brown clustering.
///
/// # Example
///
/// ```
/// use token_features::resources::{BrownClusters, ClusterLookup, BitchainLookup};
///
/// let mut clusters = BrownClusters::new();
/// clusters.insert("monday", 17, "0101");
///
/// assert_eq!(clusters.cluster_of("monday"), Some(17));
/// assert_eq!(clusters.bitchain_of("monday"), Some("0101"));
/// assert_eq!(clusters.cluster_of("tuesday"), None);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrownClusters {
    entries: AHashMap<String, BrownEntry>,
}

impl BrownClusters {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (word, cluster id, bit-chain) triples.
    pub fn from_triples<I, S, B>(triples: I) -> Self
    where
        I: IntoIterator<Item = (S, u64, B)>,
        S: Into<String>,
        B: Into<String>,
    {
        Self {
            entries: triples
                .into_iter()
                .map(|(w, c, b)| {
                    (
                        w.into(),
                        BrownEntry {
                            cluster: c,
                            bitchain: b.into(),
                        },
                    )
                })
                .collect(),
        }
    }

    /// Insert or replace a word's cluster assignment.
    pub fn insert(&mut self, word: impl Into<String>, cluster: u64, bitchain: impl Into<String>) {
        self.entries.insert(
            word.into(),
            BrownEntry {
                cluster,
                bitchain: bitchain.into(),
            },
        );
    }

    /// Number of mapped words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ClusterLookup for BrownClusters {
    fn cluster_of(&self, word: &str) -> Option<u64> {
        self.entries.get(word).map(|e| e.cluster)
    }
}

impl BitchainLookup for BrownClusters {
    fn bitchain_of(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(|e| e.bitchain.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_clusters_lookup() {
        let clusters = WordClusters::from_pairs([("berlin", 3), ("paris", 3), ("monday", 9)]);
        assert_eq!(clusters.cluster_of("berlin"), Some(3));
        assert_eq!(clusters.cluster_of("monday"), Some(9));
        assert_eq!(clusters.cluster_of("unseen"), None);
        assert_eq!(clusters.len(), 3);
    }

    #[test]
    fn test_brown_clusters_lookup() {
        let clusters =
            BrownClusters::from_triples([("cat", 4, "00110"), ("dog", 4, "00111")]);
        assert_eq!(clusters.cluster_of("cat"), Some(4));
        assert_eq!(clusters.bitchain_of("dog"), Some("00111"));
        assert_eq!(clusters.bitchain_of("fish"), None);
    }

    #[test]
    fn test_insert_replaces() {
        let mut clusters = WordClusters::new();
        clusters.insert("word", 1);
        clusters.insert("word", 2);
        assert_eq!(clusters.cluster_of("word"), Some(2));
        assert_eq!(clusters.len(), 1);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let clusters = WordClusters::from_pairs([("Berlin", 7)]);
        assert_eq!(clusters.cluster_of("Berlin"), Some(7));
        assert_eq!(clusters.cluster_of("berlin"), None);
    }
}
