//! Lookup-backed features.
//!
//! Each feature here wraps exactly one read-only resource and maps a
//! token's word to a category through it. Misses never fail — they
//! surface as the sentinel value the downstream model was trained on
//! (`-1` for ids and ranks, an empty value for bit-chains, `0` for
//! non-membership).
//!
//! Resources are injected at construction as shared handles, so one
//! table can back many features across many threads.

use std::sync::Arc;

use super::{TokenLabels, WindowFeature};
use crate::resources::{BitchainLookup, ClusterLookup, GazetteerLookup, RankLookup};
use crate::window::Window;

fn id_label(prefix: &str, id: Option<u64>) -> String {
    match id {
        Some(id) => format!("{prefix}={id}"),
        None => format!("{prefix}=-1"),
    }
}

/// Emits `w2v=<cluster id>` from an embedding-space clustering, or
/// `w2v=-1` for unmapped words.
#[derive(Clone)]
pub struct EmbeddingClusterFeature {
    clusters: Arc<dyn ClusterLookup>,
}

impl EmbeddingClusterFeature {
    pub fn new(clusters: Arc<dyn ClusterLookup>) -> Self {
        Self { clusters }
    }
}

impl WindowFeature for EmbeddingClusterFeature {
    fn name(&self) -> &'static str {
        "embedding_cluster"
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        window
            .iter()
            .map(|token| vec![id_label("w2v", self.clusters.cluster_of(&token.word))])
            .collect()
    }
}

/// Emits `bc=<cluster id>` from a Brown clustering, or `bc=-1` for
/// unmapped words.
#[derive(Clone)]
pub struct BrownClusterFeature {
    clusters: Arc<dyn ClusterLookup>,
}

impl BrownClusterFeature {
    pub fn new(clusters: Arc<dyn ClusterLookup>) -> Self {
        Self { clusters }
    }
}

impl WindowFeature for BrownClusterFeature {
    fn name(&self) -> &'static str {
        "brown_cluster"
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        window
            .iter()
            .map(|token| vec![id_label("bc", self.clusters.cluster_of(&token.word))])
            .collect()
    }
}

/// Emits `bcb=<bit-chain prefix>`: the leading characters of the word's
/// hierarchical cluster path.
///
/// The prefix length (default 7) trades granularity against sparsity —
/// a shorter prefix merges sibling clusters. Chains shorter than the
/// prefix are emitted whole; unmapped words emit an empty value
/// (`bcb=`). No padding either way.
#[derive(Clone)]
pub struct BrownBitchainFeature {
    clusters: Arc<dyn BitchainLookup>,
    prefix_length: usize,
}

impl BrownBitchainFeature {
    /// Create with the default 7-character prefix.
    pub fn new(clusters: Arc<dyn BitchainLookup>) -> Self {
        Self {
            clusters,
            prefix_length: 7,
        }
    }

    /// Override the bit-chain prefix length.
    pub fn with_prefix_length(mut self, prefix_length: usize) -> Self {
        self.prefix_length = prefix_length;
        self
    }
}

impl WindowFeature for BrownBitchainFeature {
    fn name(&self) -> &'static str {
        "brown_bitchain"
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        window
            .iter()
            .map(|token| {
                let chain = self.clusters.bitchain_of(&token.word).unwrap_or("");
                let prefix: String = chain.chars().take(self.prefix_length).collect();
                vec![format!("bcb={prefix}")]
            })
            .collect()
    }
}

/// Emits `g=1` if the word is present in the gazetteer, else `g=0`.
#[derive(Clone)]
pub struct GazetteerFeature {
    gazetteer: Arc<dyn GazetteerLookup>,
}

impl GazetteerFeature {
    pub fn new(gazetteer: Arc<dyn GazetteerLookup>) -> Self {
        Self { gazetteer }
    }
}

impl WindowFeature for GazetteerFeature {
    fn name(&self) -> &'static str {
        "gazetteer"
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        window
            .iter()
            .map(|token| {
                let hit = self.gazetteer.contains(&token.word);
                vec![format!("g={}", u8::from(hit))]
            })
            .collect()
    }
}

/// Emits `ng1=<rank>`: the word's corpus frequency rank, or `ng1=-1`
/// for words absent from the table.
#[derive(Clone)]
pub struct UnigramRankFeature {
    unigrams: Arc<dyn RankLookup>,
}

impl UnigramRankFeature {
    pub fn new(unigrams: Arc<dyn RankLookup>) -> Self {
        Self { unigrams }
    }
}

impl WindowFeature for UnigramRankFeature {
    fn name(&self) -> &'static str {
        "unigram_rank"
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        window
            .iter()
            .map(|token| vec![id_label("ng1", self.unigrams.rank_of(&token.word))])
            .collect()
    }
}
