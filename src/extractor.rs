//! Feature composition and batch extraction.
//!
//! A [`FeatureExtractor`] owns an ordered list of features and runs all
//! of them over a window, concatenating the per-token label lists in
//! feature order. That concatenated list — one per token — is exactly
//! what a downstream sequence classifier consumes.
//!
//! Because every feature is a pure function of its window, batches of
//! windows parallelize trivially: [`FeatureExtractor::convert_windows_parallel`]
//! fans windows out over rayon's thread pool with no locking and no
//! per-thread setup.
//!
//! # Example
//!
//! ```
//! use token_features::extractor::FeatureExtractor;
//! use token_features::features::{StartsWithUppercaseFeature, TokenLengthFeature};
//! use token_features::window::Window;
//!
//! let extractor = FeatureExtractor::new()
//!     .with_feature(StartsWithUppercaseFeature::new())
//!     .with_feature(TokenLengthFeature::new());
//!
//! let labels = extractor.convert_window(&Window::from_words(["Berlin"]));
//! assert_eq!(labels[0], vec!["swu=1".to_string(), "l=6".to_string()]);
//! ```

use std::sync::Arc;

use rayon::prelude::*;

use crate::config::{ConfigError, FeatureConfig};
use crate::features::{
    BrownBitchainFeature, BrownClusterFeature, ContainsDigitsFeature, ContainsPunctuationFeature,
    EmbeddingClusterFeature, GazetteerFeature, OnlyDigitsFeature, OnlyPunctuationFeature,
    PosTagFeature, PrefixFeature, StartsWithUppercaseFeature, SuffixFeature, TokenLabels,
    TokenLengthFeature, TopicFeature, UnigramRankFeature, WindowFeature, WordPatternFeature,
};
use crate::resources::{
    BitchainLookup, ClusterLookup, GazetteerLookup, PosTagger, RankLookup, TopicModel,
};
use crate::window::Window;

/// Shared handles to whichever lookup resources are available.
///
/// Every handle is optional: the standard feature set simply skips
/// features whose resource is absent, so a deployment without a topic
/// model or gazetteer still gets the full surface-shape set.
#[derive(Clone, Default)]
pub struct Resources {
    /// Embedding-space clustering (k-means over word vectors).
    pub embedding_clusters: Option<Arc<dyn ClusterLookup>>,

    /// Brown clustering, flat ids.
    pub brown_clusters: Option<Arc<dyn ClusterLookup>>,

    /// Brown clustering, hierarchical bit-chains.
    pub brown_bitchains: Option<Arc<dyn BitchainLookup>>,

    /// Known-name gazetteer.
    pub gazetteer: Option<Arc<dyn GazetteerLookup>>,

    /// Corpus unigram rank table.
    pub unigrams: Option<Arc<dyn RankLookup>>,

    /// Part-of-speech tagger.
    pub tagger: Option<Arc<dyn PosTagger>>,

    /// Topic model.
    pub topic_model: Option<Arc<dyn TopicModel>>,
}

impl Resources {
    /// Create an empty resource set (surface-shape features only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an embedding clustering.
    pub fn with_embedding_clusters(mut self, clusters: Arc<dyn ClusterLookup>) -> Self {
        self.embedding_clusters = Some(clusters);
        self
    }

    /// Attach a Brown clustering, wiring both the flat-id and the
    /// bit-chain lookups from one table.
    pub fn with_brown_clusters<T>(mut self, clusters: Arc<T>) -> Self
    where
        T: ClusterLookup + BitchainLookup + 'static,
    {
        self.brown_clusters = Some(clusters.clone());
        self.brown_bitchains = Some(clusters);
        self
    }

    /// Attach a gazetteer.
    pub fn with_gazetteer(mut self, gazetteer: Arc<dyn GazetteerLookup>) -> Self {
        self.gazetteer = Some(gazetteer);
        self
    }

    /// Attach a unigram rank table.
    pub fn with_unigrams(mut self, unigrams: Arc<dyn RankLookup>) -> Self {
        self.unigrams = Some(unigrams);
        self
    }

    /// Attach a part-of-speech tagger.
    pub fn with_tagger(mut self, tagger: Arc<dyn PosTagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    /// Attach a topic model.
    pub fn with_topic_model(mut self, model: Arc<dyn TopicModel>) -> Self {
        self.topic_model = Some(model);
        self
    }
}

/// An ordered collection of features applied window by window.
///
/// Feature order is registration order and determines label order in
/// the concatenated output — keep it stable between training and
/// inference.
#[derive(Default)]
pub struct FeatureExtractor {
    features: Vec<Box<dyn WindowFeature>>,
}

impl std::fmt::Debug for FeatureExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureExtractor")
            .field(
                "features",
                &self.features.iter().map(|feat| feat.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl FeatureExtractor {
    /// Create an empty extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a feature (builder form).
    pub fn with_feature(mut self, feature: impl WindowFeature + 'static) -> Self {
        self.features.push(Box::new(feature));
        self
    }

    /// Append an already-boxed feature.
    pub fn push(&mut self, feature: Box<dyn WindowFeature>) {
        self.features.push(feature);
    }

    /// Build the standard feature set from a config and the available
    /// resources.
    ///
    /// Surface-shape features are always included; each lookup or
    /// model-derived feature is included iff its resource handle is
    /// present. The resulting order is fixed: shape, pattern, affixes,
    /// then lookups, then tagger and topics.
    pub fn from_config(config: &FeatureConfig, resources: &Resources) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut extractor = Self::new()
            .with_feature(StartsWithUppercaseFeature::new())
            .with_feature(TokenLengthFeature::new().with_max_length(config.max_word_length))
            .with_feature(ContainsDigitsFeature::new())
            .with_feature(ContainsPunctuationFeature::new())
            .with_feature(OnlyDigitsFeature::new())
            .with_feature(OnlyPunctuationFeature::new())
            .with_feature(WordPatternFeature::new().with_max_length(config.pattern_max_length))
            .with_feature(PrefixFeature::new().with_affix_length(config.affix_length))
            .with_feature(SuffixFeature::new().with_affix_length(config.affix_length));

        if let Some(clusters) = &resources.embedding_clusters {
            extractor.push(Box::new(EmbeddingClusterFeature::new(clusters.clone())));
        }
        if let Some(clusters) = &resources.brown_clusters {
            extractor.push(Box::new(BrownClusterFeature::new(clusters.clone())));
        }
        if let Some(bitchains) = &resources.brown_bitchains {
            extractor.push(Box::new(
                BrownBitchainFeature::new(bitchains.clone())
                    .with_prefix_length(config.bitchain_length),
            ));
        }
        if let Some(gazetteer) = &resources.gazetteer {
            extractor.push(Box::new(GazetteerFeature::new(gazetteer.clone())));
        }
        if let Some(unigrams) = &resources.unigrams {
            extractor.push(Box::new(UnigramRankFeature::new(unigrams.clone())));
        }
        if let Some(tagger) = &resources.tagger {
            extractor.push(Box::new(PosTagFeature::new(tagger.clone())));
        }
        if let Some(model) = &resources.topic_model {
            extractor.push(Box::new(
                TopicFeature::new(
                    model.clone(),
                    config.topic_window_left,
                    config.topic_window_right,
                )
                .with_threshold(config.topic_threshold),
            ));
        }

        Ok(extractor)
    }

    /// Number of registered features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether no features are registered.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Names of the registered features, in application order.
    pub fn feature_names(&self) -> Vec<&'static str> {
        self.features.iter().map(|f| f.name()).collect()
    }

    /// Run every feature over the window and concatenate the per-token
    /// label lists in feature order.
    ///
    /// Output length equals `window.len()`; the i-th entry holds every
    /// label describing token i, ordered by feature registration order
    /// and, within one feature, by that feature's own label order.
    pub fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        let mut combined: Vec<TokenLabels> = vec![Vec::new(); window.len()];
        for feature in &self.features {
            let output = feature.convert_window(window);
            debug_assert_eq!(
                output.len(),
                window.len(),
                "feature `{}` broke the per-token output contract",
                feature.name()
            );
            for (labels, mut feature_labels) in combined.iter_mut().zip(output) {
                labels.append(&mut feature_labels);
            }
        }
        combined
    }

    /// Convert a batch of windows serially.
    pub fn convert_windows(&self, windows: &[Window]) -> Vec<Vec<TokenLabels>> {
        windows.iter().map(|w| self.convert_window(w)).collect()
    }

    /// Convert a batch of windows in parallel.
    ///
    /// Windows are distributed over rayon's global thread pool. Safe by
    /// construction: features are `Send + Sync` and hold read-only
    /// state, so no coordination is needed. Output order matches input
    /// order.
    pub fn convert_windows_parallel(&self, windows: &[Window]) -> Vec<Vec<TokenLabels>> {
        windows
            .par_iter()
            .map(|w| self.convert_window(w))
            .collect()
    }
}
