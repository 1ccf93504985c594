//! Prelude module for convenient imports.
//!
//! ```
//! use token_features::prelude::*;
//!
//! let config = FeatureConfig::default();
//! let extractor = FeatureExtractor::from_config(&config, &Resources::new()).unwrap();
//! let labels = extractor.convert_window(&Window::from_words(["Berlin"]));
//! assert_eq!(labels.len(), 1);
//! ```

// Data contract
pub use crate::window::{Token, Window};

// Feature contract and composition
pub use crate::config::{ConfigError, FeatureConfig};
pub use crate::extractor::{FeatureExtractor, Resources};
pub use crate::features::{TokenLabels, WindowFeature};

// Concrete features
pub use crate::features::{
    BrownBitchainFeature, BrownClusterFeature, ContainsDigitsFeature, ContainsPunctuationFeature,
    EmbeddingClusterFeature, GazetteerFeature, OnlyDigitsFeature, OnlyPunctuationFeature,
    PosTagFeature, PrefixFeature, StartsWithUppercaseFeature, SuffixFeature, TokenLengthFeature,
    TopicFeature, UnigramRankFeature, WordPatternFeature,
};

// Resources
pub use crate::resources::{
    BitchainLookup, BrownClusters, ClusterLookup, GazetteerLookup, HashGazetteer, PosTagger,
    RankLookup, TopicModel, UnigramTable, WordClusters,
};

// Validation
pub use crate::validation::{OutputValidator, ValidationLevel, ValidationResult};
