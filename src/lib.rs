//! Token Feature Extraction
//!
//! Discrete, human-readable categorical features over token context
//! windows, for downstream sequence-labeling models (NER and friends).
//!
//! # Overview
//!
//! The library turns a window of tokens into per-token lists of
//! `"<name>=<value>"` labels. Fourteen independent features cover three
//! techniques:
//!
//! - **Surface shape**: capitalization, length, digit/punctuation
//!   content, normalized word patterns, affixes
//! - **Lookups**: embedding clusters, Brown clusters and bit-chains,
//!   gazetteer membership, unigram frequency rank
//! - **Model-derived**: part-of-speech tags, sparse topic indicators
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Token Features                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  window/     - Token and Window input contract                  │
//! │  resources/  - lookup traits + in-memory tables                 │
//! │  features/   - the 14 feature extractors (one trait, no deps    │
//! │                between features)                                │
//! │  extractor/  - composition, config-driven assembly, batching    │
//! │  validation/ - output contract checks                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use token_features::prelude::*;
//!
//! let resources = Resources::new()
//!     .with_gazetteer(Arc::new(HashGazetteer::from_words(["Berlin"])))
//!     .with_unigrams(Arc::new(UnigramTable::from_ranked_words(["the", "in"])));
//!
//! let extractor = FeatureExtractor::from_config(&FeatureConfig::default(), &resources)?;
//!
//! let window = Window::from_words(["John", "lives", "in", "Berlin"]);
//! let labels = extractor.convert_window(&window);
//!
//! assert_eq!(labels.len(), 4);
//! assert!(labels[3].contains(&"swu=1".to_string()));
//! assert!(labels[3].contains(&"g=1".to_string()));
//! # Ok::<(), token_features::ConfigError>(())
//! ```
//!
//! Tokenization, window construction, numeric feature-vector assembly
//! and the classifier itself live outside this crate; so do the real
//! clustering/tagging/topic models, which plug in behind the traits in
//! [`resources`].

pub mod config;
pub mod extractor;
pub mod features;
pub mod prelude;
pub mod resources;
pub mod validation;
pub mod window;

// Re-exports - Data contract
pub use window::{Token, Window};

// Re-exports - Features
pub use features::{TokenLabels, WindowFeature};

// Re-exports - Composition
pub use config::{ConfigError, FeatureConfig};
pub use extractor::{FeatureExtractor, Resources};

// Re-exports - Resources
pub use resources::{
    BitchainLookup, BrownClusters, ClusterLookup, GazetteerLookup, HashGazetteer, PosTagger,
    RankLookup, TopicModel, UnigramTable, WordClusters,
};

// Re-exports - Validation
pub use validation::{OutputValidator, ValidationLevel, ValidationResult};
