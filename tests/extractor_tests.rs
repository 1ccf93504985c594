//! Integration tests for config-driven composition and batching.

use std::sync::Arc;

use token_features::prelude::*;

struct SuffixTagger;

impl PosTagger for SuffixTagger {
    fn tag(&self, words: &[&str]) -> Vec<(String, String)> {
        words
            .iter()
            .map(|w| {
                let tag = if w.ends_with('s') { "VBZ" } else { "NN" };
                (w.to_string(), tag.to_string())
            })
            .collect()
    }
}

struct KeywordTopics;

impl TopicModel for KeywordTopics {
    fn topics(&self, text: &str) -> Vec<(usize, f64)> {
        let mut topics = Vec::new();
        if text.contains("Berlin") {
            topics.push((0, 0.8));
        }
        if text.contains("lives") {
            topics.push((1, 0.1));
        }
        topics
    }
}

fn full_resources() -> Resources {
    Resources::new()
        .with_embedding_clusters(Arc::new(WordClusters::from_pairs([("Berlin", 7)])))
        .with_brown_clusters(Arc::new(BrownClusters::from_triples([(
            "Berlin",
            19,
            "0101",
        )])))
        .with_gazetteer(Arc::new(HashGazetteer::from_words(["Berlin", "John"])))
        .with_unigrams(Arc::new(UnigramTable::from_ranked_words(["the", "in"])))
        .with_tagger(Arc::new(SuffixTagger))
        .with_topic_model(Arc::new(KeywordTopics))
}

#[test]
fn full_feature_set_labels_one_token() {
    let extractor =
        FeatureExtractor::from_config(&FeatureConfig::default(), &full_resources()).unwrap();

    let window = Window::from_words(["John", "lives", "in", "Berlin"]);
    let labels = extractor.convert_window(&window);
    assert_eq!(labels.len(), 4);

    // "Berlin" at index 3: every feature contributes in registration order.
    assert_eq!(
        labels[3],
        vec![
            "swu=1", "l=6", "cD=0", "cP=0", "oD=0", "oP=0", "wp=Aa+", "pf=Ber", "sf=lin",
            "w2v=7", "bc=19", "bcb=0101", "g=1", "ng1=-1", "pos=NN", "lda_0=1",
        ]
    );
}

#[test]
fn unknown_word_gets_sentinels() {
    let extractor =
        FeatureExtractor::from_config(&FeatureConfig::default(), &full_resources()).unwrap();

    let labels = extractor.convert_window(&Window::from_words(["blorp"]));
    let token = &labels[0];
    assert!(token.contains(&"w2v=-1".to_string()));
    assert!(token.contains(&"bc=-1".to_string()));
    assert!(token.contains(&"bcb=".to_string()));
    assert!(token.contains(&"g=0".to_string()));
    assert!(token.contains(&"ng1=-1".to_string()));
}

#[test]
fn topic_labels_respect_threshold_and_context() {
    let extractor = FeatureExtractor::new().with_feature(
        TopicFeature::new(Arc::new(KeywordTopics), 1, 1),
    );

    // "lives" only triggers topic 1 at p=0.1, below the 0.2 default.
    let labels = extractor.convert_window(&Window::from_words(["he", "lives", "alone"]));
    assert!(labels.iter().all(|l| l.is_empty()));

    // "in" at index 2 sees "Berlin" through its right context.
    let labels = extractor.convert_window(&Window::from_words(["John", "is", "in", "Berlin"]));
    assert_eq!(labels[2], vec!["lda_0=1"]);
    // "John" at index 0 does not.
    assert!(labels[0].is_empty());
}

#[test]
fn batch_and_parallel_batch_agree() {
    let extractor =
        FeatureExtractor::from_config(&FeatureConfig::default(), &full_resources()).unwrap();

    let windows: Vec<Window> = (0..200)
        .map(|i| {
            Window::from_words([
                format!("Word{i}"),
                format!("{i}"),
                "Berlin".to_string(),
                "...".to_string(),
            ])
        })
        .collect();

    let serial = extractor.convert_windows(&windows);
    let parallel = extractor.convert_windows_parallel(&windows);
    assert_eq!(serial, parallel);
    assert_eq!(serial.len(), 200);
}

#[test]
fn extractor_output_passes_validation() {
    let extractor =
        FeatureExtractor::from_config(&FeatureConfig::default(), &full_resources()).unwrap();
    let window = Window::from_words(["John", "lives", "in", "Berlin", "."]);
    let output = extractor.convert_window(&window);

    let result = OutputValidator::new().validate("extractor", &window, &output);
    assert!(result.is_valid(), "{:?}", result.errors());
}

#[test]
fn config_knobs_reach_the_features() {
    let config = FeatureConfig::default()
        .with_max_word_length(4)
        .with_affix_length(2)
        .with_bitchain_length(2);
    let extractor = FeatureExtractor::from_config(&config, &full_resources()).unwrap();

    let labels = extractor.convert_window(&Window::from_words(["Berlin"]));
    let token = &labels[0];
    assert!(token.contains(&"l=4".to_string()));
    assert!(token.contains(&"pf=Be".to_string()));
    assert!(token.contains(&"sf=in".to_string()));
    assert!(token.contains(&"bcb=01".to_string()));
}

#[test]
fn missing_resources_shrink_the_feature_set() {
    let some = Resources::new().with_gazetteer(Arc::new(HashGazetteer::new()));
    let extractor = FeatureExtractor::from_config(&FeatureConfig::default(), &some).unwrap();

    let names = extractor.feature_names();
    assert!(names.contains(&"gazetteer"));
    assert!(!names.contains(&"pos_tag"));
    assert!(!names.contains(&"topics"));
    assert!(!names.contains(&"brown_cluster"));
}

#[test]
fn invalid_config_is_rejected_before_assembly() {
    let config = FeatureConfig::default().with_bitchain_length(0);
    let err = FeatureExtractor::from_config(&config, &Resources::new()).unwrap_err();
    assert_eq!(err.to_string(), "config field `bitchain_length` must be at least 1");
}
