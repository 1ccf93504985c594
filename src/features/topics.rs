//! Topic-distribution feature.

use std::sync::Arc;

use super::{TokenLabels, WindowFeature};
use crate::resources::TopicModel;
use crate::window::Window;

/// Emits `lda_<topic>=1` for every topic whose probability in the
/// token's local context exceeds a threshold.
///
/// For the token at position i the feature builds a sub-window spanning
/// `[i - left, i + right]`, clamped to the window bounds — boundary
/// tokens simply get a smaller span, never padding or wraparound. The
/// sub-window's words are joined with single spaces and handed to the
/// topic model in one call per token.
///
/// Topics at or below the threshold (default 0.2) are dropped, so label
/// lists are variable-length and often empty. That sparsity is the
/// point: only confidently present topics make it into the feature
/// vector.
#[derive(Clone)]
pub struct TopicFeature {
    model: Arc<dyn TopicModel>,
    window_left: usize,
    window_right: usize,
    threshold: f64,
}

impl TopicFeature {
    /// Create with the given context span and the default 0.2 threshold.
    pub fn new(model: Arc<dyn TopicModel>, window_left: usize, window_right: usize) -> Self {
        Self {
            model,
            window_left,
            window_right,
            threshold: 0.2,
        }
    }

    /// Override the probability threshold.
    ///
    /// The comparison is strict: a topic at exactly the threshold is
    /// dropped.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

impl WindowFeature for TopicFeature {
    fn name(&self) -> &'static str {
        "topics"
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        let words = window.words();
        (0..words.len())
            .map(|i| {
                let start = i.saturating_sub(self.window_left);
                let end = (i + self.window_right + 1).min(words.len());
                let text = words[start..end].join(" ");

                self.model
                    .topics(&text)
                    .into_iter()
                    .filter(|(_, prob)| *prob > self.threshold)
                    .map(|(topic, _)| format!("lda_{topic}=1"))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Stub model that records every queried span and returns a fixed
    /// distribution.
    struct RecordingModel {
        distribution: Vec<(usize, f64)>,
        queries: Mutex<Vec<String>>,
    }

    impl RecordingModel {
        fn new(distribution: Vec<(usize, f64)>) -> Self {
            Self {
                distribution,
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    impl TopicModel for RecordingModel {
        fn topics(&self, text: &str) -> Vec<(usize, f64)> {
            self.queries.lock().unwrap().push(text.to_string());
            self.distribution.clone()
        }
    }

    #[test]
    fn test_subwindow_clamped_at_boundaries() {
        let model = Arc::new(RecordingModel::new(vec![]));
        let feature = TopicFeature::new(model.clone(), 1, 1);
        feature.convert_window(&Window::from_words(["a", "b", "c"]));

        let queries = model.queries.lock().unwrap();
        // Index 0 spans [0, 1], index 1 spans [0, 2], index 2 spans [1, 2].
        assert_eq!(*queries, vec!["a b", "a b c", "b c"]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let model = Arc::new(RecordingModel::new(vec![(0, 0.5), (1, 0.2), (2, 0.19)]));
        let feature = TopicFeature::new(model, 1, 1);
        let out = feature.convert_window(&Window::from_words(["word"]));
        // 0.2 sits exactly at the threshold and is dropped.
        assert_eq!(out[0], vec!["lda_0=1"]);
    }

    #[test]
    fn test_empty_distribution_yields_empty_labels() {
        let model = Arc::new(RecordingModel::new(vec![]));
        let feature = TopicFeature::new(model, 2, 2);
        let out = feature.convert_window(&Window::from_words(["a", "b"]));
        assert_eq!(out, vec![Vec::<String>::new(), Vec::new()]);
    }

    #[test]
    fn test_custom_threshold() {
        let model = Arc::new(RecordingModel::new(vec![(3, 0.15)]));
        let feature = TopicFeature::new(model, 1, 1).with_threshold(0.1);
        let out = feature.convert_window(&Window::from_words(["word"]));
        assert_eq!(out[0], vec!["lda_3=1"]);
    }

    #[test]
    fn test_zero_span_uses_single_word() {
        let model = Arc::new(RecordingModel::new(vec![]));
        let feature = TopicFeature::new(model.clone(), 0, 0);
        feature.convert_window(&Window::from_words(["x", "y"]));
        assert_eq!(*model.queries.lock().unwrap(), vec!["x", "y"]);
    }
}
