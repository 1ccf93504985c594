//! Part-of-speech tag feature.

use std::sync::Arc;

use super::{TokenLabels, WindowFeature};
use crate::resources::PosTagger;
use crate::window::Window;

/// Emits `pos=<tag>` for every token.
///
/// The whole window is tagged in a single collaborator call rather than
/// word by word — taggers need sentence context to disambiguate, and
/// one call per window bounds invocation cost. The tagger contract
/// guarantees one `(word, tag)` pair per input word in input order;
/// this feature emits positionally and does not re-align.
#[derive(Clone)]
pub struct PosTagFeature {
    tagger: Arc<dyn PosTagger>,
}

impl PosTagFeature {
    pub fn new(tagger: Arc<dyn PosTagger>) -> Self {
        Self { tagger }
    }
}

impl WindowFeature for PosTagFeature {
    fn name(&self) -> &'static str {
        "pos_tag"
    }

    fn convert_window(&self, window: &Window) -> Vec<TokenLabels> {
        if window.is_empty() {
            return Vec::new();
        }

        let tagged = self.tagger.tag(&window.words());
        (0..window.len())
            .map(|i| vec![format!("pos={}", tagged[i].1)])
            .collect()
    }
}
