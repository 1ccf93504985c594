//! In-memory gazetteer.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use super::GazetteerLookup;

/// Hash-set backed gazetteer.
///
/// Membership is exact and case-sensitive; if case-insensitive matching
/// is wanted, normalize the word list and the tokens upstream with the
/// same convention.
///
/// # Example
///
/// ```
/// use token_features::resources::{GazetteerLookup, HashGazetteer};
///
/// let gazetteer = HashGazetteer::from_words(["Berlin", "Hamburg"]);
/// assert!(gazetteer.contains("Berlin"));
/// assert!(!gazetteer.contains("berlin"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HashGazetteer {
    words: AHashSet<String>,
}

impl HashGazetteer {
    /// Create an empty gazetteer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a gazetteer from a word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a word.
    pub fn insert(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the gazetteer is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl GazetteerLookup for HashGazetteer {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let gazetteer = HashGazetteer::from_words(["John", "Mary"]);
        assert!(gazetteer.contains("John"));
        assert!(!gazetteer.contains("Johnny"));
        assert_eq!(gazetteer.len(), 2);
    }

    #[test]
    fn test_insert() {
        let mut gazetteer = HashGazetteer::new();
        assert!(gazetteer.is_empty());
        gazetteer.insert("Berlin");
        assert!(gazetteer.contains("Berlin"));
    }
}
