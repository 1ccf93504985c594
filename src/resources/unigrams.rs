//! Unigram frequency rank table.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::RankLookup;

/// Word → frequency rank table built from corpus unigram counts.
///
/// Rank 1 is the most frequent word. The table stores ranks, not raw
/// counts — the features only ever consume the rank.
///
/// # Example
///
/// ```
/// use token_features::resources::{RankLookup, UnigramTable};
///
/// // Words ordered most frequent first.
/// let unigrams = UnigramTable::from_ranked_words(["the", "of", "and"]);
/// assert_eq!(unigrams.rank_of("the"), Some(1));
/// assert_eq!(unigrams.rank_of("and"), Some(3));
/// assert_eq!(unigrams.rank_of("zyzzyva"), None);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnigramTable {
    ranks: AHashMap<String, u64>,
}

impl UnigramTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a word list ordered most frequent first.
    ///
    /// Assigns ranks 1..=N in iteration order. A word repeated later in
    /// the list keeps its first (better) rank.
    pub fn from_ranked_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ranks = AHashMap::new();
        for (i, word) in words.into_iter().enumerate() {
            ranks.entry(word.into()).or_insert(i as u64 + 1);
        }
        Self { ranks }
    }

    /// Build a table from explicit (word, rank) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        Self {
            ranks: pairs.into_iter().map(|(w, r)| (w.into(), r)).collect(),
        }
    }

    /// Number of ranked words.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl RankLookup for UnigramTable {
    fn rank_of(&self, word: &str) -> Option<u64> {
        self.ranks.get(word).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_start_at_one() {
        let unigrams = UnigramTable::from_ranked_words(["a", "b", "c"]);
        assert_eq!(unigrams.rank_of("a"), Some(1));
        assert_eq!(unigrams.rank_of("c"), Some(3));
    }

    #[test]
    fn test_duplicate_keeps_first_rank() {
        let unigrams = UnigramTable::from_ranked_words(["the", "of", "the"]);
        assert_eq!(unigrams.rank_of("the"), Some(1));
        assert_eq!(unigrams.len(), 2);
    }

    #[test]
    fn test_from_pairs() {
        let unigrams = UnigramTable::from_pairs([("rare", 90_000u64)]);
        assert_eq!(unigrams.rank_of("rare"), Some(90_000));
        assert_eq!(unigrams.rank_of("missing"), None);
    }
}
