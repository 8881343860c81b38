//! Vocabulary discovery over the normalized corpus.
//!
//! Discovery is split into a pure per-record `observe` step and a
//! commutative `merge`, so the scan can be partitioned across workers in any
//! way and still freeze into identical vocabularies.

use ahash::{AHashMap, AHashSet};
use cardvec_core::CardRecord;
use serde::{Deserialize, Serialize};

/// Tokenize free text into lowercase word tokens.
///
/// A token is a maximal run of word characters (alphanumeric or `_`),
/// the same word-boundary rule the corpus's texts were mined with.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accumulates categorical tokens and word counts from a subset of records.
#[derive(Debug, Clone, Default)]
pub struct VocabularyBuilder {
    colors: AHashSet<String>,
    card_types: AHashSet<String>,
    supertypes: AHashSet<String>,
    subtypes: AHashSet<String>,
    word_counts: AHashMap<String, u64>,
}

impl VocabularyBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record in. Pure with respect to everything but `self`; a
    /// record with empty text contributes nothing to the word counts.
    pub fn observe(&mut self, card: &CardRecord) {
        self.colors.extend(card.colors.iter().cloned());
        self.card_types.extend(card.card_types.iter().cloned());
        self.supertypes.extend(card.supertypes.iter().cloned());
        self.subtypes.extend(card.subtypes.iter().cloned());
        for word in tokenize(&card.text) {
            *self.word_counts.entry(word).or_insert(0) += 1;
        }
    }

    /// Merge another builder in. Set union and count addition are
    /// commutative and associative, so reduction order does not matter.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.colors.extend(other.colors);
        self.card_types.extend(other.card_types);
        self.supertypes.extend(other.supertypes);
        self.subtypes.extend(other.subtypes);
        for (word, count) in other.word_counts {
            *self.word_counts.entry(word).or_insert(0) += count;
        }
        self
    }

    /// Freeze into sorted, read-only vocabularies.
    ///
    /// Frequent words are those counted more than once corpus-wide. Sorting
    /// makes feature order a pure function of corpus content, independent of
    /// how the scan was partitioned.
    #[must_use]
    pub fn finish(self) -> VocabularySet {
        let sorted = |set: AHashSet<String>| {
            let mut items: Vec<String> = set.into_iter().collect();
            items.sort_unstable();
            items
        };

        let mut frequent_words: Vec<String> = self
            .word_counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(word, _)| word)
            .collect();
        frequent_words.sort_unstable();

        VocabularySet {
            colors: sorted(self.colors),
            card_types: sorted(self.card_types),
            supertypes: sorted(self.supertypes),
            subtypes: sorted(self.subtypes),
            frequent_words,
        }
    }
}

/// The frozen corpus vocabularies.
///
/// Built once per pipeline run and shared read-only with every encoder
/// worker; nothing mutates it after [`VocabularyBuilder::finish`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabularySet {
    pub colors: Vec<String>,
    pub card_types: Vec<String>,
    pub supertypes: Vec<String>,
    pub subtypes: Vec<String>,
    pub frequent_words: Vec<String>,
}

impl VocabularySet {
    /// Number of categorical features these vocabularies will produce.
    #[inline]
    #[must_use]
    pub fn feature_width(&self) -> usize {
        self.colors.len()
            + self.card_types.len()
            + self.supertypes.len()
            + self.subtypes.len()
            + self.frequent_words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.feature_width() == 0
    }
}
