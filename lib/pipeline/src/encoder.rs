//! Per-record vector encoding against frozen vocabularies.

use cardvec_core::{CardRecord, FeatureVector};
use cardvec_schema::{LabelSchema, VocabularySet, NUMERIC_FIELDS};

/// Encodes normalized records into labeled input/output vectors.
///
/// Holds only shared read-only references, so one encoder can be used from
/// any number of workers without locking. Encoding is pure: the same record
/// against the same vocabularies yields bit-identical vectors.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a> {
    vocab: &'a VocabularySet,
    labels: &'a LabelSchema,
}

impl<'a> Encoder<'a> {
    #[must_use]
    pub fn new(vocab: &'a VocabularySet, labels: &'a LabelSchema) -> Self {
        Self { vocab, labels }
    }

    /// Width of the input vectors this encoder produces.
    #[inline]
    #[must_use]
    pub fn input_dim(&self) -> usize {
        NUMERIC_FIELDS.len() + self.vocab.feature_width()
    }

    /// Encode the input feature vector.
    ///
    /// Label order is fixed: numeric fields in table order, then one binary
    /// flag per vocabulary entry for colors, card types, supertypes,
    /// subtypes, and finally frequent words.
    #[must_use]
    pub fn encode_input(&self, card: &CardRecord) -> FeatureVector {
        let mut pairs: Vec<(String, f64)> = Vec::with_capacity(self.input_dim());

        for (label, resolve) in NUMERIC_FIELDS {
            pairs.push(((*label).to_string(), resolve(card) as f64));
        }

        push_flags(&mut pairs, "input_color_", &self.vocab.colors, &card.colors);
        push_flags(
            &mut pairs,
            "input_cardtypes_",
            &self.vocab.card_types,
            &card.card_types,
        );
        push_flags(
            &mut pairs,
            "input_supertypes_",
            &self.vocab.supertypes,
            &card.supertypes,
        );
        push_flags(
            &mut pairs,
            "input_subtypes_",
            &self.vocab.subtypes,
            &card.subtypes,
        );

        // Word flags use literal substring containment against the raw text,
        // looser than the tokenized matching used at discovery time. Output
        // parity with the historical vectors depends on keeping it that way.
        for word in &self.vocab.frequent_words {
            let hit = card.text.contains(word.as_str());
            pairs.push((format!("input_word_{word}"), f64::from(u8::from(hit))));
        }

        FeatureVector::from_pairs(pairs)
    }

    /// All-zero output vector over the schema's ordered archetype labels.
    /// No label is asserted until external annotation happens later.
    #[must_use]
    pub fn encode_output(&self) -> FeatureVector {
        FeatureVector::zeroed(self.labels.output_labels())
    }

    /// Encode both vectors for one record.
    #[must_use]
    pub fn encode(&self, card: &CardRecord) -> (FeatureVector, FeatureVector) {
        (self.encode_input(card), self.encode_output())
    }
}

fn push_flags(
    pairs: &mut Vec<(String, f64)>,
    prefix: &str,
    vocab: &[String],
    present: &[String],
) {
    for entry in vocab {
        let hit = present.iter().any(|value| value == entry);
        pairs.push((format!("{prefix}{entry}"), f64::from(u8::from(hit))));
    }
}
