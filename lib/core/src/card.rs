use crate::vector::FeatureVector;
use serde::{Deserialize, Serialize};

/// A normalized card entity.
///
/// Created once by the ingest layer, mutated exactly once by the encoder
/// (vector attachment), then handed off read-only to persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardRecord {
    /// Deduplication key across printings. Always non-empty.
    pub mcm_meta_id: String,
    pub name: String,
    /// Color codes in source order (e.g. `["W", "U"]`).
    pub colors: Vec<String>,
    /// Mana cost notation with delimiter braces stripped.
    pub mana_cost: String,
    /// 0 when the source value fails integer coercion.
    pub converted_mana_cost: i64,
    pub card_types: Vec<String>,
    pub subtypes: Vec<String>,
    pub supertypes: Vec<String>,
    /// Free rules text. Primary text field, falling back to the secondary;
    /// never absent.
    pub text: String,
    pub power: i64,
    pub toughness: i64,
    pub mtg_arena_id: i64,
    pub tcgplayer_link: String,
    pub cardmarket_link: String,
    /// Input feature vector, attached by the encoder.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub input: Option<FeatureVector>,
    /// Output label vector, attached by the encoder.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub output: Option<FeatureVector>,
}

impl CardRecord {
    /// Attach the encoded input/output vectors. Called once per record by
    /// the pipeline after parallel encoding completes.
    pub fn attach_vectors(&mut self, input: FeatureVector, output: FeatureVector) {
        self.input = Some(input);
        self.output = Some(output);
    }

    #[inline]
    #[must_use]
    pub fn has_vectors(&self) -> bool {
        self.input.is_some() && self.output.is_some()
    }
}
