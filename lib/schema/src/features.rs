//! Static numeric-feature resolver table.

use cardvec_core::CardRecord;

/// Extraction function for one numeric feature.
pub type NumericResolver = fn(&CardRecord) -> i64;

/// Numeric features in encoding order.
///
/// A static table of typed resolvers instead of name-keyed attribute lookup,
/// so every numeric label is guaranteed an extractor at compile time.
pub const NUMERIC_FIELDS: &[(&str, NumericResolver)] = &[
    ("input_cost", |card| card.converted_mana_cost),
    ("input_power", |card| card.power),
    ("input_toughness", |card| card.toughness),
];
