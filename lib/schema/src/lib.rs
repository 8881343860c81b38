//! # cardvec Schema
//!
//! The dynamic feature schema for the cardvec pipeline:
//!
//! - [`VocabularyBuilder`] / [`VocabularySet`] - corpus-wide categorical
//!   vocabularies and frequent-word mining, built with a commutative merge
//!   so discovery can run partitioned
//! - [`LabelSchema`] - the configured archetype taxonomy sizing the output
//!   vector
//! - [`NUMERIC_FIELDS`] - the static resolver table for numeric features

pub mod features;
pub mod labels;
pub mod vocab;

pub use features::{NumericResolver, NUMERIC_FIELDS};
pub use labels::{LabelSchema, OUTPUT_LABEL_PREFIX};
pub use vocab::{tokenize, VocabularyBuilder, VocabularySet};
