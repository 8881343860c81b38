//! # cardvec Ingest
//!
//! Source-corpus ingestion for the cardvec pipeline: loose JSON parsing of
//! the nested set/card document, best-effort field coercion, meta-identifier
//! deduplication, and skip accounting.
//!
//! A malformed record degrades to "skip + log"; only an unreadable, empty,
//! or non-JSON source file is fatal.

pub mod normalize;
pub mod source;

pub use normalize::{best_effort_int, load_cards, normalize_document, normalize_mana_cost, NormalizeReport};
pub use source::{read_source_document, RawCard, RawIdentifiers, RawLinks, SourceDocument};
