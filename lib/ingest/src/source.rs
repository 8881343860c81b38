//! Loosely-typed source document parsing.
//!
//! The source corpus is a single JSON document shaped as
//! `{"data": {<set-key>: {"cards": [<card-record>, ...]}, ...}}` where each
//! card record is an open mapping with optional, weakly-typed fields. Parsing
//! keeps the weak spots (`power`, `convertedManaCost`, identifiers) as raw
//! [`Value`]s so a single malformed field never rejects the whole file.

use cardvec_core::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Top-level source document.
///
/// `data` preserves the document's set order (`serde_json/preserve_order`)
/// so first-occurrence deduplication is well defined.
#[derive(Debug, Deserialize)]
pub struct SourceDocument {
    pub data: serde_json::Map<String, Value>,
}

/// A raw card record. Fields expected to be numeric stay as [`Value`] and go
/// through best-effort coercion during normalization.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawCard {
    pub name: String,
    pub colors: Vec<String>,
    #[serde(rename = "convertedManaCost")]
    pub converted_mana_cost: Value,
    #[serde(rename = "manaCost")]
    pub mana_cost: String,
    pub types: Vec<String>,
    pub power: Value,
    pub toughness: Value,
    #[serde(rename = "originalText")]
    pub original_text: Value,
    pub text: Value,
    pub subtypes: Vec<String>,
    pub supertypes: Vec<String>,
    pub identifiers: RawIdentifiers,
    pub links: RawLinks,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawIdentifiers {
    #[serde(rename = "mcmMetaId")]
    pub mcm_meta_id: Value,
    #[serde(rename = "mtgArenaId")]
    pub mtg_arena_id: Value,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawLinks {
    pub tcgplayer: String,
    pub cardmarket: String,
}

/// Read and parse the source corpus.
///
/// A missing, empty, or non-JSON file is fatal for the whole import; the
/// distinct error kinds let the caller report which failure it was.
pub fn read_source_document(path: &Path) -> Result<SourceDocument> {
    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Err(Error::EmptySource(path.to_path_buf()));
    }
    serde_json::from_str(&raw).map_err(|err| Error::json(path, err))
}
