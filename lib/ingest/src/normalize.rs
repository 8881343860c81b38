//! Record normalization: coercion, deduplication, skip accounting.

use crate::source::{RawCard, SourceDocument};
use ahash::AHashSet;
use cardvec_core::{CardRecord, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

/// Outcome of normalizing one source document.
#[derive(Debug, Default)]
pub struct NormalizeReport {
    /// Normalized entities in source-document order.
    pub cards: Vec<CardRecord>,
    /// Records rejected for a missing/unusable meta identifier or a
    /// malformed structure.
    pub skipped: usize,
    /// Records silently dropped because an earlier record already claimed
    /// their meta identifier.
    pub duplicates: usize,
}

/// Best-effort integer coercion.
///
/// JSON numbers are truncated toward zero, integer strings parsed; anything
/// else becomes 0. Never an error, matching the corpus's mixed typing
/// (`"power": "4"` next to `"power": "x"` or `"convertedManaCost": 7.0`).
#[must_use]
pub fn best_effort_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

/// Strip mana-cost delimiter braces: `"{5}{W}{W}"` -> `"5WW"`.
#[must_use]
pub fn normalize_mana_cost(value: &str) -> String {
    value.replace(['{', '}'], "")
}

/// The meta identifier as a non-empty string, if the record has one.
fn meta_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Primary free-text field, falling back to the secondary. Always a string.
fn card_text(raw: &RawCard) -> String {
    match &raw.original_text {
        Value::String(s) if !s.is_empty() => s.clone(),
        _ => match &raw.text {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        },
    }
}

fn normalize_card(raw: RawCard, id: String) -> CardRecord {
    let text = card_text(&raw);
    CardRecord {
        mcm_meta_id: id,
        name: raw.name,
        colors: raw.colors,
        mana_cost: normalize_mana_cost(&raw.mana_cost),
        converted_mana_cost: best_effort_int(&raw.converted_mana_cost),
        card_types: raw.types,
        subtypes: raw.subtypes,
        supertypes: raw.supertypes,
        text,
        power: best_effort_int(&raw.power),
        toughness: best_effort_int(&raw.toughness),
        mtg_arena_id: best_effort_int(&raw.identifiers.mtg_arena_id),
        tcgplayer_link: raw.links.tcgplayer,
        cardmarket_link: raw.links.cardmarket,
        input: None,
        output: None,
    }
}

/// Normalize every card in the document, deduplicating by meta identifier
/// (first occurrence wins). Malformed records are skipped and logged; the
/// batch never aborts on a single record.
#[must_use]
pub fn normalize_document(doc: SourceDocument) -> NormalizeReport {
    let mut report = NormalizeReport::default();
    let mut seen: AHashSet<String> = AHashSet::new();

    for (set_key, set_value) in doc.data {
        let cards = match set_value.get("cards").and_then(Value::as_array) {
            Some(cards) => cards,
            None => {
                warn!(set = %set_key, "set entry has no cards array, skipping set");
                continue;
            }
        };

        for card_value in cards {
            let raw = match RawCard::deserialize(card_value) {
                Ok(raw) => raw,
                Err(err) => {
                    warn!(record = %card_value, error = %err, "could not parse card record, skipping");
                    report.skipped += 1;
                    continue;
                }
            };

            let Some(id) = meta_id(&raw.identifiers.mcm_meta_id) else {
                warn!(record = %card_value, "card record has no usable mcmMetaId, skipping");
                report.skipped += 1;
                continue;
            };

            if !seen.insert(id.clone()) {
                report.duplicates += 1;
                continue;
            }

            report.cards.push(normalize_card(raw, id));
        }
    }

    report
}

/// Read and normalize the source corpus at `path`.
///
/// Fatal only when the file itself is unreadable; see
/// [`crate::source::read_source_document`].
pub fn load_cards(path: &Path) -> Result<NormalizeReport> {
    let doc = crate::source::read_source_document(path)?;
    let report = normalize_document(doc);
    info!(
        path = %path.display(),
        found = report.cards.len(),
        skipped = report.skipped,
        duplicates = report.duplicates,
        "normalized source corpus"
    );
    Ok(report)
}
