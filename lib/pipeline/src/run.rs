//! End-to-end import orchestration.

use crate::config::PipelineConfig;
use crate::pool::WorkerPool;
use cardvec_core::{CardRecord, Result};
use cardvec_ingest::NormalizeReport;
use cardvec_schema::VocabularySet;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of a full import run, ready for the persistence collaborator.
#[derive(Debug)]
pub struct ImportReport {
    /// Vectorized entities in original source order.
    pub cards: Vec<CardRecord>,
    /// Structural skips during normalization.
    pub skipped: usize,
    /// Duplicate meta identifiers dropped during normalization.
    pub duplicates: usize,
    /// The frozen vocabularies the vectors were encoded against.
    pub vocabulary: VocabularySet,
}

/// Run the whole pipeline: normalize the source corpus, discover the
/// vocabularies, encode every record in parallel, and attach the vectors
/// back onto the entities in original order.
pub fn run_import(source: &Path, config: &PipelineConfig) -> Result<ImportReport> {
    let NormalizeReport {
        mut cards,
        skipped,
        duplicates,
    } = cardvec_ingest::load_cards(source)?;

    let pool = WorkerPool::new(config.worker_count)?;
    debug!(workers = pool.workers(), "worker pool ready");

    let vocabulary = pool.discover(&cards)?;
    info!(
        colors = vocabulary.colors.len(),
        card_types = vocabulary.card_types.len(),
        supertypes = vocabulary.supertypes.len(),
        subtypes = vocabulary.subtypes.len(),
        frequent_words = vocabulary.frequent_words.len(),
        "discovered corpus vocabularies"
    );

    let vectors = pool.encode_batch(&cards, &vocabulary, &config.labels)?;
    for (card, (input, output)) in cards.iter_mut().zip(vectors) {
        card.attach_vectors(input, output);
    }
    info!(vectorized = cards.len(), skipped, duplicates, "import complete");

    Ok(ImportReport {
        cards,
        skipped,
        duplicates,
        vocabulary,
    })
}
