//! Parallel work coordination.
//!
//! Both the discovery scan and the encode step fan out across a dedicated
//! thread pool with an explicit size. Vocabularies and the label schema are
//! fully built before any encode worker starts and are shared read-only, so
//! workers never contend on state. The coordinator always awaits the whole
//! batch and reassembles results strictly by original position index;
//! completion order is concurrency-induced and never observable in the
//! output.

use crate::encoder::Encoder;
use cardvec_core::{CardRecord, Error, FeatureVector, Result};
use cardvec_schema::{LabelSchema, VocabularyBuilder, VocabularySet};
use rayon::prelude::*;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::debug;

/// A bounded pool of CPU-bound workers with deterministic reassembly.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
    workers: usize,
}

impl WorkerPool {
    /// Build a dedicated pool with an explicit worker count, clamped to at
    /// least 1. The count is a construction parameter on purpose: the hot
    /// path never consults global configuration.
    pub fn new(workers: usize) -> Result<Self> {
        let workers = workers.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("cardvec-worker-{i}"))
            .build()
            .map_err(|err| Error::Worker(err.to_string()))?;
        Ok(Self { pool, workers })
    }

    #[inline]
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Parallel discovery scan.
    ///
    /// Workers fold disjoint contiguous chunks into per-chunk builders which
    /// reduce via the commutative merge; the frozen result is identical for
    /// every worker count.
    pub fn discover(&self, cards: &[CardRecord]) -> Result<VocabularySet> {
        if cards.is_empty() {
            return Ok(VocabularySet::default());
        }

        let chunk_size = cards.len().div_ceil(self.workers);
        debug!(records = cards.len(), chunk_size, "starting discovery scan");
        let builder = self.run(|| {
            cards
                .par_chunks(chunk_size)
                .map(|chunk| {
                    let mut builder = VocabularyBuilder::new();
                    for card in chunk {
                        builder.observe(card);
                    }
                    builder
                })
                .reduce(VocabularyBuilder::new, VocabularyBuilder::merge)
        })?;
        Ok(builder.finish())
    }

    /// Encode every record against the frozen vocabularies.
    ///
    /// Each task carries its record's original position index; the batch is
    /// awaited in full, sorted by that index, and verified complete before
    /// anything is returned. A panicking worker fails the whole batch
    /// (fail-fast) rather than shrinking the output.
    pub fn encode_batch(
        &self,
        cards: &[CardRecord],
        vocab: &VocabularySet,
        labels: &LabelSchema,
    ) -> Result<Vec<(FeatureVector, FeatureVector)>> {
        let expected = cards.len();
        debug!(records = expected, "starting encode batch");

        let mut indexed = self.run(|| {
            let encoder = Encoder::new(vocab, labels);
            cards
                .par_iter()
                .enumerate()
                .map(|(index, card)| (index, encoder.encode(card)))
                .collect::<Vec<_>>()
        })?;

        indexed.sort_unstable_by_key(|(index, _)| *index);
        let complete = indexed.len() == expected
            && indexed.iter().enumerate().all(|(i, (index, _))| i == *index);
        if !complete {
            return Err(Error::IncompleteBatch {
                expected,
                actual: indexed.len(),
            });
        }

        Ok(indexed.into_iter().map(|(_, vectors)| vectors).collect())
    }

    /// Run a job on the pool, converting a worker panic into a batch-level
    /// error.
    fn run<T: Send>(&self, job: impl FnOnce() -> T + Send) -> Result<T> {
        catch_unwind(AssertUnwindSafe(|| self.pool.install(job)))
            .map_err(|payload| Error::Worker(panic_message(payload.as_ref())))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
