//! # cardvec
//!
//! A vectorization pipeline for trading-card corpora.
//!
//! cardvec ingests a large JSON corpus of card records, deduplicates them by
//! meta identifier, discovers a dynamic categorical feature schema from the
//! full corpus, and encodes every record into a fixed-width numeric input
//! vector plus an output label vector sized by a configured archetype
//! taxonomy. Encoding fans out across a bounded worker pool and reassembles
//! deterministically in original record order.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cardvec --source cards.json --config config.json --output vectors.json
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use cardvec::prelude::*;
//! use std::path::Path;
//!
//! let config = PipelineConfig::from_file(Path::new("config.json"))?;
//! let report = run_import(Path::new("cards.json"), &config)?;
//! for card in &report.cards {
//!     let input = card.input.as_ref().unwrap();
//!     assert_eq!(input.labels().len(), input.values().len());
//! }
//! # Ok::<(), cardvec::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! cardvec is composed of several crates:
//!
//! - [`cardvec-core`](https://docs.rs/cardvec-core) - Entity and vector types (CardRecord, FeatureVector, Error)
//! - [`cardvec-ingest`](https://docs.rs/cardvec-ingest) - Source parsing, coercion, deduplication
//! - [`cardvec-schema`](https://docs.rs/cardvec-schema) - Vocabulary discovery and the label taxonomy
//! - [`cardvec-pipeline`](https://docs.rs/cardvec-pipeline) - Parallel encoding and orchestration

// Re-export core types
pub use cardvec_core::{CardRecord, Error, FeatureVector, Result};

// Re-export ingestion
pub use cardvec_ingest::{load_cards, NormalizeReport};

// Re-export schema
pub use cardvec_schema::{LabelSchema, VocabularyBuilder, VocabularySet, NUMERIC_FIELDS};

// Re-export pipeline
pub use cardvec_pipeline::{run_import, Encoder, ImportReport, PipelineConfig, WorkerPool};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        run_import, CardRecord, Encoder, Error, FeatureVector, ImportReport, LabelSchema,
        PipelineConfig, Result, VocabularySet, WorkerPool,
    };
}
