//! # cardvec Pipeline
//!
//! The parallel vectorization pipeline:
//!
//! - [`PipelineConfig`] - lenient configuration resolution (worker count,
//!   archetype taxonomy)
//! - [`Encoder`] - pure per-record input/output vector encoding
//! - [`WorkerPool`] - explicit-size worker pool with index-keyed, fail-fast
//!   batch reassembly
//! - [`run_import`] - normalize, discover, encode, attach - the whole run

pub mod config;
pub mod encoder;
pub mod pool;
pub mod run;

pub use config::PipelineConfig;
pub use encoder::Encoder;
pub use pool::WorkerPool;
pub use run::{run_import, ImportReport};
