//! # cardvec Core
//!
//! Core library for the cardvec vectorization pipeline.
//!
//! This crate provides the fundamental data structures shared by every stage:
//!
//! - [`CardRecord`] - A normalized card entity with attachable vectors
//! - [`FeatureVector`] - Labeled numeric vector under the parallel-length invariant
//! - [`Error`] - The pipeline error taxonomy
//!
//! ## Example
//!
//! ```rust
//! use cardvec_core::FeatureVector;
//!
//! let v = FeatureVector::from_pairs([("input_cost", 3.0), ("input_color_R", 1.0)]);
//! assert_eq!(v.labels().len(), v.values().len());
//! assert_eq!(v.get("input_color_R"), Some(1.0));
//! ```

pub mod card;
pub mod error;
pub mod vector;

pub use card::CardRecord;
pub use error::{Error, Result};
pub use vector::FeatureVector;
