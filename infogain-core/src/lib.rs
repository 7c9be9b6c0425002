// infogain-core/src/lib.rs
//! # infogain Core Library
//!
//! `infogain-core` provides the platform-independent logic for measuring how
//! well a candidate split separates a binary-labeled dataset. It loads a small
//! CSV table, partitions rows by a categorical value or a numeric threshold,
//! and reports the entropy reduction (information gain) of each split.
//!
//! The entropy formulas themselves live in the `no_std` crate
//! `infogain-entropy`; this crate adds the dataset model, configuration, and
//! error reporting on top.
//!
//! ## Modules
//!
//! * `config`: Dataset schema and candidate split list, loaded from YAML and merged with defaults.
//! * `dataset`: The in-memory table and its CSV loader.
//! * `split`: Split candidates and two-way partitioning.
//! * `gain`: Parent entropy, child entropy, and per-split reports.
//! * `headless`: One-shot wrapper for non-interactive use.
//! * `errors`: The library error type.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use infogain_core::{headless_information_gain, GainConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = GainConfig::load_default()?;
//!     for report in headless_information_gain(&config)? {
//!         println!("{}\t: {:.4}", report.split.label(), report.information_gain);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`InfogainError`]. Invalid distributions, empty
//! partitions, and missing files are all fatal; nothing is retried.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod dataset;
pub mod errors;
pub mod gain;
pub mod headless;
pub mod split;

/// Re-exports the configuration types and functions.
pub use config::{merge_config, DatasetConfig, DatasetSchema, GainConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::InfogainError;

/// Re-exports the dataset model.
pub use dataset::{Dataset, LabelCounts, Row};

/// Re-exports split candidates and partitioning.
pub use split::{partition, ParseSplitError, Partition, SplitCandidate};

/// Re-exports the information gain pipeline.
pub use gain::{
    best_split, child_entropy, evaluate_split, evaluate_splits, information_gain, parent_entropy,
    SplitReport,
};

pub use headless::headless_information_gain;

/// Re-exports the raw entropy formulas for callers that only need the math.
pub use infogain_entropy::{activation::sigmoid, binary_entropy, entropy, simple_entropy, Bits};
