//! errors.rs - Custom error types for the infogain-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;

use infogain_entropy::EntropyError;
use thiserror::Error;

/// This enum represents all possible error types in the `infogain-core` library.
///
/// All of them are fatal for a run; nothing in the pipeline retries.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InfogainError {
    #[error("Invalid distribution: {0}")]
    InvalidDistribution(String),

    #[error("Split '{split}' leaves the {side} partition empty")]
    EmptyPartition { split: String, side: &'static str },

    #[error("Dataset file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Column '{0}' not found in dataset header")]
    MissingColumn(String),

    #[error("Row {row}: value '{value}' in column '{column}' is not a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Row {0} is missing one or more required columns")]
    MalformedRow(usize),

    #[error("Dataset contains no rows")]
    EmptyDataset,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<EntropyError> for InfogainError {
    fn from(err: EntropyError) -> Self {
        match err {
            EntropyError::InvalidDistribution(reason) => {
                InfogainError::InvalidDistribution(reason.to_string())
            }
            EntropyError::EmptyPartition { index } => InfogainError::EmptyPartition {
                split: format!("part #{}", index),
                side: if index == 0 { "matching" } else { "remaining" },
            },
        }
    }
}
