// infogain-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for running the whole information gain pipeline in one
//! call (non-CLI): resolve the schema, load the dataset, evaluate every split.

use anyhow::{Context, Result};

use crate::config::GainConfig;
use crate::dataset::Dataset;
use crate::gain::{evaluate_splits, SplitReport};

/// Loads the dataset described by `config` and evaluates its splits in order.
///
/// # Arguments
///
/// * `config` - The merged GainConfig (defaults + optional user overrides).
pub fn headless_information_gain(config: &GainConfig) -> Result<Vec<SplitReport>> {
    let schema = config.schema().context("Failed to resolve dataset schema")?;
    let dataset = Dataset::load(&schema)
        .with_context(|| format!("Failed to load dataset {}", schema.path.display()))?;
    let reports = evaluate_splits(&dataset, &config.splits).context("Failed to evaluate splits")?;
    Ok(reports)
}
