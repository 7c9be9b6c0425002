//! Configuration management for `infogain-core`.
//!
//! This module defines the dataset schema and the list of candidate splits.
//! It handles deserialization of YAML configurations and provides utilities
//! for loading, merging, and validating these configs.
//!
//! License: MIT OR Apache-2.0

use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::InfogainError;
use crate::split::SplitCandidate;

/// Fully resolved description of where the dataset lives and which columns to use.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DatasetSchema {
    /// Path of the CSV file, relative to the working directory unless absolute.
    pub path: PathBuf,
    /// Header of the label column.
    pub label_column: String,
    /// Label value counted as the positive outcome; every other value is negative.
    pub positive_label: String,
    /// Header of the categorical attribute column.
    pub categorical_column: String,
    /// Header of the numeric attribute column.
    pub numeric_column: String,
}

impl Default for DatasetSchema {
    /// The bug classification schema: Mobug vs Lobug by color and length.
    fn default() -> Self {
        Self {
            path: PathBuf::from("ml-bugs.csv"),
            label_column: "Species".to_string(),
            positive_label: "Mobug".to_string(),
            categorical_column: "Color".to_string(),
            numeric_column: "Length (mm)".to_string(),
        }
    }
}

/// The `dataset` section as written in YAML. Unset fields are filled from the
/// defaults during [`merge_config`].
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub path: Option<PathBuf>,
    pub label_column: Option<String>,
    pub positive_label: Option<String>,
    pub categorical_column: Option<String>,
    pub numeric_column: Option<String>,
}

/// Represents the top-level configuration structure for infogain.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GainConfig {
    /// Where to read the data and which columns to use.
    pub dataset: DatasetConfig,
    /// Candidate splits, evaluated and reported in this order.
    pub splits: Vec<SplitCandidate>,
}

impl GainConfig {
    /// Loads a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, InfogainError> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => InfogainError::MissingFile(path.to_path_buf()),
            _ => InfogainError::IoError(e),
        })?;
        let config: GainConfig = serde_yml::from_str(&text)?;

        config.validate()?;
        info!("Loaded {} splits from file {}.", config.splits.len(), path.display());

        Ok(config)
    }

    /// Loads the default configuration from the embedded YAML.
    pub fn load_default() -> Result<Self, InfogainError> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: GainConfig = serde_yml::from_str(default_yaml)?;

        debug!("Loaded {} default splits.", config.splits.len());
        Ok(config)
    }

    /// Resolves the dataset section into a complete schema.
    pub fn schema(&self) -> Result<DatasetSchema, InfogainError> {
        fn required<T: Clone>(value: &Option<T>, field: &str) -> Result<T, InfogainError> {
            value
                .clone()
                .ok_or_else(|| InfogainError::InvalidConfig(format!("dataset.{} is not set", field)))
        }

        let ds = &self.dataset;
        let schema = DatasetSchema {
            path: required(&ds.path, "path")?,
            label_column: required(&ds.label_column, "label_column")?,
            positive_label: required(&ds.positive_label, "positive_label")?,
            categorical_column: required(&ds.categorical_column, "categorical_column")?,
            numeric_column: required(&ds.numeric_column, "numeric_column")?,
        };
        self.validate()?;
        Ok(schema)
    }

    /// Checks the fields that are present. Missing fields are not an error here.
    pub fn validate(&self) -> Result<(), InfogainError> {
        let mut errors = Vec::new();
        let ds = &self.dataset;

        for (field, value) in [
            ("label_column", &ds.label_column),
            ("positive_label", &ds.positive_label),
            ("categorical_column", &ds.categorical_column),
            ("numeric_column", &ds.numeric_column),
        ] {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                errors.push(format!("dataset.{} is empty.", field));
            }
        }
        if matches!(&ds.path, Some(p) if p.as_os_str().is_empty()) {
            errors.push("dataset.path is empty.".to_string());
        }

        for (i, split) in self.splits.iter().enumerate() {
            match split {
                SplitCandidate::Categorical(value) if value.trim().is_empty() => {
                    errors.push(format!("Split #{} has an empty category.", i + 1));
                }
                SplitCandidate::Threshold(t) if !t.is_finite() => {
                    errors.push(format!("Split #{} has a non-finite threshold.", i + 1));
                }
                _ => {}
            }
            if self.splits[..i].contains(split) {
                errors.push(format!("Duplicate split found: '{}'.", split.label()));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(InfogainError::InvalidConfig(errors.join("\n")))
        }
    }
}

/// Merges a user-defined configuration over the defaults.
///
/// Dataset fields set by the user win. A non-empty user split list replaces
/// the default list entirely.
pub fn merge_config(default_config: GainConfig, user_config: Option<GainConfig>) -> GainConfig {
    let mut merged = default_config;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging dataset settings and {} splits.", user_cfg.splits.len());
        let user_ds = user_cfg.dataset;

        if let Some(path) = user_ds.path {
            debug!("Overriding dataset path with user value: {}", path.display());
            merged.dataset.path = Some(path);
        }
        if let Some(label_column) = user_ds.label_column {
            merged.dataset.label_column = Some(label_column);
        }
        if let Some(positive_label) = user_ds.positive_label {
            debug!("Overriding positive label with user value: {}", positive_label);
            merged.dataset.positive_label = Some(positive_label);
        }
        if let Some(categorical_column) = user_ds.categorical_column {
            merged.dataset.categorical_column = Some(categorical_column);
        }
        if let Some(numeric_column) = user_ds.numeric_column {
            merged.dataset.numeric_column = Some(numeric_column);
        }

        if !user_cfg.splits.is_empty() {
            merged.splits = user_cfg.splits;
        }
    }

    debug!("Final split count after merge: {}", merged.splits.len());
    merged
}
