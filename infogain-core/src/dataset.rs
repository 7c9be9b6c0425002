//! In-memory labeled dataset and its CSV loader.
//!
//! The loader resolves the three configured columns by header name, so extra
//! columns and column order in the file do not matter.
//!
//! License: MIT OR Apache-2.0

use std::fs::File;
use std::io::{self, Read};

use log::{debug, info};
use serde::Serialize;

use infogain_entropy::{binary_entropy, Bits};

use crate::config::DatasetSchema;
use crate::errors::InfogainError;

/// A single well-formed record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// Value of the label column.
    pub label: String,
    /// Value of the categorical attribute column.
    pub category: String,
    /// Value of the numeric attribute column.
    pub value: f64,
}

/// Positive/negative label tally over a set of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
}

impl LabelCounts {
    pub fn total(&self) -> usize {
        self.positive + self.negative
    }

    /// Binary entropy of the tally. A tally missing either label is an
    /// invalid distribution.
    pub fn entropy(&self) -> Result<Bits, InfogainError> {
        Ok(binary_entropy(self.positive, self.negative)?)
    }
}

/// A labeled table held entirely in memory, rows in file order.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<Row>,
    positive_label: String,
}

impl Dataset {
    /// Builds a dataset from rows that are already parsed.
    pub fn from_rows(rows: Vec<Row>, positive_label: impl Into<String>) -> Self {
        Self {
            rows,
            positive_label: positive_label.into(),
        }
    }

    /// Loads the dataset described by `schema` from disk.
    pub fn load(schema: &DatasetSchema) -> Result<Self, InfogainError> {
        let path = &schema.path;
        info!("Loading dataset from: {}", path.display());
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => InfogainError::MissingFile(path.clone()),
            _ => InfogainError::IoError(e),
        })?;

        let dataset = Self::from_reader(file, schema)?;
        info!("Loaded {} rows from {}.", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Parses CSV data with a header row from any reader.
    pub fn from_reader<R: Read>(reader: R, schema: &DatasetSchema) -> Result<Self, InfogainError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let column_index = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| InfogainError::MissingColumn(name.to_string()))
        };
        let label_idx = column_index(schema.label_column.as_str())?;
        let category_idx = column_index(schema.categorical_column.as_str())?;
        let value_idx = column_index(schema.numeric_column.as_str())?;
        debug!(
            "Resolved columns: label={} category={} value={}",
            label_idx, category_idx, value_idx
        );

        let mut rows = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            // Row numbers are 1-based and exclude the header.
            let row_number = i + 1;
            let (label, category, raw_value) = match (
                record.get(label_idx),
                record.get(category_idx),
                record.get(value_idx),
            ) {
                (Some(l), Some(c), Some(v)) => (l, c, v),
                _ => return Err(InfogainError::MalformedRow(row_number)),
            };

            let value = raw_value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| InfogainError::InvalidNumber {
                    row: row_number,
                    column: schema.numeric_column.clone(),
                    value: raw_value.to_string(),
                })?;

            rows.push(Row {
                label: label.to_string(),
                category: category.to_string(),
                value,
            });
        }

        if rows.is_empty() {
            return Err(InfogainError::EmptyDataset);
        }

        Ok(Self::from_rows(rows, schema.positive_label.clone()))
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn positive_label(&self) -> &str {
        &self.positive_label
    }

    /// Counts positive and negative labels among `rows`.
    pub fn label_counts<'a, I>(&self, rows: I) -> LabelCounts
    where
        I: IntoIterator<Item = &'a Row>,
    {
        rows.into_iter().fold(LabelCounts::default(), |mut counts, row| {
            if row.label == self.positive_label {
                counts.positive += 1;
            } else {
                counts.negative += 1;
            }
            counts
        })
    }

    /// Distinct categorical values in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.category.as_str()) {
                seen.push(&row.category);
            }
        }
        seen
    }
}
