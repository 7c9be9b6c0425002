//! Split candidates and the two-way partitioning they induce.
//!
//! A split is either a categorical value (rows whose category equals the value
//! go left) or a numeric threshold (rows whose value is strictly less than the
//! threshold go left). Everything else goes right.
//!
//! License: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, Row};

/// A candidate used to partition a dataset into two groups.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitCandidate {
    /// Partition by equality with a categorical attribute value.
    Categorical(String),
    /// Partition by `value < threshold` on the numeric attribute.
    Threshold(f64),
}

impl SplitCandidate {
    /// Returns true if the row belongs to the left (matching) side.
    pub fn matches(&self, row: &Row) -> bool {
        match self {
            SplitCandidate::Categorical(value) => row.category == *value,
            SplitCandidate::Threshold(threshold) => row.value < *threshold,
        }
    }

    /// Short lowercase label used in report lines, e.g. `green` or `<17`.
    pub fn label(&self) -> String {
        match self {
            SplitCandidate::Categorical(value) => value.to_lowercase(),
            SplitCandidate::Threshold(threshold) => format!("<{}", threshold),
        }
    }
}

impl fmt::Display for SplitCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitCandidate::Categorical(value) => write!(f, "== {}", value),
            SplitCandidate::Threshold(threshold) => write!(f, "< {}", threshold),
        }
    }
}

/// Error type for parsing an invalid `SplitCandidate` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSplitError(String);

impl fmt::Display for ParseSplitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid split candidate '{}'; expected a category name or a finite number.", self.0)
    }
}

impl std::error::Error for ParseSplitError {}

impl FromStr for SplitCandidate {
    type Err = ParseSplitError;

    /// Anything that parses as a number is a threshold; any other non-empty
    /// text is a categorical value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseSplitError(s.to_string()));
        }
        match trimmed.parse::<f64>() {
            Ok(threshold) if threshold.is_finite() => Ok(SplitCandidate::Threshold(threshold)),
            Ok(_) => Err(ParseSplitError(s.to_string())),
            Err(_) => Ok(SplitCandidate::Categorical(trimmed.to_string())),
        }
    }
}

/// The two sides of a split, borrowing rows from the dataset in file order.
#[derive(Debug)]
pub struct Partition<'a> {
    pub left: Vec<&'a Row>,
    pub right: Vec<&'a Row>,
}

impl Partition<'_> {
    /// Total number of rows across both sides.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions every row of `dataset` according to `split`.
pub fn partition<'a>(dataset: &'a Dataset, split: &SplitCandidate) -> Partition<'a> {
    let (left, right): (Vec<&Row>, Vec<&Row>) =
        dataset.rows().iter().partition(|row| split.matches(row));
    Partition { left, right }
}
