//! Parent entropy, child entropy, and information gain over a [`Dataset`].
//!
//! License: MIT OR Apache-2.0

use log::debug;
use serde::Serialize;

use infogain_entropy::{weighted_entropy, Bits};

use crate::dataset::{Dataset, LabelCounts};
use crate::errors::InfogainError;
use crate::split::{partition, SplitCandidate};

/// Outcome of evaluating a single split candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitReport {
    pub split: SplitCandidate,
    pub parent_entropy: Bits,
    pub child_entropy: Bits,
    pub information_gain: Bits,
    /// Rows on the matching side of the split.
    pub left_size: usize,
    /// Rows on the remaining side of the split.
    pub right_size: usize,
}

/// Binary entropy of the label column over the whole table.
pub fn parent_entropy(dataset: &Dataset) -> Result<Bits, InfogainError> {
    let counts = dataset.label_counts(dataset.rows());
    debug!(
        "Parent label counts: {} positive, {} negative",
        counts.positive, counts.negative
    );
    counts.entropy().map_err(|_| {
        InfogainError::InvalidDistribution(format!(
            "dataset needs both '{}' and other labels, found {} positive and {} negative",
            dataset.positive_label(),
            counts.positive,
            counts.negative
        ))
    })
}

/// Size-weighted entropy of the two partitions induced by `split`.
pub fn child_entropy(dataset: &Dataset, split: &SplitCandidate) -> Result<Bits, InfogainError> {
    child_entropy_with_sizes(dataset, split).map(|(bits, _, _)| bits)
}

fn child_entropy_with_sizes(
    dataset: &Dataset,
    split: &SplitCandidate,
) -> Result<(Bits, usize, usize), InfogainError> {
    let parts = partition(dataset, split);
    for (side, rows) in [("matching", &parts.left), ("remaining", &parts.right)] {
        if rows.is_empty() {
            return Err(InfogainError::EmptyPartition {
                split: split.label(),
                side,
            });
        }
    }

    let left = dataset.label_counts(parts.left.iter().copied());
    let right = dataset.label_counts(parts.right.iter().copied());
    let side_entropy = |side: &str, counts: &LabelCounts| {
        counts.entropy().map_err(|_| {
            InfogainError::InvalidDistribution(format!(
                "split '{}' leaves a single label in the {} partition",
                split.label(),
                side
            ))
        })
    };
    let bits = weighted_entropy(&[
        (side_entropy("matching", &left)?, left.total()),
        (side_entropy("remaining", &right)?, right.total()),
    ])?;

    debug!(
        "Split {}: left {}/{} right {}/{} child entropy {:.6}",
        split,
        left.positive,
        left.total(),
        right.positive,
        right.total(),
        bits
    );
    Ok((bits, left.total(), right.total()))
}

/// Information gain of a single split: `parent_entropy - child_entropy`.
pub fn information_gain(dataset: &Dataset, split: &SplitCandidate) -> Result<Bits, InfogainError> {
    Ok(parent_entropy(dataset)? - child_entropy(dataset, split)?)
}

/// Evaluates one split against a precomputed parent entropy.
pub fn evaluate_split(
    dataset: &Dataset,
    parent: Bits,
    split: &SplitCandidate,
) -> Result<SplitReport, InfogainError> {
    let (child, left_size, right_size) = child_entropy_with_sizes(dataset, split)?;
    Ok(SplitReport {
        split: split.clone(),
        parent_entropy: parent,
        child_entropy: child,
        information_gain: parent - child,
        left_size,
        right_size,
    })
}

/// Evaluates every split in order. The first failing split aborts the run.
pub fn evaluate_splits(
    dataset: &Dataset,
    splits: &[SplitCandidate],
) -> Result<Vec<SplitReport>, InfogainError> {
    let parent = parent_entropy(dataset)?;
    splits
        .iter()
        .map(|split| evaluate_split(dataset, parent, split))
        .collect()
}

/// The report with the highest information gain; earlier splits win ties.
pub fn best_split(reports: &[SplitReport]) -> Option<&SplitReport> {
    reports.iter().reduce(|best, candidate| {
        if candidate.information_gain > best.information_gain {
            candidate
        } else {
            best
        }
    })
}
