// infogain-entropy/src/statistics/mod.rs
use crate::error::EntropyError;
use crate::Bits;

/// Size-weighted average of part entropies.
///
/// Each part is an `(entropy, size)` pair. The weight of a part is its size
/// over the total size of all parts.
pub fn weighted_entropy(parts: &[(Bits, usize)]) -> Result<Bits, EntropyError> {
    if parts.is_empty() {
        return Err(EntropyError::InvalidDistribution("no partitions"));
    }
    if let Some(index) = parts.iter().position(|&(_, size)| size == 0) {
        return Err(EntropyError::EmptyPartition { index });
    }

    let total = parts.iter().map(|&(_, size)| size).sum::<usize>() as f64;

    Ok(parts
        .iter()
        .map(|&(bits, size)| (size as f64 / total) * bits)
        .sum())
}

/// Reduction in entropy from the parent to the weighted children.
pub fn information_gain(parent: Bits, parts: &[(Bits, usize)]) -> Result<Bits, EntropyError> {
    Ok(parent - weighted_entropy(parts)?)
}
