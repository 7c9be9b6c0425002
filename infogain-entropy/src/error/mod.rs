// infogain-entropy/src/error/mod.rs
use core::fmt;

/// Failures raised by the entropy formulas.
///
/// The formulas divide by totals and take `log2` of ratios, so any input that
/// would produce `NaN` or `inf` is rejected up front instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The counts do not describe a usable distribution.
    InvalidDistribution(&'static str),
    /// A weighted part has no members; `index` is its position in the input.
    EmptyPartition { index: usize },
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropyError::InvalidDistribution(reason) => {
                write!(f, "invalid distribution: {}", reason)
            }
            EntropyError::EmptyPartition { index } => {
                write!(f, "empty partition at position {}", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EntropyError {}
