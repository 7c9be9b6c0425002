// infogain-entropy/src/lib.rs
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod activation;
pub mod entropy;
pub mod error;
pub mod statistics;

pub use entropy::{binary_entropy, entropy, simple_entropy};
pub use error::EntropyError;
pub use statistics::{information_gain, weighted_entropy};

/// Entropy measured in bits.
pub type Bits = f64;
