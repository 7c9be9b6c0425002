// infogain-entropy/src/entropy/mod.rs
use libm::log2;

use crate::error::EntropyError;
use crate::Bits;

/// Two-outcome entropy in closed form.
///
/// Computes `(-m·log2(m/(m+n)) - n·log2(n/(m+n))) / (m+n)`. Both counts must be
/// strictly positive: a zero count would put `log2(0)` into the sum.
pub fn simple_entropy(m: f64, n: f64) -> Result<Bits, EntropyError> {
    if !m.is_finite() || !n.is_finite() {
        return Err(EntropyError::InvalidDistribution("counts must be finite"));
    }
    if m <= 0.0 || n <= 0.0 {
        return Err(EntropyError::InvalidDistribution(
            "both counts must be greater than zero",
        ));
    }

    let total = m + n;
    if !total.is_finite() {
        return Err(EntropyError::InvalidDistribution("counts overflow"));
    }
    Ok((-m * log2(m / total) - n * log2(n / total)) / total)
}

/// Calculates the Shannon entropy of a frequency distribution.
///
/// Returns the entropy in bits. Zero counts contribute nothing to the sum.
pub fn entropy(frequencies: &[f64]) -> Result<Bits, EntropyError> {
    if frequencies.is_empty() {
        return Err(EntropyError::InvalidDistribution("no outcomes"));
    }
    if frequencies.iter().any(|c| !c.is_finite()) {
        return Err(EntropyError::InvalidDistribution("counts must be finite"));
    }
    if frequencies.iter().any(|&c| c < 0.0) {
        return Err(EntropyError::InvalidDistribution("negative count"));
    }

    let total: f64 = frequencies.iter().sum();
    if total <= 0.0 {
        return Err(EntropyError::InvalidDistribution("counts sum to zero"));
    }
    if !total.is_finite() {
        return Err(EntropyError::InvalidDistribution("counts overflow"));
    }

    let mut bits = 0.0;
    for &count in frequencies {
        if count > 0.0 {
            let p = count / total;
            bits -= p * log2(p);
        }
    }

    Ok(bits)
}

/// Entropy of a positive/negative label tally.
///
/// Goes through [`simple_entropy`], so a tally with only one label present
/// is an invalid distribution.
pub fn binary_entropy(positive: usize, negative: usize) -> Result<Bits, EntropyError> {
    simple_entropy(positive as f64, negative as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_single_outcome_is_certain() {
        for n in [1.0, 7.0, 1000.0] {
            assert_eq!(entropy(&[n]).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_two_equal_outcomes_is_one_bit() {
        for n in [1.0, 5.0, 42.0] {
            assert!((entropy(&[n, n]).unwrap() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_three_outcome_distribution() {
        let expected = -(8.0 / 13.0) * log2(8.0 / 13.0)
            - (3.0 / 13.0) * log2(3.0 / 13.0)
            - (2.0 / 13.0) * log2(2.0 / 13.0);
        let bits = entropy(&[8.0, 3.0, 2.0]).unwrap();
        assert!((bits - expected).abs() < EPSILON);
        assert!((bits - 1.3347).abs() < 1e-4);
    }

    #[test]
    fn test_zero_count_contributes_nothing() {
        let with_zero = entropy(&[4.0, 0.0, 4.0]).unwrap();
        assert!((with_zero - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_entropy_rejects_bad_input() {
        assert!(entropy(&[]).is_err());
        assert!(entropy(&[0.0, 0.0]).is_err());
        assert!(entropy(&[3.0, -1.0]).is_err());
        assert!(entropy(&[f64::NAN, 1.0]).is_err());
    }

    #[test]
    fn test_simple_entropy_closed_form() {
        let expected = (-4.0 * log2(4.0 / 14.0) - 10.0 * log2(10.0 / 14.0)) / 14.0;
        let bits = simple_entropy(4.0, 10.0).unwrap();
        assert!((bits - expected).abs() < EPSILON);
        assert!((bits - 0.8631).abs() < 1e-4);
    }

    #[test]
    fn test_simple_entropy_matches_general_formula() {
        let simple = simple_entropy(3.0, 9.0).unwrap();
        let general = entropy(&[3.0, 9.0]).unwrap();
        assert!((simple - general).abs() < EPSILON);
    }

    #[test]
    fn test_simple_entropy_rejects_zero_count() {
        assert_eq!(
            simple_entropy(0.0, 5.0),
            Err(EntropyError::InvalidDistribution("both counts must be greater than zero"))
        );
        assert!(simple_entropy(5.0, 0.0).is_err());
        assert!(simple_entropy(-1.0, 5.0).is_err());
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        let overflow = Err(EntropyError::InvalidDistribution("counts overflow"));
        assert_eq!(entropy(&[f64::MAX, f64::MAX]), overflow);
        assert_eq!(simple_entropy(f64::MAX, f64::MAX), overflow);
        assert!(entropy(&[f64::MAX]).is_ok());
    }

    #[test]
    fn test_binary_entropy_requires_both_labels() {
        assert!((binary_entropy(5, 5).unwrap() - 1.0).abs() < EPSILON);
        assert!(binary_entropy(6, 0).is_err());
        assert!(binary_entropy(0, 3).is_err());
        assert!(binary_entropy(0, 0).is_err());
    }
}
