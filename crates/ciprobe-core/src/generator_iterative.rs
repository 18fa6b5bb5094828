//! Iterative Fibonacci sequence generator.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::CoreError;
use crate::generator::SequenceGenerator;

/// Iterative generator that seeds `[0, 1]` and appends the sum of the last
/// two terms until the requested length is reached.
#[derive(Debug, Clone, Copy)]
pub struct IterativeGenerator;

impl IterativeGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for IterativeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for IterativeGenerator {
    fn generate(&self, n: i64) -> Result<Vec<BigUint>, CoreError> {
        if n < 0 {
            return Err(CoreError::InvalidArgument("n must be non-negative".into()));
        }
        let len = usize::try_from(n).map_err(|_| CoreError::CapacityExceeded(n))?;

        match len {
            0 => return Ok(Vec::new()),
            1 => return Ok(vec![BigUint::zero()]),
            _ => {}
        }

        let mut seq = Vec::new();
        seq.try_reserve_exact(len)
            .map_err(|_| CoreError::CapacityExceeded(n))?;
        seq.push(BigUint::zero());
        seq.push(BigUint::one());
        while seq.len() < len {
            let next = &seq[seq.len() - 1] + &seq[seq.len() - 2];
            seq.push(next);
        }

        tracing::trace!(terms = seq.len(), "fibonacci sequence generated");
        Ok(seq)
    }

    fn name(&self) -> &'static str {
        "IterativeGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_u64(seq: &[BigUint]) -> Vec<u64> {
        seq.iter().map(|v| v.try_into().unwrap()).collect()
    }

    #[test]
    fn generate_zero_is_empty() {
        let gen = IterativeGenerator::new();
        assert!(gen.generate(0).unwrap().is_empty());
    }

    #[test]
    fn generate_one() {
        let gen = IterativeGenerator::new();
        assert_eq!(as_u64(&gen.generate(1).unwrap()), [0]);
    }

    #[test]
    fn generate_two() {
        let gen = IterativeGenerator::new();
        assert_eq!(as_u64(&gen.generate(2).unwrap()), [0, 1]);
    }

    #[test]
    fn generate_five() {
        let gen = IterativeGenerator::new();
        assert_eq!(as_u64(&gen.generate(5).unwrap()), [0, 1, 1, 2, 3]);
    }

    #[test]
    fn generate_known_values() {
        let gen = IterativeGenerator::new();
        let expected: Vec<u64> = vec![
            0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181,
            6765,
        ];
        assert_eq!(as_u64(&gen.generate(21).unwrap()), expected);
    }

    #[test]
    fn generate_negative_errors() {
        let gen = IterativeGenerator::new();
        assert_eq!(
            gen.generate(-3),
            Err(CoreError::InvalidArgument("n must be non-negative".into()))
        );
        assert!(gen.generate(i64::MIN).is_err());
    }

    #[test]
    fn generate_unallocatable_length_errors() {
        let gen = IterativeGenerator::new();
        assert_eq!(
            gen.generate(i64::MAX),
            Err(CoreError::CapacityExceeded(i64::MAX))
        );
    }

    #[test]
    fn generate_past_u64_range() {
        // F(93) is the last term that fits in u64; F(94) must still be exact.
        let gen = IterativeGenerator::new();
        let seq = gen.generate(95).unwrap();
        assert_eq!(seq[93], BigUint::from(12_200_160_415_121_876_738u64));
        assert_eq!(seq[94].to_string(), "19740274219868223167");
    }

    #[test]
    fn default_trait() {
        let gen = IterativeGenerator::default();
        assert_eq!(gen.name(), "IterativeGenerator");
    }
}
