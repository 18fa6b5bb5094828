//! Sequence generator trait.

use num_bigint::BigUint;

use crate::error::CoreError;

/// Trait for producing the leading terms of the Fibonacci sequence.
pub trait SequenceGenerator: Send + Sync {
    /// Return the first `n` terms, starting at F(0).
    ///
    /// Fails with [`CoreError::InvalidArgument`] when `n` is negative.
    fn generate(&self, n: i64) -> Result<Vec<BigUint>, CoreError>;

    /// Get the name of this generator.
    fn name(&self) -> &str;
}
