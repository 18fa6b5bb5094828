//! # ciprobe-core
//!
//! Numeric workloads for the ciprobe CI smoke-test binary: the Fibonacci
//! sequence generator and a 6k±1 trial-division prime checker.

pub mod constants;
pub mod error;
pub mod generator;
pub mod generator_iterative;
pub mod primes;

// Re-exports
pub use constants::{exit_codes, CI_ENV_VARS};
pub use error::CoreError;
pub use generator::SequenceGenerator;
pub use generator_iterative::IterativeGenerator;
pub use primes::{is_prime, primes_up_to};

use num_bigint::BigUint;

/// Return the first `n` Fibonacci numbers, starting `0, 1, 1, 2, ...`.
///
/// This is a convenience wrapper around [`IterativeGenerator`].
///
/// # Example
/// ```
/// let seq: Vec<String> = ciprobe_core::fibonacci(5)
///     .unwrap()
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(seq, ["0", "1", "1", "2", "3"]);
/// assert!(ciprobe_core::fibonacci(-1).is_err());
/// ```
pub fn fibonacci(n: i64) -> Result<Vec<BigUint>, CoreError> {
    IterativeGenerator::new().generate(n)
}
