//! Primality testing and prime enumeration.

/// Return `true` if `x` is prime.
///
/// Trial division over candidates of the form 6k±1, stopping once the
/// candidate's square exceeds `x`. Zero, one and negative values are never
/// prime.
///
/// # Example
/// ```
/// assert!(ciprobe_core::is_prime(97));
/// assert!(!ciprobe_core::is_prime(91));
/// assert!(!ciprobe_core::is_prime(-7));
/// ```
#[must_use]
pub fn is_prime(x: i64) -> bool {
    if x <= 1 {
        return false;
    }
    if x <= 3 {
        return true;
    }
    if x % 2 == 0 || x % 3 == 0 {
        return false;
    }

    // `i <= x / i` is `i * i <= x` without overflowing near i64::MAX.
    let mut i: i64 = 5;
    while i <= x / i {
        if x % i == 0 || x % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Return all primes in `[2, n]`, ascending. Empty when `n < 2`.
#[must_use]
pub fn primes_up_to(n: i64) -> Vec<i64> {
    if n < 2 {
        return Vec::new();
    }
    let primes: Vec<i64> = (2..=n).filter(|&x| is_prime(x)).collect();
    tracing::trace!(bound = n, count = primes.len(), "primes enumerated");
    primes
}
