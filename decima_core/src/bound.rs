//! Upper-bound estimation for prime generation.
//!
//! The sieve needs a finite flag array before it can emit anything, so the
//! requested prime count is translated into an inclusive value bound via the
//! inverse of the prime-counting function.

/// Estimate a bound guaranteed to contain at least `target` primes.
///
/// # Algorithm
///
/// With `n = target + 1`, returns `ceil(n * (ln n + ln ln n)) + 1`. Rosser's
/// theorem places the n-th prime strictly below `n * (ln n + ln ln n)` for
/// `n >= 6`, and the two `+1` terms absorb the handful of smaller cases, so
/// the estimate is always sufficient in practice. Downstream consumers still
/// verify emission counts rather than trusting the analytic bound blindly.
///
/// Callers validate `target >= 1` first; both logarithms are then defined.
/// All magnitudes stay far below 2^53, where f64 arithmetic is exact enough
/// for a deliberately generous ceiling.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn estimate(target: usize) -> u64 {
    debug_assert!(target >= 1);
    let n = (target + 1) as f64;
    let ln_n = n.ln();
    (n * (ln_n + ln_n.ln())).ceil() as u64 + 1
}

// =============================================================================
// Tests
// =============================================================================
