//! Grouping reductions over freshly generated prime sequences.
//!
//! Each reduction owns its sieve for the duration of the drain, applies the
//! completeness check, and returns plain count maps. The pair reduction goes
//! through [`Pairwise`] windowing, deliberately independent of the
//! [`DigitStatistics`](crate::statistics::DigitStatistics) matrix so the two
//! paths can cross-check each other.

use crate::window::Pairwise;
use decima_core::{DecimaResult, Sieve};
use rustc_hash::FxHashMap;

/// Count the first `prime_count` primes by their last decimal digit.
///
/// Unlike the statistics matrix this covers every prime, so the keys 2 and 5
/// each appear with a count of one whenever the range includes those primes.
///
/// # Errors
///
/// Returns [`decima_core::DecimaError::InvalidTarget`] for a zero or
/// oversized count, and [`decima_core::DecimaError::BoundShortfall`] if the
/// sieve under-produced.
///
/// # Examples
///
/// ```
/// let counts = decima_stats::last_digit_counts(4).unwrap();
/// assert_eq!(counts.len(), 4); // 2, 3, 5, 7 all end differently
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn last_digit_counts(prime_count: usize) -> DecimaResult<FxHashMap<u8, u64>> {
    let mut sieve = Sieve::with_prime_count(prime_count)?;
    let mut counts = FxHashMap::default();
    for prime in sieve.by_ref() {
        *counts.entry((prime % 10) as u8).or_insert(0) += 1;
    }
    sieve.ensure_complete()?;
    Ok(counts)
}

/// Count ordered last-digit pairs over `couple_count` consecutive primes
/// greater than 5.
///
/// The stream drops 2, 3, and 5, maps the survivors to their last digit,
/// and windows the result pairwise, so exactly `couple_count` pairs are
/// distributed across the map values.
///
/// # Errors
///
/// Returns [`decima_core::DecimaError::InvalidTarget`] for a zero or
/// oversized count, and [`decima_core::DecimaError::BoundShortfall`] if the
/// sieve under-produced.
#[allow(clippy::cast_possible_truncation)]
pub fn digit_pair_counts(couple_count: usize) -> DecimaResult<FxHashMap<(u8, u8), u64>> {
    let mut sieve = Sieve::with_couple_count(couple_count)?;
    let mut counts = FxHashMap::default();
    let digits = sieve.by_ref().filter(|&p| p > 5).map(|p| (p % 10) as u8);
    for pair in Pairwise::new(digits) {
        *counts.entry(pair).or_insert(0) += 1;
    }
    sieve.ensure_complete()?;
    Ok(counts)
}

// =============================================================================
// Tests
// =============================================================================
