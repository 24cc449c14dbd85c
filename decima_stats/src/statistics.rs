//! Streaming last-digit statistics over an ordered prime sequence.

use crate::digit::LastDigit;
use decima_core::{DecimaResult, Sieve};
use rustc_hash::FxHashMap;

/// Single-pass accumulator of last-digit frequencies.
///
/// State is O(1): the highest prime seen, four single-digit counters, a 4x4
/// matrix of ordered pair counters, and the previous prime's digit. Feeding
/// the full sequence once yields every statistic at once, where the grouping
/// reductions each rebuild their own stream.
///
/// The primes 3 and 7 themselves count toward their digits; only 2 and 5
/// stay invisible to the counters. Both still update the previous-digit
/// bookkeeping, which is what keeps (5, 7) and friends out of the pair
/// matrix: pairs first fire at (7, 11).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitStatistics {
    highest: u64,
    recorded: u64,
    previous: Option<LastDigit>,
    singles: [u64; 4],
    pairs: [[u64; 4]; 4],
}

impl DigitStatistics {
    /// Accumulate statistics over the first `count` primes.
    ///
    /// # Errors
    ///
    /// Propagates [`decima_core::DecimaError::InvalidTarget`] from sieve
    /// construction and [`decima_core::DecimaError::BoundShortfall`] if the
    /// sequence came up short.
    pub fn of_prime_count(count: usize) -> DecimaResult<Self> {
        Self::drain(Sieve::with_prime_count(count)?)
    }

    /// Accumulate statistics over the primes backing `couples` consecutive
    /// pairs, so the pair matrix totals exactly `couples`.
    ///
    /// # Errors
    ///
    /// Propagates [`decima_core::DecimaError::InvalidTarget`] from sieve
    /// construction and [`decima_core::DecimaError::BoundShortfall`] if the
    /// sequence came up short.
    pub fn of_couple_count(couples: usize) -> DecimaResult<Self> {
        Self::drain(Sieve::with_couple_count(couples)?)
    }

    fn drain(mut sieve: Sieve) -> DecimaResult<Self> {
        let mut stats = Self::default();
        for prime in sieve.by_ref() {
            stats.record(prime);
        }
        sieve.ensure_complete()?;
        Ok(stats)
    }

    /// Fold one prime into the running statistics.
    ///
    /// Primes must arrive in ascending order for the pair matrix to mean
    /// "consecutive"; the counters themselves are order-insensitive.
    pub fn record(&mut self, prime: u64) {
        self.highest = self.highest.max(prime);
        self.recorded += 1;

        let current = LastDigit::of(prime);
        if let Some(digit) = current {
            self.singles[digit.index()] += 1;
            if let Some(previous) = self.previous {
                self.pairs[previous.index()][digit.index()] += 1;
            }
        }
        self.previous = current;
    }

    /// The largest prime recorded so far.
    #[inline]
    #[must_use]
    pub fn highest_prime(&self) -> u64 {
        self.highest
    }

    /// Total primes recorded, including 2 and 5.
    #[inline]
    #[must_use]
    pub fn recorded(&self) -> u64 {
        self.recorded
    }

    /// How many recorded primes end in `digit`.
    #[inline]
    #[must_use]
    pub fn ending_in(&self, digit: LastDigit) -> u64 {
        self.singles[digit.index()]
    }

    /// How many consecutive recorded pairs went from `from` to `to`.
    #[inline]
    #[must_use]
    pub fn transition(&self, from: LastDigit, to: LastDigit) -> u64 {
        self.pairs[from.index()][to.index()]
    }

    /// The pair matrix as a map keyed by digit values, nonzero entries only.
    ///
    /// Shaped to compare directly against
    /// [`digit_pair_counts`](crate::grouping::digit_pair_counts), which only
    /// materializes observed pairs.
    #[must_use]
    pub fn transition_counts(&self) -> FxHashMap<(u8, u8), u64> {
        let mut counts = FxHashMap::default();
        for from in LastDigit::ALL {
            for to in LastDigit::ALL {
                let count = self.transition(from, to);
                if count > 0 {
                    counts.insert((from.digit(), to.digit()), count);
                }
            }
        }
        counts
    }
}

// =============================================================================
// Tests
// =============================================================================
