//! Lazy wheel-sieve prime generation.
//!
//! [`Sieve`] is a pull-based iterator over the first N primes. Nothing is
//! sieved up front: 2 and 3 are emitted as literals, and from 5 onward each
//! `next()` call scans the mod-6 wheel array for the next unmarked slot,
//! marks that prime's multiples, and emits it. Consumers that stop early
//! never pay for the primes they did not request.
//!
//! # Algorithm
//!
//! The flag array holds one slot per integer coprime to 6 (see [`wheel`]),
//! sized by an inverse prime-counting estimate (see [`bound`]). A slot that
//! is still unmarked when the scan reaches it must be prime: any composite
//! candidate has a least prime factor no larger than its square root, and
//! that factor's multiples were marked before the scan arrived. Marking
//! starts at the prime's square and steps by twice the prime (odd multiples
//! only), skipping multiples of 3, which never own a slot.
//!
//! Candidate arithmetic is u64 throughout, so the squared marking seed needs
//! no overflow cap; marking stops at the exact cutoff `isqrt(bound)`, beyond
//! which a prime has no in-range multiples left to mark.

use crate::bound;
use crate::error::{DecimaError, DecimaResult};
use crate::wheel;

/// Largest supported generation target: the number of primes below 2^32.
///
/// The estimated bound for this census is about 4.5 * 10^9, putting the flag
/// array around 1.5 GiB; anything larger is refused before allocation.
pub const MAX_TARGET_PRIMES: usize = 203_280_221;

/// Extra primes generated per couple target: the couples built from 2, 3,
/// and 5 are discarded by convention, and n surviving couples require n + 1
/// surviving primes.
const COUPLE_TARGET_INFLATION: usize = 4;

// =============================================================================
// Sieve
// =============================================================================

/// Lazily-evaluated prime sequence of an exact, known length.
///
/// Primes come out strictly increasing and distinct, starting from 2. The
/// iterator is fused and sized; `len()` always reports the primes still to
/// come.
///
/// # Examples
///
/// ```
/// use decima_core::Sieve;
///
/// let sieve = Sieve::with_prime_count(4).unwrap();
/// assert_eq!(sieve.collect::<Vec<_>>(), vec![2, 3, 5, 7]);
/// ```
#[derive(Debug, Clone)]
pub struct Sieve {
    /// Wheel-indexed composite flags; unmarked means prime when reached.
    composite: Vec<bool>,
    /// Exclusive upper limit on candidate values covered by the flags.
    bound: u64,
    /// Largest prime with in-range multiples left to mark: isqrt(bound).
    marking_limit: u64,
    /// Next wheel slot to examine.
    cursor: usize,
    /// Primes emitted so far.
    emitted: usize,
    /// Total primes to emit.
    target: usize,
    phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Next call emits the literal prime 2.
    Two,
    /// Next call emits the literal prime 3.
    Three,
    /// Scanning the wheel array from `cursor`.
    Wheel,
    /// Target reached or array exhausted; yields `None` forever.
    Done,
}

impl Sieve {
    /// Create a sieve that emits exactly `count` primes.
    ///
    /// # Errors
    ///
    /// Returns [`DecimaError::InvalidTarget`] when `count` is zero or exceeds
    /// [`MAX_TARGET_PRIMES`]. Both checks run before the flag array is
    /// allocated.
    pub fn with_prime_count(count: usize) -> DecimaResult<Self> {
        if count == 0 {
            return Err(DecimaError::invalid_target(
                count,
                "target count must be at least 1",
            ));
        }
        if count > MAX_TARGET_PRIMES {
            return Err(DecimaError::invalid_target(
                count,
                "target count exceeds the supported maximum",
            ));
        }
        let bound = bound::estimate(count);
        Ok(Self {
            composite: vec![false; wheel::slot_count(bound)],
            bound,
            marking_limit: isqrt(bound),
            cursor: 0,
            emitted: 0,
            target: count,
            phase: Phase::Two,
        })
    }

    /// Create a sieve sized so that the digit-pair pipeline downstream
    /// yields exactly `couples` ordered pairs of consecutive primes greater
    /// than 5.
    ///
    /// # Errors
    ///
    /// Returns [`DecimaError::InvalidTarget`] when `couples` is zero or the
    /// inflated prime target would exceed [`MAX_TARGET_PRIMES`].
    ///
    /// # Examples
    ///
    /// ```
    /// use decima_core::Sieve;
    ///
    /// // 2, 3, and 5 never pair up, and one couple takes two primes.
    /// let sieve = Sieve::with_couple_count(1).unwrap();
    /// assert_eq!(sieve.len(), 5);
    /// ```
    pub fn with_couple_count(couples: usize) -> DecimaResult<Self> {
        if couples == 0 {
            return Err(DecimaError::invalid_target(
                couples,
                "couple count must be at least 1",
            ));
        }
        if couples > MAX_TARGET_PRIMES - COUPLE_TARGET_INFLATION {
            return Err(DecimaError::invalid_target(
                couples,
                "couple count exceeds the supported maximum",
            ));
        }
        Self::with_prime_count(couples + COUPLE_TARGET_INFLATION)
    }

    /// Total primes this sieve was asked to emit.
    #[inline]
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Primes emitted so far.
    #[inline]
    #[must_use]
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// The estimated candidate bound backing the flag array.
    #[inline]
    #[must_use]
    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// Whether the full target has been emitted.
    ///
    /// Meaningful once iteration has returned `None`; a `false` answer at
    /// that point means the bound estimate fell short.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.emitted == self.target
    }

    /// Fail loudly if the sieve stopped before reaching its target.
    ///
    /// Draining consumers call this after exhaustion so that an insufficient
    /// bound estimate surfaces as a typed error instead of a silently short
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns [`DecimaError::BoundShortfall`] when fewer primes than
    /// requested came out.
    pub fn ensure_complete(&self) -> DecimaResult<()> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(DecimaError::bound_shortfall(
                self.target,
                self.emitted,
                self.bound,
            ))
        }
    }

    /// Scan the wheel for the next unmarked slot and claim it.
    fn next_from_wheel(&mut self) -> Option<u64> {
        while self.cursor < self.composite.len() {
            let slot = self.cursor;
            self.cursor += 1;
            if self.composite[slot] {
                continue;
            }
            let prime = wheel::number(slot);
            if prime <= self.marking_limit {
                self.mark_multiples(prime);
            }
            return Some(prime);
        }
        // The flag array ran out first; ensure_complete reports the
        // shortfall to draining consumers.
        self.phase = Phase::Done;
        None
    }

    /// Mark every wheel-eligible multiple of `prime`, starting at its
    /// square.
    ///
    /// The square of a candidate is odd, so stepping by twice the prime
    /// stays on odd multiples; multiples of 3 own no slot and are filtered
    /// before indexing.
    fn mark_multiples(&mut self, prime: u64) {
        let step = 2 * prime;
        let mut multiple = prime * prime;
        while multiple < self.bound {
            if multiple % 3 != 0 {
                self.composite[wheel::slot(multiple)] = true;
            }
            multiple += step;
        }
    }
}

impl Iterator for Sieve {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.emitted == self.target {
            self.phase = Phase::Done;
            return None;
        }
        let prime = match self.phase {
            Phase::Two => {
                self.phase = Phase::Three;
                2
            }
            Phase::Three => {
                self.phase = Phase::Wheel;
                3
            }
            Phase::Wheel => self.next_from_wheel()?,
            Phase::Done => return None,
        };
        self.emitted += 1;
        Some(prime)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.target - self.emitted;
        (remaining, Some(remaining))
    }
}

/// Exactness rests on the bound estimate holding, which draining consumers
/// verify through [`Sieve::ensure_complete`].
impl ExactSizeIterator for Sieve {}

impl std::iter::FusedIterator for Sieve {}

// =============================================================================
// Convenience
// =============================================================================

/// Generate the first `count` primes into a vector.
///
/// # Errors
///
/// Returns [`DecimaError::InvalidTarget`] for a zero or oversized count, and
/// [`DecimaError::BoundShortfall`] if the sieve under-produced.
///
/// # Examples
///
/// ```
/// let primes = decima_core::collect_primes(5).unwrap();
/// assert_eq!(primes, vec![2, 3, 5, 7, 11]);
/// ```
pub fn collect_primes(count: usize) -> DecimaResult<Vec<u64>> {
    let mut sieve = Sieve::with_prime_count(count)?;
    let mut primes = Vec::with_capacity(count);
    primes.extend(sieve.by_ref());
    sieve.ensure_complete()?;
    Ok(primes)
}

// =============================================================================
// Integer square root
// =============================================================================

/// Floor of the square root, exact for all of u64.
///
/// The f64 seed is within one of the true root; the correction loops settle
/// the rounding either way without ever squaring past u64.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn isqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root.checked_mul(root).is_none_or(|square| square > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|square| square <= n) {
        root += 1;
    }
    root
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_phases() {
        assert_eq!(collect_primes(1).unwrap(), vec![2]);
        assert_eq!(collect_primes(2).unwrap(), vec![2, 3]);
        assert_eq!(collect_primes(3).unwrap(), vec![2, 3, 5]);
    }

    #[test]
    fn test_first_ten() {
        assert_eq!(
            collect_primes(10).unwrap(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn test_small_composites_marked() {
        // 25, 35, 49, 55, 65, 77, 85, 91, 95 are the wheel candidates below
        // 100 that must be filtered out.
        let primes = collect_primes(25).unwrap();
        assert_eq!(*primes.last().unwrap(), 97);
        for composite in [25u64, 35, 49, 55, 65, 77, 85, 91, 95] {
            assert!(!primes.contains(&composite), "{} emitted", composite);
        }
    }

    #[test]
    fn test_every_small_target_is_complete() {
        for count in 1..=300 {
            let primes = collect_primes(count).unwrap();
            assert_eq!(primes.len(), count, "target {}", count);
        }
    }

    #[test]
    fn test_size_hint_counts_down() {
        let mut sieve = Sieve::with_prime_count(5).unwrap();
        for remaining in (1..=5).rev() {
            assert_eq!(sieve.size_hint(), (remaining, Some(remaining)));
            assert_eq!(sieve.len(), remaining);
            sieve.next().unwrap();
        }
        assert_eq!(sieve.size_hint(), (0, Some(0)));
        assert_eq!(sieve.len(), 0);
    }

    #[test]
    fn test_fused_after_target() {
        let mut sieve = Sieve::with_prime_count(3).unwrap();
        assert_eq!(sieve.by_ref().count(), 3);
        for _ in 0..4 {
            assert_eq!(sieve.next(), None);
        }
    }

    #[test]
    fn test_completeness_accessors() {
        let mut sieve = Sieve::with_prime_count(4).unwrap();
        assert!(!sieve.is_complete());
        assert_eq!(sieve.emitted(), 0);
        assert_eq!(sieve.target(), 4);

        while sieve.next().is_some() {}
        assert!(sieve.is_complete());
        assert_eq!(sieve.emitted(), 4);
        assert!(sieve.ensure_complete().is_ok());
    }

    #[test]
    fn test_bound_matches_estimate() {
        let sieve = Sieve::with_prime_count(100).unwrap();
        assert_eq!(sieve.bound(), crate::bound::estimate(100));
    }

    #[test]
    fn test_tiny_targets_need_no_flags() {
        // Bound 2 covers no wheel candidate at all; the literals suffice.
        let sieve = Sieve::with_prime_count(1).unwrap();
        assert_eq!(sieve.bound(), 2);
        assert_eq!(sieve.collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_zero_count_rejected() {
        let err = Sieve::with_prime_count(0).unwrap_err();
        assert!(matches!(
            err,
            DecimaError::InvalidTarget { requested: 0, .. }
        ));
    }

    #[test]
    fn test_oversized_count_rejected() {
        let err = Sieve::with_prime_count(MAX_TARGET_PRIMES + 1).unwrap_err();
        assert!(matches!(err, DecimaError::InvalidTarget { .. }));
    }

    #[test]
    fn test_couples_near_cap_rejected() {
        // The inflated prime target would land past the cap.
        let err = Sieve::with_couple_count(MAX_TARGET_PRIMES).unwrap_err();
        assert!(matches!(err, DecimaError::InvalidTarget { .. }));
    }

    #[test]
    fn test_zero_couples_rejected() {
        let err = Sieve::with_couple_count(0).unwrap_err();
        assert!(matches!(
            err,
            DecimaError::InvalidTarget { requested: 0, .. }
        ));
    }

    #[test]
    fn test_couple_inflation() {
        let sieve = Sieve::with_couple_count(3).unwrap();
        assert_eq!(sieve.target(), 7);
        assert_eq!(
            sieve.collect::<Vec<_>>(),
            vec![2, 3, 5, 7, 11, 13, 17]
        );
    }

    #[test]
    fn test_clone_continues_independently() {
        let mut sieve = Sieve::with_prime_count(6).unwrap();
        sieve.next();
        sieve.next();
        let forked = sieve.clone();
        assert_eq!(sieve.collect::<Vec<_>>(), vec![5, 7, 11, 13]);
        assert_eq!(forked.collect::<Vec<_>>(), vec![5, 7, 11, 13]);
    }

    // =========================================================================
    // Integer square root
    // =========================================================================

    #[test]
    fn test_isqrt_small() {
        let expected = [0, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
        for (n, &root) in expected.iter().enumerate() {
            assert_eq!(isqrt(n as u64), root, "n = {}", n);
        }
    }

    #[test]
    fn test_isqrt_square_boundaries() {
        for k in 1..3_000u64 {
            assert_eq!(isqrt(k * k - 1), k - 1, "below {}^2", k);
            assert_eq!(isqrt(k * k), k, "at {}^2", k);
            assert_eq!(isqrt(k * k + 1), k, "above {}^2", k);
        }
    }

    #[test]
    fn test_isqrt_extremes() {
        assert_eq!(isqrt(u64::MAX), u64::from(u32::MAX));
        assert_eq!(isqrt(u64::from(u32::MAX)), 65_535);
        let near_max = u64::from(u32::MAX) * u64::from(u32::MAX);
        assert_eq!(isqrt(near_max), u64::from(u32::MAX));
        assert_eq!(isqrt(near_max - 1), u64::from(u32::MAX) - 1);
    }
}
