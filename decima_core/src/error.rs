//! Error types and result definitions for decima.
//!
//! The generation engine fails in exactly two ways, both surfaced as typed
//! errors rather than panics:
//! - Invalid targets (zero or beyond the supported maximum), rejected before
//!   any allocation happens
//! - Bound shortfall (the estimated sieve bound held fewer primes than
//!   requested), detected by draining consumers after exhaustion

use thiserror::Error;

/// The unified result type used throughout decima.
pub type DecimaResult<T> = Result<T, DecimaError>;

/// Error type covering all decima failure conditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecimaError {
    /// A generation target outside the supported range.
    #[error("invalid target {requested}: {reason}")]
    InvalidTarget {
        /// The rejected count.
        requested: usize,
        /// Why the count was rejected.
        reason: &'static str,
    },

    /// The estimated sieve bound contained fewer primes than requested.
    #[error("bound shortfall: produced {produced} of {target} primes below {bound}")]
    BoundShortfall {
        /// Primes requested.
        target: usize,
        /// Primes actually emitted before the flag array ran out.
        produced: usize,
        /// The estimated upper bound that proved too small.
        bound: u64,
    },
}

impl DecimaError {
    /// Create an invalid-target error.
    #[must_use]
    pub fn invalid_target(requested: usize, reason: &'static str) -> Self {
        Self::InvalidTarget { requested, reason }
    }

    /// Create a bound-shortfall error.
    #[must_use]
    pub fn bound_shortfall(target: usize, produced: usize, bound: u64) -> Self {
        Self::BoundShortfall {
            target,
            produced,
            bound,
        }
    }
}
