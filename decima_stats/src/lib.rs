//! # Decima Stats
//!
//! Last-digit distribution statistics over generated primes.
//!
//! Everything here consumes the [`decima_core`] sieve and reduces its
//! sequence one way or another:
//!
//! - **DigitStatistics**: Single-pass accumulator of per-digit counts and
//!   the 4x4 matrix of ordered consecutive-pair counts
//! - **Grouping**: Map-shaped reductions (digit -> count, pair -> count)
//!   rebuilt from a fresh sequence per call
//! - **Windowing**: The pairwise adapter that turns a digit stream into
//!   consecutive pairs
//!
//! ```text
//!  Sieve ──> record() loop ─────────────> DigitStatistics (counters)
//!    │
//!    └────> filter(>5) ──> % 10 ──> Pairwise ──> FxHashMap counts
//! ```
//!
//! The two pair paths are deliberately independent implementations of the
//! same quantity; the integration tests hold them equal.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod digit;
pub mod grouping;
pub mod statistics;
pub mod window;

pub use digit::LastDigit;
pub use grouping::{digit_pair_counts, last_digit_counts};
pub use statistics::DigitStatistics;
pub use window::Pairwise;

pub use decima_core::{DecimaError, DecimaResult};

/// Decima version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
