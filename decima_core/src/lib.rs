//! # Decima Core
//!
//! Prime generation via a lazily-evaluated, wheel-optimized Sieve of
//! Eratosthenes.
//!
//! This crate provides the generation engine consumed by the statistics
//! layer:
//!
//! - **Bound Estimation**: Inverse prime-counting translation from a target
//!   count to a sieve bound
//! - **Wheel Indexing**: O(1) bijection between candidates coprime to 6 and
//!   dense flag-array slots
//! - **Sieve**: Pull-based iterator emitting exactly N primes, marking
//!   composites incrementally as the scan advances
//! - **Error Handling**: Typed, fail-fast errors for invalid targets and
//!   bound shortfalls
//!
//! ```text
//!  target count ──> bound::estimate ──> wheel::slot_count ──> flag array
//!                                                                 │
//!        2, 3 literals ──> wheel scan + incremental marking <─────┘
//!                                │
//!                                └──> strictly increasing primes (u64)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bound;
pub mod error;
pub mod sieve;
pub mod wheel;

pub use error::{DecimaError, DecimaResult};
pub use sieve::{MAX_TARGET_PRIMES, Sieve, collect_primes};

/// Decima version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
