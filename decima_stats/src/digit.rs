//! The last decimal digits a prime greater than 5 can have.

use std::fmt;

/// One of the four digits 1, 3, 7, 9.
///
/// Every prime above 5 ends in one of these; 2 and 5 are the only primes
/// that do not, and they classify as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LastDigit {
    /// Ends in 1.
    One,
    /// Ends in 3.
    Three,
    /// Ends in 7.
    Seven,
    /// Ends in 9.
    Nine,
}

impl LastDigit {
    /// All four digits in ascending order.
    pub const ALL: [LastDigit; 4] = [Self::One, Self::Three, Self::Seven, Self::Nine];

    /// Classify a value by its last decimal digit.
    #[inline]
    #[must_use]
    pub const fn of(value: u64) -> Option<Self> {
        match value % 10 {
            1 => Some(Self::One),
            3 => Some(Self::Three),
            7 => Some(Self::Seven),
            9 => Some(Self::Nine),
            _ => None,
        }
    }

    /// The digit itself.
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Three => 3,
            Self::Seven => 7,
            Self::Nine => 9,
        }
    }

    /// Dense position in [`LastDigit::ALL`], used for counter arrays.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Three => 1,
            Self::Seven => 2,
            Self::Nine => 3,
        }
    }
}

impl fmt::Display for LastDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}

// =============================================================================
// Tests
// =============================================================================
