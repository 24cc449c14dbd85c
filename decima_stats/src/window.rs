//! Windowing adapters over prime-derived streams.

/// Yields successive overlapping pairs from an inner iterator.
///
/// `pairwise([1, 2, 3, 4])` → `(1, 2), (2, 3), (3, 4)`
///
/// The first item is saved, not emitted, so n items yield n - 1 pairs. This
/// is the windowing primitive behind the digit-pair reduction; it is generic
/// so tests can drive it with plain slices.
///
/// # Performance
///
/// - O(1) per `next()`: saves one element
/// - O(1) space: stores exactly one previous value
#[derive(Debug, Clone)]
pub struct Pairwise<I: Iterator> {
    iter: I,
    prev: Option<I::Item>,
    started: bool,
}

impl<I> Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Create a new pairwise iterator.
    #[inline]
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            prev: None,
            started: false,
        }
    }
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            self.prev = self.iter.next();
        }

        let prev = self.prev.take()?;
        let next = self.iter.next()?;
        self.prev = Some(next.clone());
        Some((prev, next))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        let lo = lo.saturating_sub(if self.started { 0 } else { 1 });
        let hi = hi.map(|h| h.saturating_sub(if self.started { 0 } else { 1 }));
        (lo, hi)
    }
}

// Once `prev` is consumed by an exhausted inner iterator it stays `None`,
// so pairs never resume even over a non-fused inner iterator.
impl<I> std::iter::FusedIterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairwise_basic() {
        let pairs: Vec<_> = Pairwise::new([1, 2, 3, 4].into_iter()).collect();
        assert_eq!(pairs, vec![(1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn test_pairwise_empty() {
        let mut pairs = Pairwise::new(std::iter::empty::<u8>());
        assert_eq!(pairs.next(), None);
    }

    #[test]
    fn test_pairwise_single_item() {
        let mut pairs = Pairwise::new(std::iter::once(42u8));
        assert_eq!(pairs.next(), None);
    }

    #[test]
    fn test_pairwise_two_items() {
        let pairs: Vec<_> = Pairwise::new([7u8, 1].into_iter()).collect();
        assert_eq!(pairs, vec![(7, 1)]);
    }

    #[test]
    fn test_pairwise_count() {
        for n in 2..50usize {
            let count = Pairwise::new(0..n).count();
            assert_eq!(count, n - 1, "n = {}", n);
        }
    }

    #[test]
    fn test_pairwise_size_hint() {
        let mut pairs = Pairwise::new([1, 2, 3, 4].into_iter());
        assert_eq!(pairs.size_hint(), (3, Some(3)));
        pairs.next();
        assert_eq!(pairs.size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_pairwise_fused() {
        let mut pairs = Pairwise::new([1, 2].into_iter());
        assert_eq!(pairs.next(), Some((1, 2)));
        assert_eq!(pairs.next(), None);
        assert_eq!(pairs.next(), None);
    }

    #[test]
    fn test_pairwise_over_filtered_stream() {
        // The digit-pair pipeline shape: filter, map, then window.
        let primes = [2u64, 3, 5, 7, 11, 13, 17];
        let digits = primes.iter().filter(|&&p| p > 5).map(|&p| (p % 10) as u8);
        let pairs: Vec<_> = Pairwise::new(digits).collect();
        assert_eq!(pairs, vec![(7, 1), (1, 3), (3, 7)]);
    }
}
