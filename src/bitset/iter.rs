use core::iter::FusedIterator;

use crate::word;

/// Iterator over the members of a [`BitSet`](super::BitSet), produced by `BitSet::iter`.
///
/// Walks the borrowed limbs from both ends: `next` yields ascending members,
/// `next_back` descending ones. The two cursors never cross because `remaining`
/// counts the members still between them.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    limbs: &'a [u64],
    /// Next candidate index from the front.
    front: usize,
    /// One past the next candidate index from the back.
    back: usize,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(limbs: &'a [u64]) -> Self {
        Self {
            limbs,
            front: 0,
            back: word::bit_len(limbs),
            remaining: word::count_ones(limbs),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let idx = word::next_set_bit(self.limbs, self.front)?;
        debug_assert!(idx < self.back);

        self.front = idx + 1;
        self.remaining -= 1;
        Some(idx)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    #[inline]
    fn count(self) -> usize {
        self.remaining
    }

    #[inline]
    fn last(mut self) -> Option<usize> {
        self.next_back()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let idx = word::prev_set_bit(self.limbs, self.back)?;
        debug_assert!(idx >= self.front);

        self.back = idx;
        self.remaining -= 1;
        Some(idx)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
