//! Immutable set of non-negative integers packed into an arbitrary-precision bit word.

mod iter;
mod ops;

pub use iter::Iter;

use core::fmt;
use core::iter::Rev;

use crate::error::{Error, Rejection, Result};
use crate::integer::{self, Integer};
use crate::word;

/// Immutable set of non-negative integers.
///
/// Bit `i` of the backing word is set iff `i` is a member. The word is stored as
/// normalized little-endian `u64` limbs and grows to whatever width the highest
/// member needs. No public method takes `&mut self`: every algebra operation
/// returns a fresh set and leaves its operands untouched.
///
/// Equality and hashing both run over the normalized limbs, so equal sets
/// always hash identically regardless of how they were built.
///
/// # Examples
/// ```
/// use bitword::BitSet;
///
/// let a = BitSet::from_members([1, 3]).unwrap();
/// let b = BitSet::from_bits(0b0110u8).unwrap();
///
/// assert_eq!(a.bits(), &[0b1010]);
/// assert_eq!(a.union([&b]).iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(a.intersection([&b]).to_string(), "0b10");
/// assert!(BitSet::from_index(-1).is_err());
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSet {
    limbs: Vec<u64>,
}

impl BitSet {
    /// Creates the empty set.
    #[inline]
    pub const fn new() -> Self {
        Self { limbs: Vec::new() }
    }

    /// Wraps limbs that are already normalized.
    #[inline]
    fn from_normalized(limbs: Vec<u64>) -> Self {
        assert!(word::is_normalized(&limbs), "bit word has trailing zero limbs");
        Self { limbs }
    }

    /// Wraps a primitive integer as the bit word.
    ///
    /// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
    /// `word` is negative. Use [`BitSet::from_words`] for words wider than 128 bits.
    pub fn from_bits<W: Integer>(word: W) -> Result<Self> {
        let value = integer::word_arg("from_bits", word)?;
        Ok(Self::from_normalized(word::limbs_from_u128(value)))
    }

    /// Wraps an arbitrary-precision word given as little-endian `u64` limbs.
    ///
    /// Trailing zero limbs are dropped.
    pub fn from_words<I: IntoIterator<Item = u64>>(limbs: I) -> Self {
        let mut limbs: Vec<u64> = limbs.into_iter().collect();
        word::normalize(&mut limbs);
        log::trace!("from_words: {} limbs", limbs.len());
        Self::from_normalized(limbs)
    }

    /// Builds a set containing every index produced by `members`.
    ///
    /// Duplicates collapse. Fails on the first negative index, or one whose bit
    /// word cannot be allocated.
    pub fn from_members<I>(members: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Integer,
    {
        Self::collect_members("from_members", members)
    }

    /// Builds the singleton set `{index}`.
    pub fn from_index<I: Integer>(index: I) -> Result<Self> {
        Self::collect_members("from_index", [index])
    }

    fn collect_members<I>(op: &'static str, members: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Integer,
    {
        let mut limbs = Vec::new();
        for member in members {
            let idx = integer::index_arg(op, member)?;
            // No bit position exists for an index whose limb cannot be allocated.
            word::try_set_bit(&mut limbs, idx)
                .map_err(|_| Error::invalid_argument(op, member, Rejection::OutOfRange))?;
        }
        Ok(Self::from_normalized(limbs))
    }

    /// Returns an independent duplicate of this set.
    #[inline]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// The backing word as normalized little-endian `u64` limbs.
    ///
    /// The empty set yields an empty slice.
    #[inline]
    pub fn bits(&self) -> &[u64] {
        &self.limbs
    }

    /// The backing word as a `u128`, or `None` if a member is 128 or above.
    #[inline]
    pub fn to_u128(&self) -> Option<u128> {
        word::limbs_to_u128(&self.limbs)
    }

    /// Cardinality: the population count of the word.
    #[inline]
    pub fn len(&self) -> usize {
        word::count_ones(&self.limbs)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Largest member plus one; zero for the empty set.
    #[inline]
    pub fn bit_len(&self) -> usize {
        word::bit_len(&self.limbs)
    }

    /// Tests membership. Any index past the largest member is simply absent.
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        word::test_bit(&self.limbs, idx)
    }

    /// Smallest member.
    #[inline]
    pub fn first(&self) -> Option<usize> {
        word::next_set_bit(&self.limbs, 0)
    }

    /// Largest member.
    #[inline]
    pub fn last(&self) -> Option<usize> {
        self.bit_len().checked_sub(1)
    }

    /// Members in ascending order. Each call starts a fresh pass.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.limbs)
    }

    /// Same as [`BitSet::iter`].
    #[inline]
    pub fn iter_ascending(&self) -> Iter<'_> {
        self.iter()
    }

    /// Members in descending order.
    #[inline]
    pub fn iter_descending(&self) -> Rev<Iter<'_>> {
        self.iter().rev()
    }

    /// Returns `true` if the two sets share no member.
    #[inline]
    pub fn is_disjoint(&self, other: &BitSet) -> bool {
        word::is_disjoint(&self.limbs, &other.limbs)
    }

    /// Returns `true` if every member of `self` is in `other`.
    ///
    /// The empty set is a subset of every set, itself included.
    #[inline]
    pub fn is_subset(&self, other: &BitSet) -> bool {
        word::is_subset(&self.limbs, &other.limbs)
    }

    #[inline]
    pub fn is_proper_subset(&self, other: &BitSet) -> bool {
        self.limbs != other.limbs && self.is_subset(other)
    }

    /// Returns `true` if every member of `other` is in `self`.
    #[inline]
    pub fn is_superset(&self, other: &BitSet) -> bool {
        other.is_subset(self)
    }

    #[inline]
    pub fn is_proper_superset(&self, other: &BitSet) -> bool {
        other.is_proper_subset(self)
    }

    /// Value equality of the backing words; identical to `==`.
    #[inline]
    pub fn equals(&self, other: &BitSet) -> bool {
        self.limbs == other.limbs
    }

    /// Members of `self` or of any set in `others`.
    ///
    /// With no operands this is a copy of `self`.
    pub fn union<'a, I>(&self, others: I) -> BitSet
    where
        I: IntoIterator<Item = &'a BitSet>,
    {
        let mut limbs = self.limbs.clone();
        for other in others {
            word::or_assign(&mut limbs, &other.limbs);
        }
        Self::from_normalized(limbs)
    }

    /// Members common to `self` and every set in `others`.
    ///
    /// With no operands this is a copy of `self`, not the empty set.
    pub fn intersection<'a, I>(&self, others: I) -> BitSet
    where
        I: IntoIterator<Item = &'a BitSet>,
    {
        let mut limbs = self.limbs.clone();
        for other in others {
            word::and_assign(&mut limbs, &other.limbs);
        }
        Self::from_normalized(limbs)
    }

    /// Members of `self` that are in none of `others`.
    ///
    /// With no operands this is a copy of `self`.
    pub fn difference<'a, I>(&self, others: I) -> BitSet
    where
        I: IntoIterator<Item = &'a BitSet>,
    {
        let mut limbs = self.limbs.clone();
        for other in others {
            word::and_not_assign(&mut limbs, &other.limbs);
        }
        Self::from_normalized(limbs)
    }

    /// Members of exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &BitSet) -> BitSet {
        let mut limbs = self.limbs.clone();
        word::xor_assign(&mut limbs, &other.limbs);
        Self::from_normalized(limbs)
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut limbs = Vec::new();
        for idx in iter {
            word::set_bit(&mut limbs, idx);
        }
        Self::from_normalized(limbs)
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Binary rendering of the word with a `0b` prefix, e.g. `0b1111011`.
impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0b{}", word::binary_digits(&self.limbs))
    }
}

/// Base-2 digits of the word; `{:#b}` adds the `0b` prefix.
impl fmt::Binary for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &word::binary_digits(&self.limbs))
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
