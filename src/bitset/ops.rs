//! Operator sugar over the named set methods.
//!
//! `|`, `&`, `-` and `^` map to union, intersection, difference and symmetric
//! difference. Comparison operators follow the subset partial order.

use core::cmp::Ordering;
use core::ops::{BitAnd, BitOr, BitXor, Sub};

use super::BitSet;

macro_rules! forward_set_op {
    ($imp:ident, $method:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl $imp<&BitSet> for &BitSet {
            type Output = BitSet;

            #[inline]
            fn $method(self, rhs: &BitSet) -> BitSet {
                let ($lhs, $rhs) = (self, rhs);
                $body
            }
        }

        impl $imp<BitSet> for BitSet {
            type Output = BitSet;

            #[inline]
            fn $method(self, rhs: BitSet) -> BitSet {
                (&self).$method(&rhs)
            }
        }
    };
}

forward_set_op!(BitOr, bitor, |a, b| a.union([b]));
forward_set_op!(BitAnd, bitand, |a, b| a.intersection([b]));
forward_set_op!(Sub, sub, |a, b| a.difference([b]));
forward_set_op!(BitXor, bitxor, |a, b| a.symmetric_difference(b));

/// Subset order: `a <= b` iff `a` is a subset of `b`.
///
/// Sets where neither contains the other are incomparable, so `partial_cmp`
/// returns `None` and every comparison operator yields `false`.
impl PartialOrd for BitSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_subset(other), self.is_superset(other)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.is_proper_subset(other)
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.is_subset(other)
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.is_proper_superset(other)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.is_superset(other)
    }
}
