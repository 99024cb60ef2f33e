//! Primitive integers accepted by the fallible [`BitSet`](crate::BitSet) constructors.

use core::fmt;

use crate::error::{Error, Rejection, Result};

mod private {
    pub trait Sealed {}
}

/// A primitive integer that may stand for a bit word or a bit index.
///
/// Signed types are accepted so that negative arguments are reported as
/// [`Error::InvalidArgument`] instead of silently wrapping at the call site.
pub trait Integer: Copy + fmt::Display + private::Sealed {
    /// Returns the value as a `u128`, or `None` when it is negative.
    fn to_unsigned(self) -> Option<u128>;
}

macro_rules! impl_unsigned_integer {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Integer for $t {
                #[inline]
                fn to_unsigned(self) -> Option<u128> {
                    Some(self as u128)
                }
            }
        )*
    };
}

macro_rules! impl_signed_integer {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Integer for $t {
                #[inline]
                fn to_unsigned(self) -> Option<u128> {
                    u128::try_from(self).ok()
                }
            }
        )*
    };
}

impl_unsigned_integer!(u8, u16, u32, u64, u128, usize);
impl_signed_integer!(i8, i16, i32, i64, i128, isize);

/// Validates a raw bit word for `op`.
pub(crate) fn word_arg<W: Integer>(op: &'static str, word: W) -> Result<u128> {
    word.to_unsigned()
        .ok_or_else(|| Error::invalid_argument(op, word, Rejection::Negative))
}

/// Validates a bit index for `op`.
pub(crate) fn index_arg<I: Integer>(op: &'static str, index: I) -> Result<usize> {
    let value = index
        .to_unsigned()
        .ok_or_else(|| Error::invalid_argument(op, index, Rejection::Negative))?;
    usize::try_from(value).map_err(|_| Error::invalid_argument(op, index, Rejection::OutOfRange))
}
