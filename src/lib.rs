//! Immutable, arbitrary-precision sets of non-negative integers packed into bit words.
//!
//! [`BitSet`] stores membership of integer `i` as bit `i` of a growable word. All
//! set algebra runs limb-wise on the words and returns new sets; nothing mutates
//! in place.

pub mod bitset;
pub mod error;
pub mod integer;
mod word;

pub use bitset::{BitSet, Iter};
pub use error::{Error, Rejection, Result};
pub use integer::Integer;
