//! Limb-level primitives over arbitrary-precision bit words.
//!
//! A bit word is stored as little-endian `u64` limbs: limb 0 holds bits `0..64`,
//! limb 1 holds bits `64..128`, and so on. Every function here expects (and,
//! where it writes, preserves) the *normalized* form: no trailing zero limb, so
//! the zero word is the empty slice.

use std::collections::TryReserveError;

/// Bits per limb.
pub const LIMB_BITS: usize = u64::BITS as usize;

const _: () = assert!(LIMB_BITS == 64);
const _: () = assert!(LIMB_BITS.is_power_of_two());

/// Splits a bit index into its limb index and the bit offset inside that limb.
#[inline]
pub const fn split_index(idx: usize) -> (usize, u32) {
    (idx / LIMB_BITS, (idx % LIMB_BITS) as u32)
}

/// Returns `true` when `limbs` has no trailing zero limb.
#[inline]
pub fn is_normalized(limbs: &[u64]) -> bool {
    limbs.last().is_none_or(|&top| top != 0)
}

/// Drops trailing zero limbs.
#[inline]
pub fn normalize(limbs: &mut Vec<u64>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
    debug_assert!(is_normalized(limbs));
}

/// Splits a `u128` into normalized limbs.
pub fn limbs_from_u128(value: u128) -> Vec<u64> {
    let mut limbs = vec![value as u64, (value >> LIMB_BITS) as u64];
    normalize(&mut limbs);
    limbs
}

/// Joins normalized limbs into a `u128`, or `None` if the word needs more than 128 bits.
pub fn limbs_to_u128(limbs: &[u64]) -> Option<u128> {
    debug_assert!(is_normalized(limbs));
    match *limbs {
        [] => Some(0),
        [lo] => Some(u128::from(lo)),
        [lo, hi] => Some(u128::from(lo) | (u128::from(hi) << LIMB_BITS)),
        _ => None,
    }
}

/// Position of the highest set bit plus one; zero for the zero word.
#[inline]
pub fn bit_len(limbs: &[u64]) -> usize {
    debug_assert!(is_normalized(limbs));
    match limbs.last() {
        None => 0,
        Some(&top) => (limbs.len() - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as usize),
    }
}

/// Population count across all limbs.
#[inline]
pub fn count_ones(limbs: &[u64]) -> usize {
    limbs.iter().map(|limb| limb.count_ones() as usize).sum()
}

/// Tests bit `idx`. Indexes past the last limb read as zero.
#[inline]
pub fn test_bit(limbs: &[u64], idx: usize) -> bool {
    let (limb_idx, bit_idx) = split_index(idx);
    limbs
        .get(limb_idx)
        .is_some_and(|limb| limb & (1u64 << bit_idx) != 0)
}

/// Sets bit `idx`, growing `limbs` with zero limbs as needed.
///
/// Normalization is preserved: a freshly grown top limb always receives the set bit.
#[inline]
pub fn set_bit(limbs: &mut Vec<u64>, idx: usize) {
    let (limb_idx, bit_idx) = split_index(idx);
    if limbs.len() <= limb_idx {
        limbs.resize(limb_idx + 1, 0);
    }
    limbs[limb_idx] |= 1u64 << bit_idx;
    debug_assert!(test_bit(limbs, idx));
}

/// Like [`set_bit`], but reports allocation failure instead of aborting.
///
/// `limbs` is left unchanged on failure.
pub fn try_set_bit(limbs: &mut Vec<u64>, idx: usize) -> Result<(), TryReserveError> {
    let (limb_idx, _) = split_index(idx);
    if limbs.len() <= limb_idx {
        limbs.try_reserve_exact(limb_idx + 1 - limbs.len())?;
    }
    set_bit(limbs, idx);
    Ok(())
}

/// Lowest set bit at or after `from`.
pub fn next_set_bit(limbs: &[u64], from: usize) -> Option<usize> {
    let (mut limb_idx, bit_idx) = split_index(from);
    // Mask off bits below `from` in the first limb.
    let mut current = limbs.get(limb_idx)? & (u64::MAX << bit_idx);
    loop {
        if current != 0 {
            return Some(limb_idx * LIMB_BITS + current.trailing_zeros() as usize);
        }
        limb_idx += 1;
        current = *limbs.get(limb_idx)?;
    }
}

/// Highest set bit strictly below `before`.
pub fn prev_set_bit(limbs: &[u64], before: usize) -> Option<usize> {
    let last = before.checked_sub(1)?;
    let top_idx = limbs.len().checked_sub(1)?;
    let (limb_idx, bit_idx) = split_index(last);

    let (mut limb_idx, mut current) = if limb_idx > top_idx {
        (top_idx, limbs[top_idx])
    } else {
        // Keep bits `0..=bit_idx`.
        (limb_idx, limbs[limb_idx] & (u64::MAX >> (LIMB_BITS as u32 - 1 - bit_idx)))
    };
    loop {
        if current != 0 {
            let high = LIMB_BITS - 1 - current.leading_zeros() as usize;
            return Some(limb_idx * LIMB_BITS + high);
        }
        limb_idx = limb_idx.checked_sub(1)?;
        current = limbs[limb_idx];
    }
}

/// `acc |= rhs`, zero-extending `acc`.
pub fn or_assign(acc: &mut Vec<u64>, rhs: &[u64]) {
    if acc.len() < rhs.len() {
        acc.resize(rhs.len(), 0);
    }
    for (a, r) in acc.iter_mut().zip(rhs) {
        *a |= r;
    }
    debug_assert!(is_normalized(acc));
}

/// `acc &= rhs`. Limbs past the end of `rhs` are zero and get truncated.
pub fn and_assign(acc: &mut Vec<u64>, rhs: &[u64]) {
    acc.truncate(rhs.len());
    for (a, r) in acc.iter_mut().zip(rhs) {
        *a &= r;
    }
    normalize(acc);
}

/// `acc &= !rhs`. Limbs of `acc` past the end of `rhs` are kept as-is.
pub fn and_not_assign(acc: &mut Vec<u64>, rhs: &[u64]) {
    for (a, r) in acc.iter_mut().zip(rhs) {
        *a &= !r;
    }
    normalize(acc);
}

/// `acc ^= rhs`, zero-extending `acc`.
pub fn xor_assign(acc: &mut Vec<u64>, rhs: &[u64]) {
    if acc.len() < rhs.len() {
        acc.resize(rhs.len(), 0);
    }
    for (a, r) in acc.iter_mut().zip(rhs) {
        *a ^= r;
    }
    normalize(acc);
}

/// `a & b == 0`.
#[inline]
pub fn is_disjoint(a: &[u64], b: &[u64]) -> bool {
    a.iter().zip(b).all(|(x, y)| x & y == 0)
}

/// `a & b == a`: every bit of `a` is also set in `b`.
#[inline]
pub fn is_subset(a: &[u64], b: &[u64]) -> bool {
    debug_assert!(is_normalized(a));
    debug_assert!(is_normalized(b));
    // A normalized word with more limbs has a set bit that `b` cannot have.
    if a.len() > b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| x & !y == 0)
}

/// Base-2 digits without prefix or leading zeros; `"0"` for the zero word.
pub fn binary_digits(limbs: &[u64]) -> String {
    debug_assert!(is_normalized(limbs));
    let Some((top, rest)) = limbs.split_last() else {
        return "0".to_owned();
    };

    let mut digits = String::with_capacity(bit_len(limbs));
    digits.push_str(&format!("{top:b}"));
    for limb in rest.iter().rev() {
        digits.push_str(&format!("{limb:064b}"));
    }
    debug_assert_eq!(digits.len(), bit_len(limbs));
    digits
}
