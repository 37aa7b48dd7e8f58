//! Constant-time comparison helpers.
//!
//! Table lookups during fixed-base multiplication and the final byte
//! comparison of strict verification must not branch on their inputs. The
//! helpers here return `0`/`1` masks instead of `bool` where the result feeds
//! a conditional move.

/// Constant-time equality.
///
/// Implementations must not branch or exit early on the compared values.
pub(crate) trait ConstantTimeEq {
    /// Returns `1` if `self == other` and `0` otherwise.
    fn ct_eq(&self, other: &Self) -> u8;
}

impl ConstantTimeEq for i8 {
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> u8 {
        let x = (*self as u8 ^ *other as u8) as u64;
        (x.wrapping_sub(1) >> 63) as u8
    }
}

impl ConstantTimeEq for [u8; 32] {
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> u8 {
        let diff = self
            .iter()
            .zip(other)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b)) as u64;
        (diff.wrapping_sub(1) >> 63) as u8
    }
}

/// Returns `1` if `b` is negative and `0` otherwise, without branching.
#[inline(always)]
pub(crate) fn is_negative_i8(b: i8) -> u8 {
    ((b as i64 as u64) >> 63) as u8
}
