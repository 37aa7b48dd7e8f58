//! Scalar arithmetic modulo the group order
//!
//! ```text
//! ℓ = 2²⁵² + 27742317777372353535851937790883648493
//! ```
//!
//! ## Representation
//!
//! A [`Scalar`] is 32 little-endian bytes and nothing more: construction
//! neither clamps nor reduces. Reduction happens in [`Scalar::reduce`] and
//! [`Scalar::mul_add`], which both return canonical values in `[0, ℓ)`.
//!
//! Internally both operations unpack into signed radix-2²¹ limbs held in
//! `i64`, so a 512-bit value occupies 24 limbs. Limbs above 2²⁵² are folded
//! down with
//!
//! ```text
//! 2²⁵² ≡ −27742317777372353535851937790883648493 (mod ℓ)
//! ```
//!
//! whose radix-2²¹ digits are the six entries of `FOLD`. Three rounds of
//! folding and carrying bring the value into `[0, ℓ)`.
//!
//! ## Timing
//!
//! `reduce` and `mul_add` are constant-time. [`Scalar::is_minimal`] and
//! [`Scalar::slide`] are not, and only ever see public values.

use std::array;
use std::cmp::Ordering;

use super::constants::ORDER_WORDS;
use super::field::load_4;

/// Digits of `−(ℓ − 2²⁵²)` in radix 2²¹, least significant first.
const FOLD: [i64; 6] = [666643, 470296, 654183, -997805, 136657, -683901];

const LIMB_MASK: i64 = (1 << 21) - 1;

/// A 256-bit little-endian integer used as a point multiplier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Scalar(pub(crate) [u8; 32]);

impl Scalar {
    /// The scalar `0`.
    pub const ZERO: Self = Scalar([0; 32]);

    /// The scalar `1`.
    pub const ONE: Self = {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        Scalar(bytes)
    };

    /// Wraps 32 bytes as-is.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Scalar(bytes)
    }

    /// Wraps a 32-byte slice as-is.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is not exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Self {
        assert_eq!(bytes.len(), 32, "scalar must be 32 bytes");

        let mut out = [0u8; 32];
        out.copy_from_slice(bytes);
        Scalar(out)
    }

    /// Little-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Borrows the little-endian encoding.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Clamps a secret key the Ed25519/X25519 way: clears the three low bits
    /// and bit 255, sets bit 254.
    pub fn clamp(mut bytes: [u8; 32]) -> Self {
        bytes[0] &= 248;
        bytes[31] &= 127;
        bytes[31] |= 64;
        Scalar(bytes)
    }

    /// Reduces a 512-bit little-endian integer modulo `ℓ`.
    ///
    /// Used to turn SHA-512 digests into nonces and challenges.
    pub fn reduce(wide: &[u8; 64]) -> Self {
        Scalar(fold_and_pack(unpack(wide)))
    }

    /// Computes `(a·b + c) mod ℓ`.
    ///
    /// The 24-limb schoolbook product has `c` added to its low half, is
    /// carried once to bring every limb near 21 bits, then goes through the
    /// same folding as [`Scalar::reduce`].
    pub fn mul_add(a: &Scalar, b: &Scalar, c: &Scalar) -> Self {
        let a: [i64; 12] = unpack(&a.0);
        let b: [i64; 12] = unpack(&b.0);
        let c: [i64; 12] = unpack(&c.0);

        let mut s = [0i64; 24];
        s[..12].copy_from_slice(&c);

        for (i, &ai) in a.iter().enumerate() {
            for (j, &bj) in b.iter().enumerate() {
                s[i + j] += ai * bj;
            }
        }

        for index in (0..23).step_by(2) {
            round_carry(&mut s, index);
        }
        for index in (1..22).step_by(2) {
            round_carry(&mut s, index);
        }

        Scalar(fold_and_pack(s))
    }

    /// Returns `true` iff the scalar is strictly below `ℓ`.
    ///
    /// Compares the four 64-bit words from the most significant down.
    /// Rejecting `S ≥ ℓ` keeps signatures from being malleable.
    pub fn is_minimal(&self) -> bool {
        let words: [u64; 4] = array::from_fn(|i| {
            let mut word = [0u8; 8];
            word.copy_from_slice(&self.0[8 * i..8 * i + 8]);
            u64::from_le_bytes(word)
        });

        for (word, order) in words.iter().zip(ORDER_WORDS).rev() {
            match word.cmp(&order) {
                Ordering::Less => return true,
                Ordering::Greater => return false,
                Ordering::Equal => {}
            }
        }

        false
    }

    /// Signed sliding-window expansion.
    ///
    /// Returns 256 digits `rᵢ` with `Σ rᵢ·2ⁱ` equal to the scalar, where every
    /// nonzero digit is odd and `|rᵢ| ≤ 15`, and nonzero digits are sparse.
    ///
    /// Starting from the plain bits, each set position `i` tries to absorb
    /// the set bits at `i + 1 … i + 6`: added in while the digit stays
    /// `≤ 15`, otherwise subtracted (with the borrow pushed upward as a
    /// binary carry) while it stays `≥ −15`, otherwise the window closes.
    ///
    /// Variable time; public scalars only.
    pub fn slide(&self) -> [i8; 256] {
        let mut r: [i8; 256] = array::from_fn(|i| ((self.0[i >> 3] >> (i & 7)) & 1) as i8);

        for i in 0..256 {
            if r[i] == 0 {
                continue;
            }

            for b in 1..=6 {
                if i + b >= 256 {
                    break;
                }
                if r[i + b] == 0 {
                    continue;
                }

                let shifted = (r[i + b] as i32) << b;
                let current = r[i] as i32;

                if current + shifted <= 15 {
                    r[i] = (current + shifted) as i8;
                    r[i + b] = 0;
                } else if current - shifted >= -15 {
                    r[i] = (current - shifted) as i8;

                    for digit in r.iter_mut().skip(i + b) {
                        if *digit == 0 {
                            *digit = 1;
                            break;
                        }
                        *digit = 0;
                    }
                } else {
                    break;
                }
            }
        }

        r
    }
}

/// Splits little-endian bytes into `N` radix-2²¹ limbs.
///
/// The top limb keeps every remaining bit instead of being masked.
fn unpack<const N: usize>(bytes: &[u8]) -> [i64; N] {
    array::from_fn(|i| {
        let bit = 21 * i;
        let offset = (bit / 8).min(bytes.len() - 4);
        let value = (load_4(&bytes[offset..]) >> (bit - 8 * offset)) as i64;

        if i == N - 1 { value } else { value & LIMB_MASK }
    })
}

/// Moves the rounded overflow of limb `index` into limb `index + 1`.
#[inline(always)]
fn round_carry(s: &mut [i64], index: usize) {
    let carry = (s[index] + (1 << 20)) >> 21;
    s[index + 1] += carry;
    s[index] -= carry << 21;
}

/// Moves the floored overflow of limb `index` into limb `index + 1`.
#[inline(always)]
fn floor_carry(s: &mut [i64], index: usize) {
    let carry = s[index] >> 21;
    s[index + 1] += carry;
    s[index] -= carry << 21;
}

/// Adds `s[index]·2^(21·index)` back in as its residue below 2²⁵², then
/// clears the limb.
#[inline(always)]
fn fold(s: &mut [i64], index: usize) {
    let high = s[index];
    for (j, coeff) in FOLD.iter().enumerate() {
        s[index - 12 + j] += high * coeff;
    }
    s[index] = 0;
}

/// Reduces 24 limbs modulo `ℓ` and packs the canonical result.
fn fold_and_pack(mut s: [i64; 24]) -> [u8; 32] {
    for index in (18..24).rev() {
        fold(&mut s, index);
    }

    for index in (6..17).step_by(2) {
        round_carry(&mut s, index);
    }
    for index in (7..16).step_by(2) {
        round_carry(&mut s, index);
    }

    for index in (12..18).rev() {
        fold(&mut s, index);
    }

    for index in (0..11).step_by(2) {
        round_carry(&mut s, index);
    }
    for index in (1..12).step_by(2) {
        round_carry(&mut s, index);
    }

    fold(&mut s, 12);

    for index in 0..12 {
        floor_carry(&mut s, index);
    }

    fold(&mut s, 12);

    for index in 0..11 {
        floor_carry(&mut s, index);
    }

    let mut output = [0u8; 32];
    let mut acc = 0u64;
    let mut acc_bits = 0;
    let mut position = 0;

    for &limb in &s[..12] {
        acc |= (limb as u64) << acc_bits;
        acc_bits += 21;

        while acc_bits >= 8 {
            output[position] = acc as u8;
            position += 1;
            acc >>= 8;
            acc_bits -= 8;
        }
    }
    output[position] = acc as u8;

    output
}
