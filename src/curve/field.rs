//! Arithmetic in the prime field 𝔽ₚ, `p = 2²⁵⁵ − 19`.
//!
//! ## Representation
//!
//! A field element is stored as ten signed 32-bit limbs with alternating
//! widths:
//!
//! ```text
//! [26, 25, 26, 25, 26, 25, 26, 25, 26, 25] bits
//! ```
//!
//! so that limb `i` carries weight `2^⌈25.5·i⌉`. The representation is
//! redundant: limbs may be negative and may exceed their nominal width
//! between operations. Additions and subtractions do not carry; every
//! multiplication and squaring ends with a carry chain that brings limbs
//! back to roughly `|fᵢ| ≤ 2²⁵` so that the next product cannot overflow the
//! 64-bit accumulators.
//!
//! Only [`FieldElement::to_bytes`] produces the unique representative in
//! `[0, p)`; equality and sign tests therefore go through the encoding.
//!
//! ## Timing
//!
//! No operation in this module branches on limb values or indexes memory
//! with them.

use std::array;
use std::ops::{Add, Mul, Neg, Sub};

/// Widened limb product, used by the squaring routines.
macro_rules! mul {
    ($a:expr, $b:expr) => {
        ($a as i64) * ($b as i64)
    };
}

/// Loads 3 little-endian bytes as an unsigned integer.
#[inline(always)]
pub(crate) fn load_3(input: &[u8]) -> u64 {
    (input[0] as u64) | ((input[1] as u64) << 8) | ((input[2] as u64) << 16)
}

/// Loads 4 little-endian bytes as an unsigned integer.
#[inline(always)]
pub(crate) fn load_4(input: &[u8]) -> u64 {
    (input[0] as u64)
        | ((input[1] as u64) << 8)
        | ((input[2] as u64) << 16)
        | ((input[3] as u64) << 24)
}

/// Bit width of each limb.
const LIMB_BITS: [u32; 10] = [26, 25, 26, 25, 26, 25, 26, 25, 26, 25];

/// An element of 𝔽ₚ in radix 2²⁵·⁵.
///
/// Values are plain data: every operation returns a new element and never
/// mutates its operands.
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(pub(crate) [i32; 10]);

impl FieldElement {
    /// The additive identity.
    pub const ZERO: Self = FieldElement([0; 10]);

    /// The multiplicative identity.
    pub const ONE: Self = FieldElement([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Builds an element from raw limbs. Used for the curve constants.
    pub(crate) const fn from_limbs(limbs: [i32; 10]) -> Self {
        FieldElement(limbs)
    }

    /// Swaps `self` and `rhs` when `condition == 1`, leaves both untouched
    /// when `condition == 0`.
    pub(crate) fn conditional_swap(&mut self, rhs: &mut Self, condition: u32) {
        let mask = -(condition as i32);

        for (s, r) in self.0.iter_mut().zip(rhs.0.iter_mut()) {
            let tmp = (*s ^ *r) & mask;
            *s ^= tmp;
            *r ^= tmp;
        }
    }

    /// Replaces `self` with `rhs` when `condition == 1`.
    pub(crate) fn conditional_move(&mut self, rhs: &Self, condition: u32) {
        let mask = -(condition as i32);

        for (s, r) in self.0.iter_mut().zip(rhs.0.iter()) {
            *s ^= (*s ^ *r) & mask;
        }
    }

    /// Decodes 32 little-endian bytes.
    ///
    /// Every input is accepted. Bit 255 is ignored, and values in
    /// `[p, 2²⁵⁵)` are taken modulo `p`; callers that need to reject
    /// non-canonical encodings compare against [`FieldElement::to_bytes`].
    pub fn from_bytes(input: &[u8; 32]) -> FieldElement {
        // (byte_offset, load_size, left_shift, mask_to_23_bits)
        let load_configs = [
            (0, 4, 0, false),
            (4, 3, 6, false),
            (7, 3, 5, false),
            (10, 3, 3, false),
            (13, 3, 2, false),
            (16, 4, 0, false),
            (20, 3, 7, false),
            (23, 3, 5, false),
            (26, 3, 4, false),
            (29, 3, 2, true),
        ];

        let mut h = [0i64; 10];

        for (limb, &(offset, size, shift, mask)) in h.iter_mut().zip(load_configs.iter()) {
            let value = if size == 4 {
                load_4(&input[offset..])
            } else {
                load_3(&input[offset..])
            };

            let value = if mask { value & 0x7f_ffff } else { value };

            *limb = (value << shift) as i64;
        }

        for index in (1..10).step_by(2) {
            let carry = (h[index] + (1i64 << 24)) >> 25;
            h[index] -= carry << 25;

            if index == 9 {
                h[0] += carry * 19;
            } else {
                h[index + 1] += carry;
            }
        }

        for index in (0..9).step_by(2) {
            let carry = (h[index] + (1i64 << 25)) >> 26;
            h[index] -= carry << 26;
            h[index + 1] += carry;
        }

        FieldElement(h.map(|x| x as i32))
    }

    /// Encodes the unique representative in `[0, p)` as 32 little-endian
    /// bytes. Bit 255 of the output is always clear.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut h = self.0.map(i64::from);

        // q = ⌊h / p⌋ ∈ {0, 1}, computed from the top down.
        let mut q = (19 * h[9] + (1i64 << 24)) >> 25;
        for (limb, bits) in h.iter().zip(LIMB_BITS) {
            q = (limb + q) >> bits;
        }

        // h − q·p = h + 19·q − q·2²⁵⁵; the 2²⁵⁵ term falls off the top limb.
        h[0] += 19 * q;

        for index in 0..9 {
            let carry = h[index] >> LIMB_BITS[index];
            h[index + 1] += carry;
            h[index] -= carry << LIMB_BITS[index];
        }

        let carry = h[9] >> 25;
        h[9] -= carry << 25;

        let mut output = [0u8; 32];
        let mut acc = 0u64;
        let mut acc_bits = 0u32;
        let mut position = 0;

        for (limb, bits) in h.iter().zip(LIMB_BITS) {
            acc |= (*limb as u64) << acc_bits;
            acc_bits += bits;

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

    /// Returns `true` unless the element is zero modulo `p`.
    pub fn is_non_zero(&self) -> bool {
        self.to_bytes().iter().fold(0u8, |acc, &b| acc | b) != 0
    }

    /// Returns `true` if the canonical encoding is odd.
    ///
    /// This is the "sign" of an x-coordinate in compressed points.
    pub fn is_negative(&self) -> bool {
        self.to_bytes()[0] & 1 == 1
    }

    /// Multiplies by `121666 = (486662 + 2) / 4`, the Montgomery ladder constant.
    pub(crate) fn mul121666(&self) -> Self {
        let mut h = self.0.map(|x| x as i64 * 121_666);

        for index in (1..10).step_by(2) {
            let carry = (h[index] + (1i64 << 24)) >> 25;
            h[index] -= carry << 25;

            if index == 9 {
                h[0] += carry * 19;
            } else {
                h[index + 1] += carry;
            }
        }

        for index in (0..9).step_by(2) {
            let carry = (h[index] + (1i64 << 25)) >> 26;
            h[index] -= carry << 26;
            h[index + 1] += carry;
        }

        FieldElement(h.map(|x| x as i32))
    }

    /// Returns `self²`.
    pub fn square(&self) -> Self {
        Self::carry(self.square_wide())
    }

    /// Returns `2·self²`, as needed by point doubling.
    pub fn double_square(&self) -> Self {
        Self::carry(self.square_wide().map(|x| x << 1))
    }

    /// Squares `n` times in a row, computing `self^(2ⁿ)`.
    pub fn n_square(&self, n: usize) -> Self {
        (0..n).fold(*self, |acc, _| acc.square())
    }

    /// Unreduced product coefficients of `self²`.
    ///
    /// Exploits the symmetry of squaring: each cross product is computed once
    /// with a doubled operand, and coefficients above 2²⁵⁵ are folded back
    /// using `2²⁵⁵ ≡ 19`.
    fn square_wide(&self) -> [i64; 10] {
        let f = self.0;
        let f_2: [i32; 10] = array::from_fn(|index| 2 * f[index]);

        let f5_38 = 38 * f[5] as i64;
        let f6_19 = 19 * f[6] as i64;
        let f7_38 = 38 * f[7] as i64;
        let f8_19 = 19 * f[8] as i64;
        let f9_38 = 38 * f[9] as i64;

        let f0f0 = mul!(f[0], f[0]);
        let f0f1_2 = mul!(f_2[0], f[1]);
        let f0f2_2 = mul!(f_2[0], f[2]);
        let f0f3_2 = mul!(f_2[0], f[3]);
        let f0f4_2 = mul!(f_2[0], f[4]);
        let f0f5_2 = mul!(f_2[0], f[5]);
        let f0f6_2 = mul!(f_2[0], f[6]);
        let f0f7_2 = mul!(f_2[0], f[7]);
        let f0f8_2 = mul!(f_2[0], f[8]);
        let f0f9_2 = mul!(f_2[0], f[9]);

        let f1f1_2 = mul!(f_2[1], f[1]);
        let f1f2_2 = mul!(f_2[1], f[2]);
        let f1f3_4 = mul!(f_2[1], f_2[3]);
        let f1f4_2 = mul!(f_2[1], f[4]);
        let f1f5_4 = mul!(f_2[1], f_2[5]);
        let f1f6_2 = mul!(f_2[1], f[6]);
        let f1f7_4 = mul!(f_2[1], f_2[7]);
        let f1f8_2 = mul!(f_2[1], f[8]);
        let f1f9_76 = mul!(f_2[1], f9_38);

        let f2f2 = mul!(f[2], f[2]);
        let f2f3_2 = mul!(f_2[2], f[3]);
        let f2f4_2 = mul!(f_2[2], f[4]);
        let f2f5_2 = mul!(f_2[2], f[5]);
        let f2f6_2 = mul!(f_2[2], f[6]);
        let f2f7_2 = mul!(f_2[2], f[7]);
        let f2f8_38 = mul!(f_2[2], f8_19);
        let f2f9_38 = mul!(f[2], f9_38);

        let f3f3_2 = mul!(f_2[3], f[3]);
        let f3f4_2 = mul!(f_2[3], f[4]);
        let f3f5_4 = mul!(f_2[3], f_2[5]);
        let f3f6_2 = mul!(f_2[3], f[6]);
        let f3f7_76 = mul!(f_2[3], f7_38);
        let f3f8_38 = mul!(f_2[3], f8_19);
        let f3f9_76 = mul!(f_2[3], f9_38);

        let f4f4 = mul!(f[4], f[4]);
        let f4f5_2 = mul!(f_2[4], f[5]);
        let f4f6_38 = mul!(f_2[4], f6_19);
        let f4f7_38 = mul!(f[4], f7_38);
        let f4f8_38 = mul!(f_2[4], f8_19);
        let f4f9_38 = mul!(f[4], f9_38);

        let f5f5_38 = mul!(f[5], f5_38);
        let f5f6_38 = mul!(f_2[5], f6_19);
        let f5f7_76 = mul!(f_2[5], f7_38);
        let f5f8_38 = mul!(f_2[5], f8_19);
        let f5f9_76 = mul!(f_2[5], f9_38);

        let f6f6_19 = mul!(f[6], f6_19);
        let f6f7_38 = mul!(f[6], f7_38);
        let f6f8_38 = mul!(f_2[6], f8_19);
        let f6f9_38 = mul!(f[6], f9_38);

        let f7f7_38 = mul!(f[7], f7_38);
        let f7f8_38 = mul!(f_2[7], f8_19);
        let f7f9_76 = mul!(f_2[7], f9_38);

        let f8f8_19 = mul!(f[8], f8_19);
        let f8f9_38 = mul!(f[8], f9_38);

        let f9f9_38 = mul!(f[9], f9_38);

        [
            f0f0 + f1f9_76 + f2f8_38 + f3f7_76 + f4f6_38 + f5f5_38,
            f0f1_2 + f2f9_38 + f3f8_38 + f4f7_38 + f5f6_38,
            f0f2_2 + f1f1_2 + f3f9_76 + f4f8_38 + f5f7_76 + f6f6_19,
            f0f3_2 + f1f2_2 + f4f9_38 + f5f8_38 + f6f7_38,
            f0f4_2 + f1f3_4 + f2f2 + f5f9_76 + f6f8_38 + f7f7_38,
            f0f5_2 + f1f4_2 + f2f3_2 + f6f9_38 + f7f8_38,
            f0f6_2 + f1f5_4 + f2f4_2 + f3f3_2 + f7f9_76 + f8f8_19,
            f0f7_2 + f1f6_2 + f2f5_2 + f3f4_2 + f8f9_38,
            f0f8_2 + f1f7_4 + f2f6_2 + f3f5_4 + f4f4 + f9f9_38,
            f0f9_2 + f1f8_2 + f2f7_2 + f3f6_2 + f4f5_2,
        ]
    }

    /// Carry chain shared by multiplication and squaring.
    ///
    /// Input coefficients must be below 2⁶³ in magnitude; the output limbs
    /// satisfy `|h₀| ≤ 2²⁵·(1 + ε)`, `|h₁| ≤ 2²⁴·(1 + ε)` and so on.
    fn carry(mut h: [i64; 10]) -> Self {
        for index in [0, 4, 1, 5, 2, 6, 3, 7, 4, 8] {
            let bits = LIMB_BITS[index];
            let carry = (h[index] + (1i64 << (bits - 1))) >> bits;
            h[index + 1] += carry;
            h[index] -= carry << bits;
        }

        let carry9 = (h[9] + (1i64 << 24)) >> 25;
        h[0] += carry9 * 19;
        h[9] -= carry9 << 25;

        let carry0 = (h[0] + (1i64 << 25)) >> 26;
        h[1] += carry0;
        h[0] -= carry0 << 26;

        FieldElement(h.map(|x| x as i32))
    }

    /// Raises to `(p − 5) / 8 = 2²⁵² − 3`.
    ///
    /// Used by point decompression to compute a candidate square root of a
    /// ratio `u / v` with a single exponentiation.
    pub fn pow22523(&self) -> Self {
        let mut t0 = self.square();
        let mut t1 = t0.n_square(2);

        t1 = *self * t1;
        t0 = t0 * t1;

        t0 = t0.square();
        t0 = t1 * t0;

        t1 = t0.n_square(5);
        t0 = t1 * t0;

        t1 = t0.n_square(10);
        t1 = t1 * t0;

        let mut t2 = t1.n_square(20);
        t1 = t2 * t1;

        t1 = t1.n_square(10);
        t0 = t1 * t0;

        t1 = t0.n_square(50);
        t1 = t1 * t0;

        t2 = t1.n_square(100);
        t1 = t2 * t1;

        t1 = t1.n_square(50);
        t0 = t1 * t0;

        t0 = t0.n_square(2);

        t0 * *self
    }

    /// Returns `self^(p − 2)`, the inverse of a non-zero element.
    ///
    /// Zero maps to zero, which is the convention the point encoders rely on
    /// rather than an error.
    pub fn invert(&self) -> Self {
        let mut t0 = self.square();
        let mut t1 = t0.n_square(2);

        t1 = *self * t1;
        t0 = t0 * t1;

        let mut t2 = t0.square();
        t1 = t1 * t2;

        t2 = t1.n_square(5);
        t1 = t2 * t1;

        t2 = t1.n_square(10);
        t2 = t2 * t1;

        let mut t3 = t2.n_square(20);
        t2 = t3 * t2;

        t2 = t2.n_square(10);
        t1 = t2 * t1;

        t2 = t1.n_square(50);
        t2 = t2 * t1;

        t3 = t2.n_square(100);
        t2 = t3 * t2;

        t2 = t2.n_square(50);
        t1 = t2 * t1;

        t1 = t1.n_square(5);

        t1 * t0
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Elements are equal when their canonical encodings are.
impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for FieldElement {}

/// Limb-wise addition without carrying.
impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        FieldElement(array::from_fn(|index| self.0[index] + rhs.0[index]))
    }
}

/// Limb-wise subtraction without carrying.
impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        FieldElement(array::from_fn(|index| self.0[index] - rhs.0[index]))
    }
}

/// Limb-wise negation without carrying.
impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        FieldElement(self.0.map(|x| -x))
    }
}

/// Schoolbook multiplication with the reduction folded in.
///
/// Products `fᵢ·gⱼ` with `i + j ≥ 10` wrap around with a factor of 19
/// (`2²⁵⁵ ≡ 19`); when both limbs are odd-indexed the weights overshoot by
/// one bit, which the doubled `f_2` operands absorb.
impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let f = self.0;
        let g = rhs.0;

        let f_2: [i64; 10] = array::from_fn(|index| {
            if index % 2 == 1 {
                2 * f[index] as i64
            } else {
                f[index] as i64
            }
        });
        let g_19: [i64; 10] = array::from_fn(|index| 19 * g[index] as i64);

        let mut h = [0i64; 10];

        for (i, &fi) in f.iter().enumerate() {
            for (j, &gj) in g.iter().enumerate() {
                // Both odd: the true weight is 2^(25.5(i+j) + 1).
                let left = if i % 2 == 1 && j % 2 == 1 {
                    f_2[i]
                } else {
                    fi as i64
                };

                if i + j < 10 {
                    h[i + j] += left * gj as i64;
                } else {
                    h[i + j - 10] += left * g_19[j];
                }
            }
        }

        Self::carry(h)
    }
}
