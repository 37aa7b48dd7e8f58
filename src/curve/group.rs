//! Edwards25519 group operations.
//!
//! Points live on the twisted Edwards curve
//!
//! ```text
//! −x² + y² = 1 + d·x²·y²,   d = −121665 / 121666
//! ```
//!
//! over 𝔽ₚ. Every representation below describes the same group; they
//! differ only in which quantities are kept around so that the next
//! operation needs fewer field multiplications.
//!
//! ## Coordinate systems
//!
//! - [`ExtendedPoint`] `(X : Y : Z : T)` with `T = XY/Z`
//!   - Primary representation, the only one that is encoded and decoded
//!   - Left operand of every addition
//!
//! - [`ProjectivePoint`] `(X : Y : Z)`
//!   - Doubling input and accumulator of double-scalar multiplication
//!
//! - [`CompletedPoint`] `((X : Z), (Y : T))`
//!   - Output of additions and doublings, normalized right away with
//!     [`CompletedPoint::to_extended`] or [`CompletedPoint::to_projective`]
//!
//! - [`CachedPoint`] `(Y + X, Y − X, Z, 2·d·T)`
//!   - Right operand of additions with a variable point
//!
//! - [`PrecomputedPoint`] `(y + x, y − x, 2·d·x·y)`, affine
//!   - Right operand of additions with a table entry
//!
//! Additions are written as `&ExtendedPoint + &CachedPoint` (or
//! `&PrecomputedPoint`) and yield a [`CompletedPoint`]; subtraction uses the
//! same formulas with `Y ± X` swapped, so no explicit negation is needed.
//!
//! ## Timing
//!
//! [`ExtendedPoint::mul_base`] runs in constant time with respect to the
//! scalar: fixed loop bounds and table lookups through conditional moves.
//!
//! [`ProjectivePoint::double_scalar_mult_vartime`] does not. Its running
//! time depends on the bit patterns of both scalars, so it must only be fed
//! public values, as in signature verification.
//!
//! Decoding branches on its input, which is always public.

use std::ops::{Add, Neg, Sub};

use super::constants::{D, D2, SQRTM1, base_odd_multiples, base_table};
use super::ct::{ConstantTimeEq, is_negative_i8};
use super::field::FieldElement;
use super::scalar::Scalar;
use crate::error::{Error, Result};

/// Result of an addition or doubling, before normalization.
///
/// Represents the affine point `(X/Z, Y/T)`.
#[derive(Clone, Copy, Debug)]
pub struct CompletedPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl CompletedPoint {
    /// Normalizes into extended coordinates: `(XT, YZ, ZT, XY)`.
    pub fn to_extended(&self) -> ExtendedPoint {
        ExtendedPoint {
            x: self.x * self.t,
            y: self.y * self.z,
            z: self.z * self.t,
            t: self.x * self.y,
        }
    }

    /// Normalizes into projective coordinates: `(XT, YZ, ZT)`.
    ///
    /// One multiplication cheaper than [`CompletedPoint::to_extended`]; used
    /// when the next step is a doubling.
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x * self.t,
            y: self.y * self.z,
            z: self.z * self.t,
        }
    }
}

/// A point in projective coordinates `(X : Y : Z)`.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl ProjectivePoint {
    /// The neutral element `(0 : 1 : 1)`.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
    };

    /// Doubles the point.
    ///
    /// The `a = −1` curve coefficient turns the usual `a·X²` term into a
    /// subtraction, which the formulas below fold in for free.
    pub fn double(&self) -> CompletedPoint {
        let xx = self.x.square();
        let yy = self.y.square();
        let zz2 = self.z.double_square();
        let xy_sq = (self.x + self.y).square();

        let y = yy + xx;
        let z = yy - xx;

        CompletedPoint {
            x: xy_sq - y,
            y,
            z,
            t: zz2 - z,
        }
    }

    /// Extends with the `T` coordinate: `(XZ, YZ, Z², XY)`.
    pub fn to_extended(&self) -> ExtendedPoint {
        ExtendedPoint {
            x: self.x * self.z,
            y: self.y * self.z,
            z: self.z.square(),
            t: self.x * self.y,
        }
    }

    /// Compressed 32-byte encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        encode(&self.x, &self.y, &self.z)
    }

    /// Computes `a·A + b·B` where `B` is the base point.
    ///
    /// ## Algorithm
    ///
    /// 1. Cache the odd multiples `A, 3A, …, 15A`.
    /// 2. Expand both scalars with [`Scalar::slide`].
    /// 3. From the most significant nonzero digit of either expansion down
    ///    to bit 0: double the accumulator, then add or subtract the table
    ///    entry selected by each nonzero digit.
    ///
    /// Odd multiples of `B` come from the shared read-only table.
    ///
    /// ## Timing
    ///
    /// **Variable time.** Use only with public scalars.
    pub fn double_scalar_mult_vartime(a: &Scalar, point: &ExtendedPoint, b: &Scalar) -> Self {
        let a_digits = a.slide();
        let b_digits = b.slide();

        let mut a_multiples = [CachedPoint::IDENTITY; 8];
        a_multiples[0] = point.to_cached();

        let twice = point.double().to_extended();
        for i in 0..7 {
            a_multiples[i + 1] = (&twice + &a_multiples[i]).to_extended().to_cached();
        }

        let b_multiples = base_odd_multiples();

        let Some(top) = (0..256).rev().find(|&i| a_digits[i] != 0 || b_digits[i] != 0) else {
            return Self::IDENTITY;
        };

        let mut r = Self::IDENTITY;

        for i in (0..=top).rev() {
            let mut t = r.double();

            let digit = a_digits[i];
            if digit > 0 {
                t = &t.to_extended() + &a_multiples[digit as usize / 2];
            } else if digit < 0 {
                t = &t.to_extended() - &a_multiples[digit.unsigned_abs() as usize / 2];
            }

            let digit = b_digits[i];
            if digit > 0 {
                t = &t.to_extended() + &b_multiples[digit as usize / 2];
            } else if digit < 0 {
                t = &t.to_extended() - &b_multiples[digit.unsigned_abs() as usize / 2];
            }

            r = t.to_projective();
        }

        r
    }
}

/// A point in extended coordinates `(X : Y : Z : T)`, `T = XY/Z`.
#[derive(Clone, Copy, Debug)]
pub struct ExtendedPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl ExtendedPoint {
    /// The neutral element `(0 : 1 : 1 : 0)`.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    /// Decodes a compressed point, rejecting every non-canonical encoding.
    ///
    /// On top of the curve equation check this fails when the `y` field is
    /// not reduced (`y ≥ p`) or when the sign bit is set for `x = 0`, so a
    /// successful decode always re-encodes to the same 32 bytes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidEncoding`] if the bytes do not encode a point.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        decompress(bytes, true)
    }

    /// Decodes a compressed point with the ZIP-215 rules.
    ///
    /// Non-canonical `y` values are reduced modulo `p` and the sign bit of
    /// `x = 0` is ignored; the only failure is a `y` with no matching `x`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidEncoding`] if `(y² − 1)/(d·y² + 1)` is not a square.
    pub fn from_bytes_zip215(bytes: &[u8; 32]) -> Result<Self> {
        decompress(bytes, false)
    }

    /// Compressed 32-byte encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        encode(&self.x, &self.y, &self.z)
    }

    /// Drops `T`.
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    /// Prepares `self` as the fixed addend of a mixed addition.
    pub fn to_cached(&self) -> CachedPoint {
        CachedPoint {
            y_plus_x: self.y + self.x,
            y_minus_x: self.y - self.x,
            z: self.z,
            t2d: self.t * D2,
        }
    }

    /// Normalizes to affine coordinates for table storage. Costs an inversion.
    pub(crate) fn to_precomputed(&self) -> PrecomputedPoint {
        let recip = self.z.invert();
        let x = self.x * recip;
        let y = self.y * recip;

        PrecomputedPoint {
            y_plus_x: y + x,
            y_minus_x: y - x,
            xy2d: x * y * D2,
        }
    }

    /// Computes `2·self`.
    pub fn double(&self) -> CompletedPoint {
        self.to_projective().double()
    }

    /// Returns `true` for the neutral element, in any projective scaling.
    pub fn is_identity(&self) -> bool {
        !self.x.is_non_zero() && self.y == self.z
    }

    /// Computes `8·self` with three doublings.
    pub fn mul_by_cofactor(&self) -> Self {
        let mut point = self.double().to_projective();
        point = point.double().to_projective();
        point.double().to_extended()
    }

    /// Computes `scalar·B` in constant time.
    ///
    /// The scalar is split into 64 radix-16 digits, recentered into
    /// `[−8, 8]` by carrying. With `eᵢ` the digits,
    ///
    /// ```text
    /// scalar·B = 16·Σ e₂ᵢ₊₁·256ⁱ·B + Σ e₂ᵢ·256ⁱ·B
    /// ```
    ///
    /// so the odd digits are accumulated first, the sum is multiplied by 16,
    /// and the even digits are added. Each `eⱼ·256ⁱ·B` comes from the base
    /// table through [`PrecomputedPoint::select`].
    ///
    /// # Panics
    ///
    /// Panics if bit 255 of the scalar is set. Reduced and clamped scalars
    /// always have it clear.
    pub fn mul_base(scalar: &Scalar) -> Self {
        let bytes = scalar.as_bytes();
        assert!(bytes[31] <= 127, "mul_base scalar must be below 2^255");

        let mut e = [0i8; 64];
        for (i, &byte) in bytes.iter().enumerate() {
            e[2 * i] = (byte & 0x0f) as i8;
            e[2 * i + 1] = (byte >> 4) as i8;
        }

        let mut carry = 0i8;
        for digit in e.iter_mut().take(63) {
            *digit += carry;
            carry = (*digit + 8) >> 4;
            *digit -= carry << 4;
        }
        e[63] += carry;

        let table = base_table();
        let mut h = Self::IDENTITY;

        for i in (1..64).step_by(2) {
            let entry = PrecomputedPoint::select(&table[i / 2], e[i]);
            h = (&h + &entry).to_extended();
        }

        for _ in 0..4 {
            h = h.double().to_extended();
        }

        for i in (0..64).step_by(2) {
            let entry = PrecomputedPoint::select(&table[i / 2], e[i]);
            h = (&h + &entry).to_extended();
        }

        h
    }
}

/// Projective equality: `X₁Z₂ = X₂Z₁` and `Y₁Z₂ = Y₂Z₁`.
impl PartialEq for ExtendedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
    }
}

impl Eq for ExtendedPoint {}

impl Neg for ExtendedPoint {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: self.y,
            z: self.z,
            t: -self.t,
        }
    }
}

/// A point prepared to be added to a variable point.
#[derive(Clone, Copy, Debug)]
pub struct CachedPoint {
    pub(crate) y_plus_x: FieldElement,
    pub(crate) y_minus_x: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t2d: FieldElement,
}

impl CachedPoint {
    /// The neutral element, ready for addition.
    pub const IDENTITY: Self = Self {
        y_plus_x: FieldElement::ONE,
        y_minus_x: FieldElement::ONE,
        z: FieldElement::ONE,
        t2d: FieldElement::ZERO,
    };
}

/// An affine point `(y + x, y − x, 2·d·x·y)`, as stored in the base tables.
#[derive(Clone, Copy, Debug)]
pub struct PrecomputedPoint {
    pub(crate) y_plus_x: FieldElement,
    pub(crate) y_minus_x: FieldElement,
    pub(crate) xy2d: FieldElement,
}

impl PrecomputedPoint {
    /// The neutral element `(1, 1, 0)`.
    pub const IDENTITY: Self = Self {
        y_plus_x: FieldElement::ONE,
        y_minus_x: FieldElement::ONE,
        xy2d: FieldElement::ZERO,
    };

    /// Replaces `self` with `rhs` when `condition == 1`.
    fn conditional_move(&mut self, rhs: &Self, condition: u8) {
        self.y_plus_x.conditional_move(&rhs.y_plus_x, condition as u32);
        self.y_minus_x.conditional_move(&rhs.y_minus_x, condition as u32);
        self.xy2d.conditional_move(&rhs.xy2d, condition as u32);
    }

    /// Returns `digit·P` where `row[j] = (j + 1)·P`, for `digit ∈ [−8, 8]`.
    ///
    /// Every entry of the row is touched and the sign is applied with a
    /// conditional move, so neither the memory access pattern nor the
    /// control flow depends on `digit`.
    pub(crate) fn select(row: &[Self; 8], digit: i8) -> Self {
        let negative = is_negative_i8(digit);
        let abs = (digit as i16 - ((-(negative as i16) & digit as i16) << 1)) as i8;

        let mut t = Self::IDENTITY;
        for (j, entry) in row.iter().enumerate() {
            t.conditional_move(entry, abs.ct_eq(&((j + 1) as i8)));
        }

        let minus_t = Self {
            y_plus_x: t.y_minus_x,
            y_minus_x: t.y_plus_x,
            xy2d: -t.xy2d,
        };
        t.conditional_move(&minus_t, negative);

        t
    }
}

impl Add<&CachedPoint> for &ExtendedPoint {
    type Output = CompletedPoint;

    fn add(self, rhs: &CachedPoint) -> CompletedPoint {
        let pp = (self.y + self.x) * rhs.y_plus_x;
        let mm = (self.y - self.x) * rhs.y_minus_x;
        let tt2d = rhs.t2d * self.t;
        let zz = self.z * rhs.z;
        let zz2 = zz + zz;

        CompletedPoint {
            x: pp - mm,
            y: pp + mm,
            z: zz2 + tt2d,
            t: zz2 - tt2d,
        }
    }
}

impl Sub<&CachedPoint> for &ExtendedPoint {
    type Output = CompletedPoint;

    fn sub(self, rhs: &CachedPoint) -> CompletedPoint {
        let pm = (self.y + self.x) * rhs.y_minus_x;
        let mp = (self.y - self.x) * rhs.y_plus_x;
        let tt2d = rhs.t2d * self.t;
        let zz = self.z * rhs.z;
        let zz2 = zz + zz;

        CompletedPoint {
            x: pm - mp,
            y: pm + mp,
            z: zz2 - tt2d,
            t: zz2 + tt2d,
        }
    }
}

/// Mixed addition: the right operand has `Z = 1`, saving a multiplication.
impl Add<&PrecomputedPoint> for &ExtendedPoint {
    type Output = CompletedPoint;

    fn add(self, rhs: &PrecomputedPoint) -> CompletedPoint {
        let pp = (self.y + self.x) * rhs.y_plus_x;
        let mm = (self.y - self.x) * rhs.y_minus_x;
        let txy2d = rhs.xy2d * self.t;
        let z2 = self.z + self.z;

        CompletedPoint {
            x: pp - mm,
            y: pp + mm,
            z: z2 + txy2d,
            t: z2 - txy2d,
        }
    }
}

impl Sub<&PrecomputedPoint> for &ExtendedPoint {
    type Output = CompletedPoint;

    fn sub(self, rhs: &PrecomputedPoint) -> CompletedPoint {
        let pm = (self.y + self.x) * rhs.y_minus_x;
        let mp = (self.y - self.x) * rhs.y_plus_x;
        let txy2d = rhs.xy2d * self.t;
        let z2 = self.z + self.z;

        CompletedPoint {
            x: pm - mp,
            y: pm + mp,
            z: z2 - txy2d,
            t: z2 + txy2d,
        }
    }
}

/// `y` in little-endian with the parity of `x` in bit 255.
fn encode(x: &FieldElement, y: &FieldElement, z: &FieldElement) -> [u8; 32] {
    let recip = z.invert();
    let x = *x * recip;
    let y = *y * recip;

    let mut output = y.to_bytes();
    output[31] ^= (x.is_negative() as u8) << 7;

    output
}

/// Recovers `x` from `y` and the sign bit.
///
/// With `u = y² − 1` and `v = d·y² + 1`, the candidate
/// `x = u·v³·(u·v⁷)^((p−5)/8)` satisfies `v·x² = ±u`. A `+` means `x` is a
/// root, a `−` means `x·√−1` is, anything else means there is none.
fn decompress(bytes: &[u8; 32], strict: bool) -> Result<ExtendedPoint> {
    let y = FieldElement::from_bytes(bytes);
    let sign = bytes[31] >> 7 == 1;

    if strict {
        let mut canonical = y.to_bytes();
        canonical[31] |= bytes[31] & 0x80;
        if canonical != *bytes {
            return Err(Error::InvalidEncoding);
        }
    }

    let yy = y.square();
    let u = yy - FieldElement::ONE;
    let v = yy * D + FieldElement::ONE;

    let v3 = v.square() * v;
    let mut x = (v3.square() * v * u).pow22523() * v3 * u;

    let vxx = x.square() * v;
    if (vxx - u).is_non_zero() {
        if (vxx + u).is_non_zero() {
            return Err(Error::InvalidEncoding);
        }
        x = x * SQRTM1;
    }

    if strict && sign && !x.is_non_zero() {
        return Err(Error::InvalidEncoding);
    }

    if x.is_negative() != sign {
        x = -x;
    }

    Ok(ExtendedPoint {
        x,
        y,
        z: FieldElement::ONE,
        t: x * y,
    })
}
