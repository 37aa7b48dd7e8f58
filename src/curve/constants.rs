//! Curve constants and base point tables.
//!
//! Field constants are given directly as radix-2²⁵·⁵ limbs. The two base
//! point tables are derived from [`BASE_POINT`] with the engine's own
//! arithmetic the first time they are needed, then shared read-only for the
//! lifetime of the process.

use std::sync::LazyLock;

use log::trace;

use super::field::FieldElement;
use super::group::{ExtendedPoint, PrecomputedPoint};

/// The group order `ℓ = 2²⁵² + 27742317777372353535851937790883648493`,
/// little-endian.
pub const ORDER: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// `ℓ` as four little-endian 64-bit words, least significant first.
pub const ORDER_WORDS: [u64; 4] = [
    0x5812_631a_5cf5_d3ed,
    0x14de_f9de_a2f7_9cd6,
    0x0000_0000_0000_0000,
    0x1000_0000_0000_0000,
];

/// Curve parameter `d = −121665 / 121666`.
pub const D: FieldElement = FieldElement::from_limbs([
    -10913610, 13857413, -15372611, 6949391, 114729, -8787816, -6275908, -3247719, -18696448,
    -12055116,
]);

/// `2·d`.
pub const D2: FieldElement = FieldElement::from_limbs([
    -21827239, -5839606, -30745221, 13898782, 229458, 15978800, -12551817, -6495438, 29715968,
    9444199,
]);

/// A square root of −1, `2^((p − 1) / 4)`.
pub const SQRTM1: FieldElement = FieldElement::from_limbs([
    -32595792, -7943725, 9377950, 3500415, 12389472, -272473, -25146209, -2005654, 326686,
    11406482,
]);

/// The base point `B`, with `y = 4/5` and positive `x`.
pub const BASE_POINT: ExtendedPoint = ExtendedPoint {
    x: FieldElement::from_limbs([
        -14297830, -7645148, 16144683, -16471763, 27570974, -2696100, -26142465, 8378389, 20764389,
        8758491,
    ]),
    y: FieldElement::from_limbs([
        -26843541, -6710886, 13421773, -13421773, 26843546, 6710886, -13421773, 13421773,
        -26843546, -6710886,
    ]),
    z: FieldElement::ONE,
    t: FieldElement::from_limbs([
        28827062, -6116119, -27349572, 244363, 8635006, 11264893, 19351346, 13413597, 16611511,
        -6414980,
    ]),
};

/// Compressed encoding of [`BASE_POINT`].
pub const BASE_POINT_COMPRESSED: [u8; 32] = [
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
];

static BASE_ODD_MULTIPLES: LazyLock<[PrecomputedPoint; 8]> = LazyLock::new(|| {
    trace!("building odd multiples of the base point");

    let twice = BASE_POINT.double().to_extended().to_cached();
    let mut table = [PrecomputedPoint::IDENTITY; 8];
    let mut acc = BASE_POINT;

    for entry in table.iter_mut() {
        *entry = acc.to_precomputed();
        acc = (&acc + &twice).to_extended();
    }

    table
});

static BASE_TABLE: LazyLock<[[PrecomputedPoint; 8]; 32]> = LazyLock::new(|| {
    trace!("building fixed-base multiplication table");

    let mut table = [[PrecomputedPoint::IDENTITY; 8]; 32];
    let mut row_base = BASE_POINT;

    for row in table.iter_mut() {
        let step = row_base.to_cached();
        let mut acc = row_base;

        for entry in row.iter_mut() {
            *entry = acc.to_precomputed();
            acc = (&acc + &step).to_extended();
        }

        // 256·row_base
        for _ in 0..8 {
            row_base = row_base.double().to_extended();
        }
    }

    table
});

/// `[B, 3B, 5B, …, 15B]`, the base point digits of the double-scalar
/// multiplication.
pub fn base_odd_multiples() -> &'static [PrecomputedPoint; 8] {
    &BASE_ODD_MULTIPLES
}

/// `table[i][j] = (j + 1)·256ⁱ·B`, consumed by [`ExtendedPoint::mul_base`].
pub fn base_table() -> &'static [[PrecomputedPoint; 8]; 32] {
    &BASE_TABLE
}
