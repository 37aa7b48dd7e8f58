use edwards25519::curve::FieldElement;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// p = 2²⁵⁵ − 19, little-endian.
const P: [u8; 32] = [
    0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
];

fn random_element(rng: &mut StdRng) -> FieldElement {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    FieldElement::from_bytes(&bytes)
}

#[test]
fn test_field_inverse() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..200 {
        let x = random_element(&mut rng);
        if !x.is_non_zero() {
            continue;
        }

        assert_eq!(
            (x.invert() * x).to_bytes(),
            FieldElement::ONE.to_bytes(),
            "x · x⁻¹ must encode to one"
        );
    }
}

#[test]
fn test_field_invert_zero_is_zero() {
    assert_eq!(FieldElement::ZERO.invert(), FieldElement::ZERO);
}

#[test]
fn test_field_square_consistency() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..200 {
        let x = random_element(&mut rng);
        let xx = x * x;

        assert_eq!(x.square(), xx);
        assert_eq!(x.double_square(), xx + xx);
        assert_eq!(x.n_square(3), xx.square().square());
    }
}

#[test]
fn test_field_pow22523() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..50 {
        let x = random_element(&mut rng);
        if !x.is_non_zero() {
            continue;
        }

        // (x^((p − 5)/8))⁸ · x⁴ = x^(p − 1) = 1
        let lhs = x.pow22523().n_square(3) * x.n_square(2);
        assert_eq!(lhs, FieldElement::ONE);
    }
}

#[test]
fn test_field_additive_inverse() {
    let mut rng = StdRng::seed_from_u64(4);

    for _ in 0..100 {
        let x = random_element(&mut rng);
        let y = random_element(&mut rng);

        assert!(!(x - x).is_non_zero());
        assert!(!(x + (-x)).is_non_zero());
        assert_eq!((x + y) - y, x);
        assert_eq!(x * (y + FieldElement::ONE), x * y + x);
    }
}

#[test]
fn test_field_encoding_is_canonical() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..100 {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        // Below 2²⁵⁴ < p, so already canonical.
        bytes[31] &= 0x3f;

        assert_eq!(FieldElement::from_bytes(&bytes).to_bytes(), bytes);
    }
}

#[test]
fn test_field_reduces_non_canonical_input() {
    assert_eq!(FieldElement::from_bytes(&P).to_bytes(), [0u8; 32]);

    let mut p_plus_one = P;
    p_plus_one[0] += 1;
    assert_eq!(FieldElement::from_bytes(&p_plus_one), FieldElement::ONE);

    // Bit 255 is ignored: 2²⁵⁶ − 1 reads as 2²⁵⁵ − 1 ≡ 18.
    let mut eighteen = [0u8; 32];
    eighteen[0] = 18;
    assert_eq!(FieldElement::from_bytes(&[0xff; 32]).to_bytes(), eighteen);
}

#[test]
fn test_field_sign_and_zero() {
    assert!(FieldElement::ONE.is_negative());
    assert!(!(-FieldElement::ONE).is_negative());
    assert!(!FieldElement::ZERO.is_negative());

    assert!(FieldElement::ONE.is_non_zero());
    assert!(!FieldElement::ZERO.is_non_zero());
    assert!(!FieldElement::from_bytes(&P).is_non_zero());
    assert_eq!(FieldElement::default(), FieldElement::ZERO);
}

#[test]
fn test_field_minus_one_encoding() {
    let mut p_minus_one = P;
    p_minus_one[0] -= 1;

    assert_eq!((-FieldElement::ONE).to_bytes(), p_minus_one);
    assert_eq!((FieldElement::ZERO - FieldElement::ONE).to_bytes(), p_minus_one);
}
