use edwards25519::curve::constants::ORDER;
use edwards25519::curve::Scalar;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

fn scalar(hex_str: &str) -> Scalar {
    Scalar::from_slice(&hex::decode(hex_str).unwrap())
}

fn random_scalar(rng: &mut StdRng) -> Scalar {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    Scalar::from_bytes(bytes)
}

fn widen(s: &Scalar) -> [u8; 64] {
    let mut wide = [0u8; 64];
    wide[..32].copy_from_slice(s.as_bytes());
    wide
}

fn order_minus_one() -> Scalar {
    let mut bytes = ORDER;
    bytes[0] -= 1;
    Scalar::from_bytes(bytes)
}

/// Big-endian comparison of two little-endian byte strings.
fn less_than(a: &[u8; 32], b: &[u8; 32]) -> bool {
    a.iter().rev().lt(b.iter().rev())
}

#[test]
fn test_scalar_reduce_vectors() {
    assert_eq!(
        Scalar::reduce(&[0xff; 64]),
        scalar("000f9c44e31106a447938568a71b0ed065bef517d273ecce3d9a307c1b419903")
    );

    let mut counting = [0u8; 64];
    for (i, byte) in counting.iter_mut().enumerate() {
        *byte = i as u8;
    }
    assert_eq!(
        Scalar::reduce(&counting),
        scalar("7a3c6282f02d37a05023b60d5428e6cc5961d4c31221937adae0b574e4d07205")
    );
}

#[test]
fn test_scalar_reduce_range() {
    let mut rng = StdRng::seed_from_u64(10);

    for _ in 0..500 {
        let mut wide = [0u8; 64];
        rng.fill_bytes(&mut wide);

        let reduced = Scalar::reduce(&wide);
        assert!(less_than(reduced.as_bytes(), &ORDER), "reduce must land below ℓ");
        assert!(reduced.is_minimal());
    }
}

#[test]
fn test_scalar_reduce_small_values_unchanged() {
    assert_eq!(Scalar::reduce(&widen(&Scalar::ONE)), Scalar::ONE);
    assert_eq!(Scalar::reduce(&widen(&order_minus_one())), order_minus_one());
    assert_eq!(Scalar::reduce(&widen(&Scalar::from_bytes(ORDER))), Scalar::ZERO);
}

#[test]
fn test_scalar_mul_add_vector() {
    let a: [u8; 32] = std::array::from_fn(|i| i as u8 + 1);
    let b: [u8; 32] = std::array::from_fn(|i| i as u8 + 33);
    let c: [u8; 32] = std::array::from_fn(|i| i as u8 + 65);

    assert_eq!(
        Scalar::mul_add(&Scalar::from_bytes(a), &Scalar::from_bytes(b), &Scalar::from_bytes(c)),
        scalar("1c87ded0b4b1d3ec7380b79ee62e3b83cd9e6b187f52ab153f7c212707360203")
    );
}

#[test]
fn test_scalar_mul_add_identity() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..200 {
        let a = random_scalar(&mut rng);
        let b = random_scalar(&mut rng);
        let c = random_scalar(&mut rng);
        let c_mod_l = Scalar::reduce(&widen(&c));

        assert_eq!(Scalar::mul_add(&Scalar::ZERO, &b, &c), c_mod_l);
        assert_eq!(Scalar::mul_add(&a, &Scalar::ZERO, &c), c_mod_l);
    }
}

#[test]
fn test_scalar_mul_add_wraps_at_order() {
    // (ℓ − 1)·1 + 1 = ℓ ≡ 0
    assert_eq!(
        Scalar::mul_add(&order_minus_one(), &Scalar::ONE, &Scalar::ONE),
        Scalar::ZERO
    );

    // (ℓ − 1)² ≡ 1
    assert_eq!(
        Scalar::mul_add(&order_minus_one(), &order_minus_one(), &Scalar::ZERO),
        Scalar::ONE
    );
}

#[test]
fn test_scalar_minimality_boundary() {
    assert!(!Scalar::from_bytes(ORDER).is_minimal(), "ℓ is not minimal");
    assert!(order_minus_one().is_minimal(), "ℓ − 1 is minimal");
    assert!(Scalar::ZERO.is_minimal(), "zero is minimal");

    let mut order_plus_one = ORDER;
    order_plus_one[0] += 1;
    assert!(!Scalar::from_bytes(order_plus_one).is_minimal());
    assert!(!Scalar::from_bytes([0xff; 32]).is_minimal());

    // Equal top word, smaller low word.
    let mut below = ORDER;
    below[8] -= 1;
    assert!(Scalar::from_bytes(below).is_minimal());
}

/// Rebuilds `Σ rᵢ·2ⁱ` as 32 little-endian bytes.
fn recombine(digits: &[i8; 256]) -> [u8; 32] {
    let mut bits = [0u8; 256];
    let mut carry = 0i32;

    for (bit, &digit) in bits.iter_mut().zip(digits) {
        let value = digit as i32 + carry;
        *bit = value.rem_euclid(2) as u8;
        carry = (value - *bit as i32) / 2;
    }
    assert_eq!(carry, 0, "digit expansion must not overflow 256 bits");

    let mut out = [0u8; 32];
    for (i, bit) in bits.iter().enumerate() {
        out[i / 8] |= bit << (i % 8);
    }
    out
}

#[test]
fn test_scalar_slide_properties() {
    let mut rng = StdRng::seed_from_u64(12);

    let mut cases = vec![Scalar::ZERO, Scalar::ONE, order_minus_one()];
    for _ in 0..200 {
        let mut wide = [0u8; 64];
        rng.fill_bytes(&mut wide);
        cases.push(Scalar::reduce(&wide));
    }

    for s in cases {
        let digits = s.slide();

        for &digit in &digits {
            assert!(digit == 0 || digit % 2 != 0, "nonzero digits are odd");
            assert!((-15..=15).contains(&digit), "digits stay within ±15");
        }

        assert_eq!(&recombine(&digits), s.as_bytes());
    }
}

#[test]
fn test_scalar_slide_known_digits() {
    // 7 = 0b111 folds into a single digit.
    let mut seven = [0u8; 32];
    seven[0] = 7;
    let digits = Scalar::from_bytes(seven).slide();
    assert_eq!(digits[0], 7);
    assert!(digits[1..].iter().all(|&d| d == 0));

    // 0xff: bits 0..=3 fold into 15, bit 4 would overshoot, so it is
    // subtracted instead and the borrow ripples up to bit 8: 255 = −1 + 256.
    let mut ff = [0u8; 32];
    ff[0] = 0xff;
    let digits = Scalar::from_bytes(ff).slide();
    assert_eq!(digits[0], -1);
    assert_eq!(digits[8], 1);
    assert_eq!(digits.iter().filter(|&&d| d != 0).count(), 2);
}

#[test]
fn test_scalar_clamp() {
    let clamped = Scalar::clamp([0xff; 32]);
    let bytes = clamped.to_bytes();

    assert_eq!(bytes[0], 0xf8);
    assert_eq!(bytes[31], 0x7f);
    assert_eq!(Scalar::clamp([0; 32]).to_bytes()[31], 0x40);
}

#[test]
#[should_panic(expected = "scalar must be 32 bytes")]
fn test_scalar_from_slice_wrong_length() {
    Scalar::from_slice(&[0u8; 31]);
}
