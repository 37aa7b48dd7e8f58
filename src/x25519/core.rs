use log::debug;

use crate::curve::{ExtendedPoint, FieldElement, Scalar};
use crate::ed25519::{PrivateKey, PublicKey};
use crate::error::Result;
use crate::hash::sha512;

/// The u-coordinate of the Curve25519 base point, `u = 9`.
pub const BASEPOINT: [u8; 32] = {
    let mut bytes = [0u8; 32];
    bytes[0] = 9;
    bytes
};

/// X25519 function of RFC 7748.
///
/// Clamps `scalar`, decodes `u` (ignoring bit 255) and runs the Montgomery
/// ladder over 255 bits with constant-time swaps. One inversion converts
/// the result back to an affine u-coordinate.
///
/// Low-order inputs produce the all-zero output, which is returned as-is;
/// callers that care must check for it.
pub fn exchange(scalar: &[u8; 32], u: &[u8; 32]) -> [u8; 32] {
    let k = Scalar::clamp(*scalar).to_bytes();

    let x1 = FieldElement::from_bytes(u);
    let mut x2 = FieldElement::ONE;
    let mut z2 = FieldElement::ZERO;
    let mut x3 = x1;
    let mut z3 = FieldElement::ONE;

    let mut swap = 0u32;

    for pos in (0..=254).rev() {
        let bit = ((k[pos >> 3] >> (pos & 7)) & 1) as u32;
        swap ^= bit;
        x2.conditional_swap(&mut x3, swap);
        z2.conditional_swap(&mut z3, swap);
        swap = bit;

        let da = x3 - z3;
        let b = x2 - z2;
        let a = x2 + z2;
        let c = x3 + z3;

        let da = da * a;
        let cb = c * b;

        let bb = b.square();
        let aa = a.square();

        x3 = (da + cb).square();
        z3 = x1 * (da - cb).square();

        x2 = aa * bb;
        let e = aa - bb;
        z2 = e * (bb + e.mul121666());
    }

    x2.conditional_swap(&mut x3, swap);
    z2.conditional_swap(&mut z3, swap);

    (x2 * z2.invert()).to_bytes()
}

/// Public key of an X25519 private scalar: `exchange(private, 9)`.
pub fn public_key(private: &[u8; 32]) -> [u8; 32] {
    exchange(private, &BASEPOINT)
}

/// Maps an Ed25519 public key to the X25519 public key of the same secret.
///
/// The birational map from the Edwards curve is `u = (1 + y) / (1 − y)`.
///
/// # Errors
///
/// [`crate::Error::InvalidEncoding`] if `public` is not a valid Edwards point.
pub fn convert_public_key(public: &PublicKey) -> Result<[u8; 32]> {
    let point = ExtendedPoint::from_bytes(public.as_bytes()).inspect_err(|err| {
        debug!("cannot convert ed25519 public key: {err}");
    })?;

    let recip = point.z.invert();
    let y = point.y * recip;

    let u = (FieldElement::ONE + y) * (FieldElement::ONE - y).invert();

    Ok(u.to_bytes())
}

/// Maps an Ed25519 private key to an X25519 private scalar.
///
/// This is the first half of `SHA-512(seed)`, the same value Ed25519
/// clamps into its secret scalar, so
/// `public_key(convert_private_key(k)) == convert_public_key(k.public_key())`.
pub fn convert_private_key(private: &PrivateKey) -> [u8; 32] {
    let digest = sha512(&[&private.seed()[..]]);

    let mut out = [0u8; 32];
    out.copy_from_slice(&digest[..32]);
    out
}
