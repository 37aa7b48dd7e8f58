use rand::{CryptoRng, RngCore};

use crate::curve::{ExtendedPoint, Scalar};
use crate::hash::sha512;

use super::keys::{PrivateKey, PublicKey, Signature};

/// Derives the key pair of a 32-byte seed.
pub fn keypair_from_seed(seed: &[u8; 32]) -> (PublicKey, PrivateKey) {
    let private = PrivateKey::from_seed(seed);
    (private.public_key(), private)
}

/// Generates a key pair from a fresh random seed.
pub fn generate_keypair<R: CryptoRng + RngCore + ?Sized>(rng: &mut R) -> (PublicKey, PrivateKey) {
    let private = PrivateKey::generate(rng);
    (private.public_key(), private)
}

/// Signs `message` (RFC 8032, pure Ed25519).
///
/// ```text
/// r = SHA-512(prefix || M) mod ℓ
/// R = r·B
/// k = SHA-512(R || A || M) mod ℓ
/// S = k·a + r mod ℓ
/// ```
///
/// Deterministic: the same key and message always give the same signature.
pub fn sign(private: &PrivateKey, message: &[u8]) -> Signature {
    let public = private.public_key();

    let r = Scalar::reduce(&sha512(&[&private.prefix()[..], message]));
    let r_encoded = ExtendedPoint::mul_base(&r).to_bytes();

    let k = Scalar::reduce(&sha512(&[&r_encoded[..], public.as_bytes(), message]));
    let s = Scalar::mul_add(&k, private.scalar(), &r);

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(&r_encoded);
    signature[32..].copy_from_slice(s.as_bytes());

    Signature(signature)
}
