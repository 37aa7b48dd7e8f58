use std::fmt;

use rand::{CryptoRng, RngCore};

use crate::curve::{ExtendedPoint, Scalar};
use crate::hash::sha512;

use super::verify::verify;

/// An Ed25519 public key: the compressed encoding of `A = a·B`.
///
/// Construction does not check that the bytes decode to a point; that
/// happens during verification, where an invalid key simply fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey(pub(crate) [u8; 32]);

impl PublicKey {
    /// Wraps a 32-byte compressed point without decoding it.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        PublicKey(bytes)
    }

    /// Returns the compressed encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Borrows the compressed encoding.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Strict RFC 8032 verification of `signature` over `message`.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        verify(self, message, signature)
    }
}

/// An Ed25519 private key.
///
/// Keeps the 32-byte seed together with what is derived from it:
///
/// - the clamped secret scalar `a` (first half of `SHA-512(seed)`)
/// - the nonce prefix (second half)
/// - the public key `a·B`
#[derive(Clone)]
pub struct PrivateKey {
    seed: [u8; 32],
    scalar: Scalar,
    prefix: [u8; 32],
    public: PublicKey,
}

impl PrivateKey {
    /// Expands a seed into a full private key.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let digest = sha512(&[&seed[..]]);

        let mut secret = [0u8; 32];
        secret.copy_from_slice(&digest[..32]);
        let scalar = Scalar::clamp(secret);

        let mut prefix = [0u8; 32];
        prefix.copy_from_slice(&digest[32..]);

        let public = PublicKey(ExtendedPoint::mul_base(&scalar).to_bytes());

        Self {
            seed: *seed,
            scalar,
            prefix,
            public,
        }
    }

    /// Draws a fresh seed from `rng`.
    pub fn generate<R: CryptoRng + RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut seed = [0u8; 32];
        rng.fill_bytes(&mut seed);
        Self::from_seed(&seed)
    }

    pub fn seed(&self) -> &[u8; 32] {
        &self.seed
    }

    pub fn public_key(&self) -> PublicKey {
        self.public
    }

    pub(crate) fn scalar(&self) -> &Scalar {
        &self.scalar
    }

    pub(crate) fn prefix(&self) -> &[u8; 32] {
        &self.prefix
    }

    /// The conventional 64-byte form: `seed || public key`.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.seed);
        out[32..].copy_from_slice(self.public.as_bytes());
        out
    }

    pub fn sign(&self, message: &[u8]) -> Signature {
        super::sign::sign(self, message)
    }
}

/// Only the public half is shown.
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

/// An Ed25519 signature `R || S`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Signature(pub(crate) [u8; 64]);

impl Signature {
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Signature(bytes)
    }

    /// # Panics
    ///
    /// Panics if `bytes` is not exactly 64 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Self {
        assert_eq!(bytes.len(), 64, "signature must be 64 bytes");

        let mut out = [0u8; 64];
        out.copy_from_slice(bytes);
        Signature(out)
    }

    pub fn to_bytes(&self) -> [u8; 64] {
        self.0
    }

    /// The encoded commitment point `R`.
    pub fn r_bytes(&self) -> [u8; 32] {
        let mut r = [0u8; 32];
        r.copy_from_slice(&self.0[..32]);
        r
    }

    /// The response scalar `S`.
    pub fn s_bytes(&self) -> [u8; 32] {
        let mut s = [0u8; 32];
        s.copy_from_slice(&self.0[32..]);
        s
    }
}
