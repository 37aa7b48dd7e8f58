use log::debug;

use crate::curve::ct::ConstantTimeEq;
use crate::curve::{ExtendedPoint, ProjectivePoint, Scalar};
use crate::error::{Error, Result};
use crate::hash::sha512;

use super::VerificationMode;
use super::keys::{PublicKey, Signature};

/// Strict RFC 8032 verification.
pub fn verify(public: &PublicKey, message: &[u8], signature: &Signature) -> bool {
    verify_with(VerificationMode::Strict, public, message, signature).is_ok()
}

/// ZIP-215 verification.
pub fn verify_zip215(public: &PublicKey, message: &[u8], signature: &Signature) -> bool {
    verify_with(VerificationMode::Zip215, public, message, signature).is_ok()
}

/// Verifies `signature` over `message` under the rules of `mode`.
///
/// # Errors
///
/// - [`Error::NonCanonicalScalar`] if `S ≥ ℓ`
/// - [`Error::InvalidEncoding`] if the public key (or, for ZIP-215, `R`)
///   does not decode
/// - [`Error::InvalidSignature`] if the verification equation fails
pub fn verify_with(
    mode: VerificationMode,
    public: &PublicKey,
    message: &[u8],
    signature: &Signature,
) -> Result<()> {
    let result = match mode {
        VerificationMode::Strict => verify_strict(public, message, signature),
        VerificationMode::Zip215 => verify_cofactored(public, message, signature),
    };

    if let Err(err) = &result {
        debug!("ed25519 signature rejected ({mode:?}): {err}");
    }

    result
}

/// Checks `S ≥ ℓ` and derives `k = SHA-512(R || A || M) mod ℓ`.
fn challenge(
    public: &PublicKey,
    message: &[u8],
    signature: &Signature,
) -> Result<(Scalar, Scalar)> {
    let s = Scalar::from_bytes(signature.s_bytes());
    if !s.is_minimal() {
        return Err(Error::NonCanonicalScalar);
    }

    let k = Scalar::reduce(&sha512(&[&signature.0[..32], public.as_bytes(), message]));

    Ok((k, s))
}

/// Cofactorless check: `encode(S·B − k·A) == R`.
fn verify_strict(public: &PublicKey, message: &[u8], signature: &Signature) -> Result<()> {
    // Top three bits of S set means S ≥ 2²⁵³ > ℓ.
    if signature.0[63] & 0xe0 != 0 {
        return Err(Error::NonCanonicalScalar);
    }

    let a = ExtendedPoint::from_bytes(public.as_bytes())?;
    let (k, s) = challenge(public, message, signature)?;

    let r = ProjectivePoint::double_scalar_mult_vartime(&k, &-a, &s);

    if r.to_bytes().ct_eq(&signature.r_bytes()) == 1 {
        Ok(())
    } else {
        Err(Error::InvalidSignature)
    }
}

/// Cofactored check: `[8](S·B − k·A − R) == 𝒪`, with lenient decoding.
fn verify_cofactored(public: &PublicKey, message: &[u8], signature: &Signature) -> Result<()> {
    let a = ExtendedPoint::from_bytes_zip215(public.as_bytes())?;
    let r = ExtendedPoint::from_bytes_zip215(&signature.r_bytes())?;
    let (k, s) = challenge(public, message, signature)?;

    let sb_minus_ka = ProjectivePoint::double_scalar_mult_vartime(&k, &-a, &s).to_extended();
    let difference = (&sb_minus_ka - &r.to_cached()).to_extended();

    if difference.mul_by_cofactor().is_identity() {
        Ok(())
    } else {
        Err(Error::InvalidSignature)
    }
}
