//! Ed25519 signatures (RFC 8032).
//!
//! Key generation, signing and verification on top of the `curve` engine,
//! with SHA-512 supplied by the `sha2` crate.
//!
//! ## Verification rules
//!
//! Two rule sets are available through [`VerificationMode`]:
//!
//! - **Strict**, the default and what [`verify`] uses. The public key must
//!   be a canonical encoding, `S` must be below `ℓ`, and `S·B − k·A` must
//!   re-encode to exactly the `R` bytes of the signature.
//!
//! - **ZIP-215**, used by consensus systems that need every implementation
//!   to agree on validity. `A` and `R` are decoded leniently, `S` must still
//!   be below `ℓ`, and the equation is checked after multiplying by the
//!   cofactor, so small-order components are ignored.
//!
//! Both derive the challenge from the bytes as received, never from
//! re-encoded points.
//!
//! ## Timing
//!
//! Signing uses constant-time fixed-base multiplication. Verification
//! handles public data only and uses the faster variable-time path.

mod keys;
mod sign;
mod verify;

pub use keys::{PrivateKey, PublicKey, Signature};
pub use sign::{generate_keypair, keypair_from_seed, sign};
pub use verify::{verify, verify_with, verify_zip215};

/// Which validity rules [`verify_with`] applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerificationMode {
    /// RFC 8032 cofactorless verification with canonical encodings.
    #[default]
    Strict,

    /// ZIP-215 cofactored verification with lenient point decoding.
    Zip215,
}
