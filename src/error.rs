//! Error types shared by the curve engine and the protocols built on it.
//!
//! Field and scalar arithmetic are total functions and never fail. The only
//! failures that can be observed at runtime come from decoding untrusted
//! bytes (points, scalars) and from the signature verification equation.
//!
//! Wrong-length inputs are not represented here: every API takes fixed-size
//! arrays, and the few slice-based constructors treat a length mismatch as a
//! caller bug and panic.

use thiserror::Error;

/// Errors that can occur while decoding or verifying Edwards25519 data.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The 32 bytes do not encode a point on the curve.
    ///
    /// Raised when `x² = (y² − 1) / (d·y² + 1)` has no square root, or, for
    /// strict decoding, when `y` is not canonical or the sign bit asks for a
    /// negative zero.
    #[error("invalid point encoding")]
    InvalidEncoding,

    /// A scalar that must be reduced modulo `ℓ` is not.
    #[error("scalar is not canonically reduced modulo the group order")]
    NonCanonicalScalar,

    /// The signature does not satisfy the verification equation.
    #[error("signature verification failed")]
    InvalidSignature,
}

/// Result type for fallible Edwards25519 operations.
pub type Result<T> = core::result::Result<T, Error>;
