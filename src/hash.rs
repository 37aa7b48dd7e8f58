//! SHA-512 boundary.
//!
//! The curve engine never hashes. Ed25519 and the Ed25519-to-X25519 key
//! conversion need a 64-byte digest, which is supplied by the `sha2` crate
//! through this single function so that every caller hashes the same way.

use sha2::{Digest, Sha512};

/// Hashes the concatenation of `parts` with SHA-512.
///
/// Taking the input in pieces avoids building a temporary buffer for the
/// `R || A || M` style inputs used during signing and verification.
pub(crate) fn sha512(parts: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }

    let mut digest = [0u8; 64];
    digest.copy_from_slice(&hasher.finalize());
    digest
}
