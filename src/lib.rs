//! Edwards25519 arithmetic and the protocols built on it.
//!
//! This crate implements the twisted Edwards curve behind Ed25519 from
//! first principles: limb-based field arithmetic modulo `2²⁵⁵ − 19`, group
//! operations in several coordinate systems, and scalar arithmetic modulo
//! the group order `ℓ`. Signatures and key exchange are thin layers on top.
//!
//! # Module overview
//!
//! - `curve`
//!   The arithmetic engine: [`curve::FieldElement`], the point
//!   representations, [`curve::Scalar`] and the curve constants. Outputs are
//!   bit-for-bit identical to the ref10 reference implementation.
//!
//! - `ed25519`
//!   RFC 8032 key generation, signing, and verification, with a choice
//!   between strict and ZIP-215 validity rules.
//!
//! - `x25519`
//!   RFC 7748 Diffie–Hellman and conversion of Ed25519 keys to X25519 keys.
//!
//! - `error`
//!   The crate-wide [`Error`] type.
//!
//! # Design goals
//!
//! - No heap allocations in the arithmetic
//! - Constant-time handling of secret scalars
//! - Deterministic, platform-independent outputs
//! - Fixed-size array types so that length mistakes fail to compile
//!
//! SHA-512 comes from the `sha2` crate; the engine itself never hashes.

mod hash;

pub mod curve;
pub mod ed25519;
pub mod error;
pub mod x25519;

pub use error::{Error, Result};
