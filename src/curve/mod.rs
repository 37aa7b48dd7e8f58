//! Edwards25519 arithmetic engine.
//!
//! Everything the signature and key-exchange layers compute goes through
//! this module. It is split bottom-up:
//!
//! - `field`
//!   Arithmetic modulo `p = 2²⁵⁵ − 19` on ten signed limbs, with carries
//!   deferred until a product forces them.
//!
//! - `group`
//!   Curve points in extended, projective, completed, cached and
//!   precomputed coordinates, the conversions between them, compressed
//!   encoding and decoding, fixed-base multiplication and the
//!   variable-time double-scalar multiplication used for verification.
//!
//! - `scalar`
//!   Integers modulo the group order `ℓ`: wide reduction, fused
//!   multiply-add, canonicity check and the signed sliding-window digits.
//!
//! - `constants`
//!   `ℓ`, `d`, `2d`, `√−1`, the base point and its read-only tables.
//!
//! - `ct`
//!   Branch-free comparisons for the constant-time paths.
//!
//! Every value is plain data. Operations return fresh values and the only
//! shared state is the pair of base point tables, built once and never
//! written again, so the engine can be used from any number of threads.
//!
//! The engine itself never hashes; hashing is the caller's business.

pub mod constants;
pub(crate) mod ct;
pub mod field;
pub mod group;
pub mod scalar;

pub use constants::{BASE_POINT, BASE_POINT_COMPRESSED, ORDER};
pub use field::FieldElement;
pub use group::{CachedPoint, CompletedPoint, ExtendedPoint, PrecomputedPoint, ProjectivePoint};
pub use scalar::Scalar;
