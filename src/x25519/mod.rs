//! X25519 key exchange (RFC 7748).
//!
//! The Montgomery ladder runs on the same field arithmetic as the Edwards
//! engine. Ed25519 keys can be reused for key exchange through
//! [`convert_public_key`] and [`convert_private_key`], which follow the
//! birational map between the two curve models.
//!
//! ## Structure
//!
//! - `core`
//!   Scalar clamping, the ladder, and the Ed25519 key conversions.

mod core;

pub use core::*;
