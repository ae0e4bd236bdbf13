//! Key derivation.
//!
//! [`hkdf`] is generic over the HMAC; the other modules fix it to one hash.

pub mod hkdf;
pub mod sha1;
pub mod sha256;
pub mod sha512;
