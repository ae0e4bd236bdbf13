//! HMAC-based extract-and-expand key derivation (HKDF, RFC 5869).
//!
//! The HMAC is a capability supplied by the caller: anything implementing
//! [`cryptraits::hmac::Hmac`] and [`cryptraits::convert::Len`] can drive
//! [`kdf::hkdf`]. Adapters for SHA-1, SHA-256 and SHA-512 live in [`hmac`].
//!
//! ```
//! let okm = hkdfs::kdf::sha256::derive(42, b"input key material", Some(b"salt"), None).unwrap();
//! assert_eq!(okm.len(), 42);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod errors;
pub mod hmac;
pub mod kdf;

pub use errors::{HmacError, KdfError};
pub use kdf::hkdf::{derive, expand, extract, max_length, Hkdf};
