//! HMAC adapters implementing the `cryptraits` HMAC capability.
//!
//! Each adapter reports its tag size through [`cryptraits::convert::Len`],
//! which is the `HashLen` HKDF bounds its output by.

pub mod sha1;
pub mod sha256;
pub mod sha512;
