//! HKDF sha1.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::hkdf::{self, Hkdf};
use crate::{errors::KdfError, hmac::sha1::Hmac};

/// HKDF over HMAC-SHA1. Outputs at most 5100 bytes.
pub type Kdf = Hkdf<Hmac>;

/// Derives `length` bytes with HKDF-SHA1. See [`hkdf::derive`].
pub fn derive(
    length: usize,
    ikm: &[u8],
    salt: Option<&[u8]>,
    info: Option<&[u8]>,
) -> Result<Vec<u8>, KdfError> {
    hkdf::derive::<Hmac>(length, ikm, salt, info)
}
