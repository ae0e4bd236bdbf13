//! HKDF sha512.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::hkdf::{self, Hkdf};
use crate::{errors::KdfError, hmac::sha512::Hmac};

/// HKDF over HMAC-SHA512. Outputs at most 16320 bytes.
pub type Kdf = Hkdf<Hmac>;

/// Derives `length` bytes with HKDF-SHA512. See [`hkdf::derive`].
pub fn derive(
    length: usize,
    ikm: &[u8],
    salt: Option<&[u8]>,
    info: Option<&[u8]>,
) -> Result<Vec<u8>, KdfError> {
    hkdf::derive::<Hmac>(length, ikm, salt, info)
}
