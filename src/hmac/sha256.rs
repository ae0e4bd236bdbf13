//! SHA-256 based HMAC.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use hmac::Mac;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::errors::HmacError;

/// SHA-256 based HMAC.
#[derive(Clone)]
pub struct Hmac(hmac::Hmac<Sha256>);

/// Drops everything absorbed so far, back to the freshly keyed state.
impl Zeroize for Hmac {
    fn zeroize(&mut self) {
        Mac::reset(&mut self.0);
    }
}

impl cryptraits::hmac::Hmac for Hmac {
    type E = HmacError;

    fn new_from_slice(key: &[u8]) -> Result<Self, Self::E>
    where
        Self: Sized,
    {
        hmac::Hmac::new_from_slice(key)
            .map(Self)
            .or(Err(HmacError::InvalidLength))
    }

    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn verify_slice(self, tag: &[u8]) -> Result<(), Self::E> {
        self.0.verify_slice(tag).or(Err(HmacError::MacError))
    }

    fn finalize(self) -> Vec<u8> {
        self.0.finalize().into_bytes().to_vec()
    }
}

impl cryptraits::convert::Len for Hmac {
    const LEN: usize = 32;
}
