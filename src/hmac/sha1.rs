//! SHA-1 based HMAC.
//!
//! Only here for interoperability with RFC 5869's SHA-1 vectors and legacy
//! protocols; prefer [`super::sha256::Hmac`].

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use ::sha1::Sha1;
use hmac::Mac;
use zeroize::Zeroize;

use crate::errors::HmacError;

/// SHA-1 based HMAC.
#[derive(Clone)]
pub struct Hmac(hmac::Hmac<Sha1>);

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
    const LEN: usize = 20;
}

#[cfg(test)]
mod tests {
    use cryptraits::{convert::Len, hmac::Hmac as _};
    use hex_literal::hex;
    use zeroize::Zeroize;

    use super::Hmac;

    // RFC 2202, test case 1.
    #[test]
    fn it_should_match_known_tag() {
        let mut mac = Hmac::new_from_slice(&[0x0b; 20]).unwrap();
        mac.update(b"Hi There");

        let tag = mac.finalize();
        assert_eq!(tag.len(), Hmac::LEN);
        assert_eq!(tag, hex!("b617318655057264e28bc0b6fb378c8ef146be00"));
    }

    // RFC 2202, test case 2, fed in two pieces.
    #[test]
    fn it_should_verify_split_input() {
        let mut mac = Hmac::new_from_slice(b"Jefe").unwrap();
        mac.update(b"what do ya want ");
        mac.update(b"for nothing?");

        let mut tag = hex!("effcdf6ae5eb2fa2d27416d5f184df9c259a7c79");
        assert!(mac.clone().verify_slice(&tag).is_ok());

        tag[0] ^= 1;
        assert_eq!(
            mac.verify_slice(&tag),
            Err(crate::errors::HmacError::MacError)
        );
    }

    #[test]
    fn zeroize_discards_absorbed_input() {
        let mut mac = Hmac::new_from_slice(&[0x0b; 20]).unwrap();
        mac.update(b"secret input that must not survive");
        mac.zeroize();
        mac.update(b"Hi There");

        assert_eq!(mac.finalize(), hex!("b617318655057264e28bc0b6fb378c8ef146be00"));
    }
}
