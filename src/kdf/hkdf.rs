//! HKDF (RFC 5869) over an injected HMAC.
//!
//! The HMAC is any `PRF: Hmac + Len`: `Len::LEN` is the tag size (`HashLen`)
//! and bounds the output at `255 * HashLen` bytes.
//!
//! ```text
//! PRK  = HMAC(salt or 0^HashLen, IKM)
//! T(0) = empty
//! T(i) = HMAC(PRK, T(i-1) || info || i)      i = 1..=N, N = ceil(L / HashLen)
//! OKM  = first L bytes of T(1) || ... || T(N)
//! ```

use core::marker::PhantomData;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use cryptraits::{convert::Len, hmac::Hmac, kdf::Kdf as KdfTrait};
use tracing::{debug, instrument};
use zeroize::{Zeroize, Zeroizing};

use crate::errors::KdfError;

/// The block counter is a single byte.
const MAX_BLOCKS: usize = 255;

/// Longest output `PRF` can expand to: `255 * HashLen`.
pub fn max_length<PRF: Len>() -> usize {
    MAX_BLOCKS * PRF::LEN
}

fn check_length<PRF: Len>(requested: usize) -> Result<(), KdfError> {
    let maximum = max_length::<PRF>();

    if requested > maximum {
        debug!(requested, maximum, "rejecting HKDF output length");
        return Err(KdfError::InvalidLength { requested, maximum });
    }

    Ok(())
}

/// HMAC keyed by `key` over the concatenation of `parts`.
fn mac<PRF>(key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>, KdfError>
where
    PRF: Hmac,
    KdfError: From<PRF::E>,
{
    let mut prf = PRF::new_from_slice(key)?;

    for part in parts {
        prf.update(part);
    }

    Ok(prf.finalize())
}

/// HKDF-Extract. Compresses `ikm` into a `HashLen`-byte pseudorandom key.
///
/// A missing or empty salt is replaced with `HashLen` zero bytes.
#[instrument(level = "trace", skip_all, fields(has_salt = salt.is_some(), ikm_len = ikm.len()))]
pub fn extract<PRF>(salt: Option<&[u8]>, ikm: &[u8]) -> Result<Zeroizing<Vec<u8>>, KdfError>
where
    PRF: Hmac + Len,
    KdfError: From<PRF::E>,
{
    let prk = match salt {
        Some(salt) if !salt.is_empty() => mac::<PRF>(salt, &[ikm])?,
        _ => mac::<PRF>(&vec![0u8; PRF::LEN], &[ikm])?,
    };

    Ok(Zeroizing::new(prk))
}

/// HKDF-Expand. Fills `okm` with key material derived from `prk` and `info`.
///
/// Fails with [`KdfError::InvalidLength`] before touching the HMAC if
/// `okm` is longer than [`max_length`]. If the HMAC fails midway, or hands
/// back a tag shorter than `HashLen`, `okm` is zeroed, never left half written.
#[instrument(level = "trace", skip_all, fields(info_len = info.len(), okm_len = okm.len()))]
pub fn expand<PRF>(prk: &[u8], info: &[u8], okm: &mut [u8]) -> Result<(), KdfError>
where
    PRF: Hmac + Len,
    KdfError: From<PRF::E>,
{
    check_length::<PRF>(okm.len())?;

    if okm.is_empty() {
        return Ok(());
    }

    expand_blocks::<PRF>(prk, info, okm).map_err(|e| {
        okm.zeroize();
        e
    })
}

fn expand_blocks<PRF>(prk: &[u8], info: &[u8], okm: &mut [u8]) -> Result<(), KdfError>
where
    PRF: Hmac + Len,
    KdfError: From<PRF::E>,
{
    let mut previous = Zeroizing::new(Vec::new());

    for (i, chunk) in okm.chunks_mut(PRF::LEN).enumerate() {
        // At most 255 chunks after `check_length`.
        let counter = [(i + 1) as u8];

        let block = Zeroizing::new(mac::<PRF>(prk, &[previous.as_slice(), info, &counter])?);
        if block.len() < PRF::LEN {
            return Err(KdfError::ShortTag {
                expected: PRF::LEN,
                actual: block.len(),
            });
        }
        chunk.copy_from_slice(&block[..chunk.len()]);

        previous = block;
    }

    Ok(())
}

/// Derives `length` bytes of key material: extract, then expand.
///
/// `salt` defaults to `HashLen` zero bytes and `info` to the empty string.
#[instrument(
    level = "debug",
    skip_all,
    fields(okm_len = length, has_salt = salt.is_some(), has_info = info.is_some())
)]
pub fn derive<PRF>(
    length: usize,
    ikm: &[u8],
    salt: Option<&[u8]>,
    info: Option<&[u8]>,
) -> Result<Vec<u8>, KdfError>
where
    PRF: Hmac + Len,
    KdfError: From<PRF::E>,
{
    check_length::<PRF>(length)?;

    let prk = extract::<PRF>(salt, ikm)?;

    let mut okm = vec![0u8; length];
    expand::<PRF>(&prk, info.unwrap_or_default(), &mut okm)?;

    Ok(okm)
}

/// HKDF bound to one input keying material and salt.
///
/// Holds its inputs until dropped, then wipes them. Each
/// [`expand`](KdfTrait::expand) call re-runs the whole derivation.
pub struct Hkdf<PRF> {
    ikm: Vec<u8>,
    salt: Option<Vec<u8>>,

    _prf: PhantomData<PRF>,
}

impl<PRF> Zeroize for Hkdf<PRF> {
    fn zeroize(&mut self) {
        self.ikm.zeroize();
        self.salt.zeroize();
    }
}

impl<PRF> Drop for Hkdf<PRF> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<PRF> KdfTrait for Hkdf<PRF>
where
    PRF: Hmac + Len,
    KdfError: From<PRF::E>,
{
    type E = KdfError;

    fn new(salt: Option<&[u8]>, data: &[u8]) -> Self {
        Self {
            ikm: Vec::from(data),
            salt: salt.map(Vec::from),
            _prf: PhantomData,
        }
    }

    fn expand(&self, info: &[u8], okm: &mut [u8]) -> Result<(), Self::E> {
        check_length::<PRF>(okm.len())?;

        let prk = extract::<PRF>(self.salt.as_deref(), &self.ikm)?;
        expand::<PRF>(&prk, info, okm)
    }
}
