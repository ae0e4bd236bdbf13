//! Crate custom errors.

use cryptraits_macros::Error;

/// KDF algorithm error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KdfError {
    /// Requested output is longer than `255 * HashLen` for the HMAC in use.
    InvalidLength { requested: usize, maximum: usize },

    /// The HMAC returned a tag shorter than the `HashLen` it advertises.
    ShortTag { expected: usize, actual: usize },

    /// The underlying HMAC refused to run.
    Hmac(HmacError),
}

/// HMAC algorithm errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HmacError {
    InvalidLength,
    MacError,
}

impl From<HmacError> for KdfError {
    fn from(e: HmacError) -> Self {
        Self::Hmac(e)
    }
}
