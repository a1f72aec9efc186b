//! Recoverable failures.
//!
//! Only data errors are reported through [`Error`]: input that does not carry valid
//! padding, and AEAD tags that do not authenticate. Misuse of the API (oversized
//! blocks, squeezing before finalization, impossible parameters) panics instead.

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input of an unpad operation is not a valid padding of any message.
    #[error("data does not satisfy {scheme} padding: {reason}")]
    MalformedPadding {
        scheme: &'static str,
        reason: PaddingFault,
    },
    /// The supplied tag does not match the recomputed one. No plaintext is released.
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,
}

/// The specific way in which padded data was found to be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaddingFault {
    #[error("input is empty")]
    Empty,
    #[error("length {len} is not a multiple of the block size {blocksize}")]
    NotBlockAligned { len: usize, blocksize: usize },
    #[error("input of {len} bytes is too short to hold the padding")]
    TooShort { len: usize },
    #[error("no terminating marker bit found")]
    MissingMarker,
    #[error("domain separation suffix is missing")]
    MissingSuffix,
    #[error("stored bit length {stored} does not match the marker position {found}")]
    LengthMismatch { stored: u64, found: u64 },
    #[error("more padding than necessary")]
    NonMinimal,
}

impl Error {
    pub(crate) fn padding(scheme: &'static str, reason: PaddingFault) -> Self {
        Error::MalformedPadding { scheme, reason }
    }
}
