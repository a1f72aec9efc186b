use alloc::vec::Vec;

use super::{check_aligned, check_minimal, find_marker, prefix, BitOrder, BitString, Padding};
use crate::bits::Word;
use crate::error::{Error, PaddingFault, Result};
use crate::utils::next_multiple_of;

const ORDER: BitOrder = BitOrder::Msb;
const LENGTH_BYTES: usize = 8;

/// Merkle–Damgård strengthening as in FIPS 180-4 (64-bit length field).
///
/// A `1` bit, then `0` bits until 8 bytes short of a block boundary, then the message
/// length in bits as a big-endian `u64`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sha2Padding;

impl Padding for Sha2Padding {
    fn name(&self) -> &'static str {
        "SHA-2"
    }

    fn pad(&self, data: &[u8], blocksize: usize, bitlength: Option<usize>) -> Vec<u8> {
        assert!(blocksize > 0, "block size must be non-zero");
        let mut s = BitString::truncated(data, bitlength, ORDER, blocksize + LENGTH_BYTES);
        let length = s.bits() as u64;
        s.push(true);
        s.zero_fill_to(next_multiple_of(s.byte_len() + LENGTH_BYTES, blocksize) - LENGTH_BYTES);
        s.extend_from_slice(&length.to_be_bytes());
        s.into_bytes()
    }

    fn unpad(&self, data: &[u8], blocksize: Option<usize>) -> Result<(Vec<u8>, usize)> {
        let scheme = self.name();
        if data.len() <= LENGTH_BYTES {
            return Err(Error::padding(
                scheme,
                PaddingFault::TooShort { len: data.len() },
            ));
        }
        check_aligned(scheme, data, blocksize)?;

        let (body, length) = data.split_at(data.len() - LENGTH_BYTES);
        let stored = u64::from_be_slice(length);
        let bits = find_marker(body, ORDER, 0xff)
            .ok_or_else(|| Error::padding(scheme, PaddingFault::MissingMarker))?;
        if bits as u64 != stored {
            return Err(Error::padding(
                scheme,
                PaddingFault::LengthMismatch {
                    stored,
                    found: bits as u64,
                },
            ));
        }
        check_minimal(scheme, bits + 1 + 8 * LENGTH_BYTES, data.len(), blocksize)?;
        Ok((prefix(body, bits, ORDER), bits))
    }
}
