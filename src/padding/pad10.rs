//! The Keccak padding family: `10*`, `10*1` (pad10*1) and `0110*1` (SHA-3 suffix `01` + pad10*1).

use alloc::vec::Vec;

use super::{
    bit_at, check_aligned, check_minimal, find_marker, prefix, BitOrder, BitString, Padding,
};
use crate::error::{Error, PaddingFault, Result};
use crate::utils::next_multiple_of;

const ORDER: BitOrder = BitOrder::Lsb;

/// A single `1` bit followed by the fewest `0` bits reaching a block boundary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pad10Star;

/// `1`, then `0*`, then a final `1` in the last bit of the block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pad10Star1;

/// The bits `0`, `1` followed by [`Pad10Star1`], as used by the SHA-3 hash functions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pad0110Star1;

fn finish_10star(mut s: BitString, blocksize: usize) -> Vec<u8> {
    s.push(true);
    let len = s.byte_len();
    if len % blocksize != 0 {
        s.zero_fill_to(next_multiple_of(len, blocksize));
    }
    s.into_bytes()
}

fn finish_10star1(mut s: BitString, blocksize: usize) -> Vec<u8> {
    s.push(true);
    let len = s.byte_len();
    if len % blocksize != 0 {
        s.zero_fill_to(next_multiple_of(len, blocksize));
    } else if s.is_byte_aligned() {
        // the last bit of the block is taken by the first `1`
        s.zero_fill_to(len + blocksize);
    }
    s.set_final_bit();
    s.into_bytes()
}

/// Strips pad10*1 and returns the bit length of what precedes it.
fn strip_10star1(scheme: &'static str, data: &[u8], blocksize: Option<usize>) -> Result<usize> {
    check_aligned(scheme, data, blocksize)?;
    match data.last() {
        Some(last) if last & ORDER.bit(7) != 0 => {}
        _ => return Err(Error::padding(scheme, PaddingFault::MissingMarker)),
    }
    find_marker(data, ORDER, !ORDER.bit(7))
        .ok_or_else(|| Error::padding(scheme, PaddingFault::MissingMarker))
}

impl Padding for Pad10Star {
    fn name(&self) -> &'static str {
        "10*"
    }

    fn pad(&self, data: &[u8], blocksize: usize, bitlength: Option<usize>) -> Vec<u8> {
        assert!(blocksize > 0, "block size must be non-zero");
        finish_10star(
            BitString::truncated(data, bitlength, ORDER, blocksize),
            blocksize,
        )
    }

    fn unpad(&self, data: &[u8], blocksize: Option<usize>) -> Result<(Vec<u8>, usize)> {
        let scheme = self.name();
        check_aligned(scheme, data, blocksize)?;
        let bits = find_marker(data, ORDER, 0xff)
            .ok_or_else(|| Error::padding(scheme, PaddingFault::MissingMarker))?;
        check_minimal(scheme, bits + 1, data.len(), blocksize)?;
        Ok((prefix(data, bits, ORDER), bits))
    }
}

impl Padding for Pad10Star1 {
    fn name(&self) -> &'static str {
        "10*1"
    }

    fn pad(&self, data: &[u8], blocksize: usize, bitlength: Option<usize>) -> Vec<u8> {
        assert!(blocksize > 0, "block size must be non-zero");
        finish_10star1(
            BitString::truncated(data, bitlength, ORDER, blocksize + 1),
            blocksize,
        )
    }

    fn unpad(&self, data: &[u8], blocksize: Option<usize>) -> Result<(Vec<u8>, usize)> {
        let scheme = self.name();
        let bits = strip_10star1(scheme, data, blocksize)?;
        check_minimal(scheme, bits + 2, data.len(), blocksize)?;
        Ok((prefix(data, bits, ORDER), bits))
    }
}

impl Padding for Pad0110Star1 {
    fn name(&self) -> &'static str {
        "0110*1"
    }

    fn pad(&self, data: &[u8], blocksize: usize, bitlength: Option<usize>) -> Vec<u8> {
        assert!(blocksize > 0, "block size must be non-zero");
        let mut s = BitString::truncated(data, bitlength, ORDER, blocksize + 1);
        s.push(false);
        s.push(true);
        finish_10star1(s, blocksize)
    }

    fn unpad(&self, data: &[u8], blocksize: Option<usize>) -> Result<(Vec<u8>, usize)> {
        let scheme = self.name();
        let bits = strip_10star1(scheme, data, blocksize)?;
        check_minimal(scheme, bits + 2, data.len(), blocksize)?;
        if bits < 2 || bit_at(data, bits - 2, ORDER) || !bit_at(data, bits - 1, ORDER) {
            return Err(Error::padding(scheme, PaddingFault::MissingSuffix));
        }
        let bits = bits - 2;
        // suffix `01`, the leading `1` and the final `1`, plus one bit of slack
        check_minimal(scheme, bits + 5, data.len(), blocksize)?;
        Ok((prefix(data, bits, ORDER), bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use hex_literal::hex;

    #[test]
    fn pad_10star() {
        assert_eq!(Pad10Star.pad(b"", 4, None), [0x01, 0, 0, 0]);
        assert_eq!(Pad10Star.pad(&[0xff], 2, Some(3)), [0x0f, 0x00]);
        assert_eq!(Pad10Star.pad(&[0xff], 1, Some(7)), [0xff]);
        assert_eq!(Pad10Star.pad(&[0xab], 1, None), [0xab, 0x01]);
    }

    #[test]
    fn pad_10star1() {
        assert_eq!(Pad10Star1.pad(b"", 1, None), [0x81]);
        assert_eq!(Pad10Star1.pad(&[0xff], 1, None), [0xff, 0x81]);
        assert_eq!(Pad10Star1.pad(&[0x7f], 1, Some(7)), [0xff, 0x80]);
        assert_eq!(Pad10Star1.pad(&[0x7f], 2, Some(7)), [0xff, 0x80]);
        assert_eq!(Pad10Star1.pad(&[0x05], 3, Some(3)), [0x0d, 0x00, 0x80]);
    }

    #[test]
    fn pad_0110star1_is_sha3_padding() {
        let padded = Pad0110Star1.pad(b"", 136, None);
        assert_eq!(padded.len(), 136);
        assert_eq!(padded[0], 0x06);
        assert!(padded[1..135].iter().all(|&b| b == 0));
        assert_eq!(padded[135], 0x80);

        assert_eq!(Pad0110Star1.pad(&hex!("0102"), 3, None), hex!("010286"));
        assert_eq!(Pad0110Star1.pad(&hex!("010203"), 3, None), hex!("010203 060080"));
    }

    #[test]
    fn unpad_recovers_bits() {
        assert_eq!(Pad10Star.unpad(&[0x0f, 0x00], Some(2)), Ok((vec![0x07], 3)));
        assert_eq!(Pad10Star1.unpad(&[0xff, 0x80], Some(1)), Ok((vec![0x7f], 7)));
        assert_eq!(Pad10Star1.unpad(&[0x81], None), Ok((vec![], 0)));
        assert_eq!(Pad0110Star1.unpad(&hex!("010286"), Some(3)), Ok((hex!("0102").to_vec(), 16)));
    }

    #[test]
    fn unpad_rejects() {
        let err = |scheme, reason| Err(Error::MalformedPadding { scheme, reason });

        assert_eq!(Pad10Star.unpad(&[], None), err("10*", PaddingFault::Empty));
        assert_eq!(Pad10Star.unpad(&[0, 0], None), err("10*", PaddingFault::MissingMarker));
        assert_eq!(
            Pad10Star.unpad(&[1, 0, 0], Some(2)),
            err("10*", PaddingFault::NotBlockAligned { len: 3, blocksize: 2 })
        );
        assert_eq!(Pad10Star.unpad(&[0x01, 0x00], Some(1)), err("10*", PaddingFault::NonMinimal));
        // without a block size nothing is known about minimality
        assert_eq!(Pad10Star.unpad(&[0x01, 0x00], None), Ok((vec![], 0)));

        assert_eq!(Pad10Star1.unpad(&[0x01], None), err("10*1", PaddingFault::MissingMarker));
        assert_eq!(Pad10Star1.unpad(&[0x80], None), err("10*1", PaddingFault::MissingMarker));
        assert_eq!(
            Pad10Star1.unpad(&[0x81, 0x00, 0x80], Some(1)),
            err("10*1", PaddingFault::NonMinimal)
        );

        assert_eq!(Pad0110Star1.unpad(&[0x81], None), err("0110*1", PaddingFault::MissingSuffix));
        // `11` instead of `01` before the marker
        assert_eq!(Pad0110Star1.unpad(&[0x87], None), err("0110*1", PaddingFault::MissingSuffix));
    }
}
