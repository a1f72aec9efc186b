//! Bit-exact padding schemes.
//!
//! Every scheme works on byte strings that may carry a partial final byte: when a
//! `bitlength` is given, only the first `bitlength` bits of the input take part and the
//! unused bits of the last byte are cleared before anything is appended.
//!
//! The `10*`-family schemes number bits little-endian (the bit after a byte is bit 0 of
//! the next byte), as Keccak does. [`Sha2Padding`] numbers bits big-endian.
//!
//! Each `unpad` returns the shortest byte string holding the recovered message together
//! with its exact bit length. When a block size is supplied it also rejects inputs that
//! carry more padding than the scheme would ever produce.

mod pad10;
mod sha2;

use alloc::vec::Vec;
use core::fmt::Debug;

pub use pad10::{Pad0110Star1, Pad10Star, Pad10Star1};
pub use sha2::Sha2Padding;

use crate::error::{Error, PaddingFault, Result};
use crate::utils::ceil_div;

pub trait Padding: Clone + Debug {
    fn name(&self) -> &'static str;

    /// Pads the first `bitlength` bits of `data` (all of it if `None`) to a non-empty
    /// multiple of `blocksize` bytes.
    ///
    /// # Panics
    /// If `blocksize` is zero or `bitlength` exceeds `8 * data.len()`.
    fn pad(&self, data: &[u8], blocksize: usize, bitlength: Option<usize>) -> Vec<u8>;

    /// Inverse of [`pad`](Padding::pad): returns the message and its length in bits.
    fn unpad(&self, data: &[u8], blocksize: Option<usize>) -> Result<(Vec<u8>, usize)>;
}

/// Runtime selection of one of the four schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingScheme {
    Pad10Star,
    Pad10Star1,
    Pad0110Star1,
    Sha2,
}

impl PaddingScheme {
    pub const ALL: [PaddingScheme; 4] = [
        PaddingScheme::Pad10Star,
        PaddingScheme::Pad10Star1,
        PaddingScheme::Pad0110Star1,
        PaddingScheme::Sha2,
    ];
}

impl Padding for PaddingScheme {
    fn name(&self) -> &'static str {
        match self {
            PaddingScheme::Pad10Star => Pad10Star.name(),
            PaddingScheme::Pad10Star1 => Pad10Star1.name(),
            PaddingScheme::Pad0110Star1 => Pad0110Star1.name(),
            PaddingScheme::Sha2 => Sha2Padding.name(),
        }
    }

    fn pad(&self, data: &[u8], blocksize: usize, bitlength: Option<usize>) -> Vec<u8> {
        match self {
            PaddingScheme::Pad10Star => Pad10Star.pad(data, blocksize, bitlength),
            PaddingScheme::Pad10Star1 => Pad10Star1.pad(data, blocksize, bitlength),
            PaddingScheme::Pad0110Star1 => Pad0110Star1.pad(data, blocksize, bitlength),
            PaddingScheme::Sha2 => Sha2Padding.pad(data, blocksize, bitlength),
        }
    }

    fn unpad(&self, data: &[u8], blocksize: Option<usize>) -> Result<(Vec<u8>, usize)> {
        match self {
            PaddingScheme::Pad10Star => Pad10Star.unpad(data, blocksize),
            PaddingScheme::Pad10Star1 => Pad10Star1.unpad(data, blocksize),
            PaddingScheme::Pad0110Star1 => Pad0110Star1.unpad(data, blocksize),
            PaddingScheme::Sha2 => Sha2Padding.unpad(data, blocksize),
        }
    }
}

/// Which end of a byte the bit stream enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BitOrder {
    /// bit 0 first (Keccak)
    Lsb,
    /// bit 7 first (SHA-2)
    Msb,
}

impl BitOrder {
    /// Mask of the `i`-th bit of a byte in stream order.
    #[inline(always)]
    pub(crate) fn bit(self, i: usize) -> u8 {
        debug_assert!(i < 8);
        match self {
            BitOrder::Lsb => 1 << i,
            BitOrder::Msb => 0x80 >> i,
        }
    }

    /// Mask keeping the first `r` bits of a byte in stream order, `0 < r < 8`.
    #[inline(always)]
    fn leading(self, r: usize) -> u8 {
        debug_assert!(0 < r && r < 8);
        match self {
            BitOrder::Lsb => (1u8 << r) - 1,
            BitOrder::Msb => !(0xffu8 >> r),
        }
    }

    /// Stream position of the last set bit within a non-zero byte.
    #[inline(always)]
    fn last_set(self, byte: u8) -> usize {
        debug_assert!(byte != 0);
        match self {
            BitOrder::Lsb => 7 - byte.leading_zeros() as usize,
            BitOrder::Msb => 7 - byte.trailing_zeros() as usize,
        }
    }
}

/// An append-only bit string used while building a padding.
pub(crate) struct BitString {
    bytes: Vec<u8>,
    bits: usize,
    order: BitOrder,
}

impl BitString {
    /// The first `bitlength` bits of `data`, room reserved for `reserve` more bytes.
    pub(crate) fn truncated(
        data: &[u8],
        bitlength: Option<usize>,
        order: BitOrder,
        reserve: usize,
    ) -> Self {
        let bits = bitlength.unwrap_or(data.len() * 8);
        assert!(
            bits <= data.len() * 8,
            "bit length {} exceeds the {} bits of input",
            bits,
            data.len() * 8
        );
        let len = ceil_div(bits, 8);
        let mut bytes = Vec::with_capacity(len + reserve);
        bytes.extend_from_slice(&data[..len]);
        mask_tail(&mut bytes, bits, order);
        Self { bytes, bits, order }
    }

    pub(crate) fn push(&mut self, bit: bool) {
        let r = self.bits % 8;
        if r == 0 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(last) = self.bytes.last_mut() {
                *last |= self.order.bit(r);
            }
        }
        self.bits += 1;
    }

    #[inline(always)]
    pub(crate) fn bits(&self) -> usize {
        self.bits
    }

    #[inline(always)]
    pub(crate) fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    #[inline(always)]
    pub(crate) fn is_byte_aligned(&self) -> bool {
        self.bits % 8 == 0
    }

    /// Appends zero bytes up to `len` bytes in total.
    pub(crate) fn zero_fill_to(&mut self, len: usize) {
        debug_assert!(len >= self.bytes.len());
        self.bytes.resize(len, 0);
        self.bits = len * 8;
    }

    /// Sets the final bit of the last byte.
    pub(crate) fn set_final_bit(&mut self) {
        let mask = self.order.bit(7);
        if let Some(last) = self.bytes.last_mut() {
            *last |= mask;
        }
    }

    pub(crate) fn extend_from_slice(&mut self, bytes: &[u8]) {
        debug_assert!(self.is_byte_aligned());
        self.bytes.extend_from_slice(bytes);
        self.bits += bytes.len() * 8;
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Rejects empty and misaligned input.
pub(crate) fn check_aligned(
    scheme: &'static str,
    data: &[u8],
    blocksize: Option<usize>,
) -> Result<()> {
    if data.is_empty() {
        return Err(Error::padding(scheme, PaddingFault::Empty));
    }
    match blocksize {
        Some(blocksize) if blocksize == 0 || data.len() % blocksize != 0 => Err(Error::padding(
            scheme,
            PaddingFault::NotBlockAligned {
                len: data.len(),
                blocksize,
            },
        )),
        _ => Ok(()),
    }
}

/// Rejects input longer than the shortest padding of `min_bits` bits would be.
pub(crate) fn check_minimal(
    scheme: &'static str,
    min_bits: usize,
    len: usize,
    blocksize: Option<usize>,
) -> Result<()> {
    match blocksize {
        Some(blocksize) if ceil_div(min_bits, 8) + blocksize - 1 < len => {
            Err(Error::padding(scheme, PaddingFault::NonMinimal))
        }
        _ => Ok(()),
    }
}

/// Stream position of the last set bit of `bytes`, the final byte masked by `last_mask` first.
pub(crate) fn find_marker(bytes: &[u8], order: BitOrder, last_mask: u8) -> Option<usize> {
    let (&last, rest) = bytes.split_last()?;
    let last = last & last_mask;
    if last != 0 {
        return Some(rest.len() * 8 + order.last_set(last));
    }
    let i = rest.iter().rposition(|&b| b != 0)?;
    Some(i * 8 + order.last_set(rest[i]))
}

#[inline(always)]
pub(crate) fn bit_at(bytes: &[u8], pos: usize, order: BitOrder) -> bool {
    bytes[pos / 8] & order.bit(pos % 8) != 0
}

/// The shortest byte string holding the first `bits` bits of `bytes`, other bits cleared.
pub(crate) fn prefix(bytes: &[u8], bits: usize, order: BitOrder) -> Vec<u8> {
    let mut out = bytes[..ceil_div(bits, 8)].to_vec();
    mask_tail(&mut out, bits, order);
    out
}

/// Clears the bits beyond `bits` in the last byte; `bytes` holds exactly `ceil(bits / 8)`.
#[inline(always)]
fn mask_tail(bytes: &mut [u8], bits: usize, order: BitOrder) {
    let r = bits % 8;
    if r > 0 {
        bytes[bits / 8] &= order.leading(r);
    }
}
