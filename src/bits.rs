//! Fixed-width words.
//!
//! [`Word`] is implemented for the unsigned integers that can serve as a Keccak lane
//! (`u8` through `u128`, i.e. `ℓ = 3..=7`) and as a SHA-2 word (`u32`).
//! Rotations are always taken modulo the word width.

use core::fmt::Debug;
use core::mem::size_of;
use core::ops::{BitAnd, BitOr, BitXor, BitXorAssign, Not};

use static_assertions::const_assert_eq;
use zeroize::Zeroize;

pub trait Word:
    Copy
    + Default
    + Eq
    + Debug
    + Zeroize
    + BitXor<Output = Self>
    + BitXorAssign
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
{
    /// Width in bits, `w = 2^ℓ`.
    const BITS: u32;
    const BYTES: usize;
    /// `ℓ = log2(w)`
    const LOG2_BITS: u32;
    const ZERO: Self;
    const ONE: Self;

    /// Rotate left by `n` bits (mod `BITS`).
    fn rotl(self, n: u32) -> Self;
    /// Rotate right by `n` bits (mod `BITS`).
    fn rotr(self, n: u32) -> Self;
    fn shr(self, n: u32) -> Self;
    fn wrapping_add(self, rhs: Self) -> Self;

    /// `bytes.len()` must be `BYTES`.
    fn from_le_slice(bytes: &[u8]) -> Self;
    fn write_le(self, out: &mut [u8]);
    /// `bytes.len()` must be `BYTES`.
    fn from_be_slice(bytes: &[u8]) -> Self;
    fn write_be(self, out: &mut [u8]);
}

macro_rules! impl_word {
    ($($t:ty => $log2:literal),* $(,)?) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const BYTES: usize = size_of::<$t>();
                const LOG2_BITS: u32 = $log2;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline(always)]
                fn rotl(self, n: u32) -> Self {
                    self.rotate_left(n)
                }

                #[inline(always)]
                fn rotr(self, n: u32) -> Self {
                    self.rotate_right(n)
                }

                #[inline(always)]
                fn shr(self, n: u32) -> Self {
                    self >> n
                }

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline(always)]
                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_le_bytes(buf)
                }

                #[inline(always)]
                fn write_le(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_le_bytes());
                }

                #[inline(always)]
                fn from_be_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_be_bytes(buf)
                }

                #[inline(always)]
                fn write_be(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_be_bytes());
                }
            }

            const_assert_eq!(<$t>::BITS, 1 << $log2);
        )*
    };
}

impl_word!(u8 => 3, u16 => 4, u32 => 5, u64 => 6, u128 => 7);
