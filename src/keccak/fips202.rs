//! SHA-3 hash functions and SHAKE extendable-output functions (FIPS 202), assembled from
//! [`KeccakF1600`], [`SpongeHash`] and the Keccak padding rules.
//!
//! SHA-3 appends the suffix `01` and SHAKE the suffix `1111` before pad10*1. SHA-3 uses
//! [`Pad0110Star1`], which carries its suffix itself; SHAKE absorbs its four suffix bits
//! through [`SpongeHash::final_absorb`] and pads with [`Pad10Star1`].

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::min;

use paste::paste;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::KeccakF1600;
use crate::padding::{Pad0110Star1, Pad10Star1};
use crate::sponge::SpongeHash;

pub trait Fips202Params {
    /// rate `r / 8`
    const RATE_BYTES: usize;
    /// digest length of the hash, or of the one-shot `digest` of the XOF
    const OUTPUT_BYTES: usize;
}

/// SHAKE domain suffix `1111`
const SHAKE_SUFFIX: u8 = 0x0f;
const SHAKE_SUFFIX_BITS: usize = 4;

macro_rules! sha3_impl {
    ($bits:literal, $rate:literal) => {
        paste! {
            pub struct [<Sha3_ $bits Params>];

            impl Fips202Params for [<Sha3_ $bits Params>] {
                const RATE_BYTES: usize = $rate;
                const OUTPUT_BYTES: usize = $bits / 8;
            }

            #[doc = "SHA3-" $bits ", streaming."]
            #[derive(Clone)]
            pub struct [<Sha3_ $bits>](SpongeHash<KeccakF1600, Pad0110Star1>);

            impl Default for [<Sha3_ $bits>] {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl [<Sha3_ $bits>] {
                pub const DIGEST_BYTES: usize = $bits / 8;

                pub fn new() -> Self {
                    Self(SpongeHash::new(
                        KeccakF1600::new(),
                        [<Sha3_ $bits Params>]::RATE_BYTES,
                        Pad0110Star1,
                    ))
                }

                #[inline(always)]
                pub fn update(&mut self, data: &[u8]) {
                    self.0.absorb(data);
                }

                pub fn finalize(mut self) -> [u8; $bits / 8] {
                    self.0.final_absorb(&[], None);
                    let mut digest = [0u8; $bits / 8];
                    self.0.squeeze_into(&mut digest);
                    digest
                }

                pub fn digest(data: &[u8]) -> [u8; $bits / 8] {
                    let mut h = Self::new();
                    h.update(data);
                    h.finalize()
                }
            }

            #[doc = "One-shot SHA3-" $bits "."]
            pub fn [<sha3_ $bits>](data: &[u8]) -> [u8; $bits / 8] {
                [<Sha3_ $bits>]::digest(data)
            }
        }
    };
}

sha3_impl!(224, 144);
sha3_impl!(256, 136);
sha3_impl!(384, 104);
sha3_impl!(512, 72);

macro_rules! shake_impl {
    ($bits:literal, $rate:literal) => {
        paste! {
            pub struct [<Shake $bits Params>];

            impl Fips202Params for [<Shake $bits Params>] {
                const RATE_BYTES: usize = $rate;
                const OUTPUT_BYTES: usize = $bits / 4;
            }

            #[doc = "SHAKE" $bits ", streaming."]
            #[derive(Clone)]
            pub struct [<Shake $bits>](SpongeHash<KeccakF1600, Pad10Star1>);

            impl Default for [<Shake $bits>] {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl [<Shake $bits>] {
                pub fn new() -> Self {
                    Self(SpongeHash::new(
                        KeccakF1600::new(),
                        [<Shake $bits Params>]::RATE_BYTES,
                        Pad10Star1,
                    ))
                }

                #[inline(always)]
                pub fn update(&mut self, data: &[u8]) {
                    self.0.absorb(data);
                }

                pub fn finalize_xof(mut self) -> XofReader {
                    self.0.final_absorb(&[SHAKE_SUFFIX], Some(SHAKE_SUFFIX_BITS));
                    XofReader::new(self.0)
                }

                /// The first `2 * security strength` bits of the output.
                pub fn digest(data: &[u8]) -> [u8; $bits / 4] {
                    let mut h = Self::new();
                    h.update(data);
                    let mut out = [0u8; $bits / 4];
                    h.finalize_xof().read(&mut out);
                    out
                }
            }

            #[doc = "One-shot SHAKE" $bits " with `n` bytes of output."]
            pub fn [<shake $bits>](data: &[u8], n: usize) -> Vec<u8> {
                let mut h = [<Shake $bits>]::new();
                h.update(data);
                h.finalize_xof().squeeze(n)
            }
        }
    };
}

shake_impl!(128, 168);
shake_impl!(256, 136);

/// Reads the output of a finalized SHAKE as one continuous stream.
///
/// Unlike [`SpongeHash::squeeze`], a read that ends inside a block keeps the rest of that
/// block for the next read.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct XofReader {
    hash: SpongeHash<KeccakF1600, Pad10Star1>,
    block: Vec<u8>,
    pos: usize,
}

impl XofReader {
    fn new(hash: SpongeHash<KeccakF1600, Pad10Star1>) -> Self {
        Self {
            hash,
            block: Vec::new(),
            pos: 0,
        }
    }

    pub fn read(&mut self, out: &mut [u8]) {
        let mut filled = 0;
        while filled < out.len() {
            if self.pos == self.block.len() {
                self.block.zeroize();
                self.block = self.hash.squeeze_block();
                self.pos = 0;
            }
            let n = min(out.len() - filled, self.block.len() - self.pos);
            out[filled..filled + n].copy_from_slice(&self.block[self.pos..self.pos + n]);
            filled += n;
            self.pos += n;
        }
    }

    pub fn squeeze(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.read(&mut out);
        out
    }
}
