//! The Merkle–Damgård construction and SHA-2-224/256 built with it.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::bits::Word;
use crate::padding::{Padding, Sha2Padding};

/// A compression function `h' = c(h, m)` over a fixed chaining value and block size.
pub trait Compression: Clone + Debug {
    const STATE_BYTES: usize;
    const BLOCK_BYTES: usize;

    /// Initial chaining value, `STATE_BYTES` long.
    fn iv(&self) -> Vec<u8>;

    /// # Panics
    /// If `chaining` is not `STATE_BYTES` or `block` not `BLOCK_BYTES` long.
    fn compress(&self, chaining: &mut [u8], block: &[u8]);
}

/// Pads the whole message to whole blocks and chains the compression function over them,
/// starting from its IV.
#[derive(Clone, Debug)]
pub struct MerkleDamgard<C: Compression, D: Padding> {
    compression: C,
    padding: D,
}

impl<C: Compression, D: Padding> MerkleDamgard<C, D> {
    pub fn new(compression: C, padding: D) -> Self {
        Self {
            compression,
            padding,
        }
    }

    /// Final chaining value for the first `bitlength` bits of `data` (all of it if `None`).
    pub fn hash_bits(&self, data: &[u8], bitlength: Option<usize>) -> Vec<u8> {
        let padded = self.padding.pad(data, C::BLOCK_BYTES, bitlength);
        let mut value = self.compression.iv();
        for block in padded.chunks_exact(C::BLOCK_BYTES) {
            self.compression.compress(&mut value, block);
        }
        value
    }

    #[inline(always)]
    pub fn hash(&self, data: &[u8]) -> Vec<u8> {
        self.hash_bits(data, None)
    }
}

const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

const H256_INIT: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

const H224_INIT: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotr(7) ^ x.rotr(18) ^ x.shr(3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotr(17) ^ x.rotr(19) ^ x.shr(10)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotr(2) ^ x.rotr(13) ^ x.rotr(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotr(6) ^ x.rotr(11) ^ x.rotr(25)
}

#[inline(always)]
fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

#[inline(always)]
fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// The SHA-256 compression function: a block cipher keyed by the message block,
/// in Davies–Meyer mode. SHA-224 differs only in its IV.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sha256Compression {
    iv: [u32; 8],
}

impl Sha256Compression {
    pub const fn sha256() -> Self {
        Self { iv: H256_INIT }
    }

    pub const fn sha224() -> Self {
        Self { iv: H224_INIT }
    }
}

impl Compression for Sha256Compression {
    const STATE_BYTES: usize = 32;
    const BLOCK_BYTES: usize = 64;

    fn iv(&self) -> Vec<u8> {
        let mut out = alloc::vec![0u8; Self::STATE_BYTES];
        for (word, bytes) in self.iv.iter().zip(out.chunks_exact_mut(4)) {
            word.write_be(bytes);
        }
        out
    }

    fn compress(&self, chaining: &mut [u8], block: &[u8]) {
        assert_eq!(chaining.len(), Self::STATE_BYTES, "chaining value length");
        assert_eq!(block.len(), Self::BLOCK_BYTES, "block length");

        let mut w = [0u32; 64];
        for (w, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
            *w = u32::from_be_slice(bytes);
        }
        for i in 16..64 {
            w[i] = w[i - 16]
                .wrapping_add(small_sigma0(w[i - 15]))
                .wrapping_add(w[i - 7])
                .wrapping_add(small_sigma1(w[i - 2]));
        }

        let mut h = [0u32; 8];
        for (h, bytes) in h.iter_mut().zip(chaining.chunks_exact(4)) {
            *h = u32::from_be_slice(bytes);
        }

        let mut r = h;
        for i in 0..64 {
            let t1 = r[7]
                .wrapping_add(big_sigma1(r[4]))
                .wrapping_add(ch(r[4], r[5], r[6]))
                .wrapping_add(K256[i])
                .wrapping_add(w[i]);
            let t2 = big_sigma0(r[0]).wrapping_add(maj(r[0], r[1], r[2]));
            r = [
                t1.wrapping_add(t2),
                r[0],
                r[1],
                r[2],
                r[3].wrapping_add(t1),
                r[4],
                r[5],
                r[6],
            ];
        }

        for ((h, r), bytes) in h.iter().zip(r).zip(chaining.chunks_exact_mut(4)) {
            h.wrapping_add(r).write_be(bytes);
        }
    }
}

pub fn sha2_256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&MerkleDamgard::new(Sha256Compression::sha256(), Sha2Padding).hash(data));
    out
}

pub fn sha2_224(data: &[u8]) -> [u8; 28] {
    let mut out = [0u8; 28];
    out.copy_from_slice(
        &MerkleDamgard::new(Sha256Compression::sha224(), Sha2Padding).hash(data)[..28],
    );
    out
}
