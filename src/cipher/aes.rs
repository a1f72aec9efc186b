//! AES-256 (FIPS 197).
//!
//! The state is the 16-byte block itself, in input order: byte `r + 4c` is row `r` of
//! column `c`. The S-box and its inverse are derived at compile time from inversion in
//! `GF(2^8) = GF(2)[x] / (x^8 + x^4 + x^3 + x + 1)` followed by the affine map.

use array_init::array_init;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::BlockCipher;

pub const BLOCK_BYTES: usize = 16;
pub const KEY_BYTES: usize = 32;

const ROUNDS: usize = 14;
/// `4 * (ROUNDS + 1)` words of 32 bits
const SCHEDULE_WORDS: usize = 4 * (ROUNDS + 1);
const KEY_WORDS: usize = KEY_BYTES / 4;

pub type Block = [u8; BLOCK_BYTES];

/// Multiplication in `GF(2^8)`.
const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0;
    while b != 0 {
        if b & 1 != 0 {
            p ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= 0x1b;
        }
        b >>= 1;
    }
    p
}

/// `x^254`, the multiplicative inverse for `x != 0`, and `0` for `0`.
const fn gf_inv(x: u8) -> u8 {
    let (mut r, mut base, mut e) = (1u8, x, 254u32);
    while e > 0 {
        if e & 1 != 0 {
            r = gf_mul(r, base);
        }
        base = gf_mul(base, base);
        e >>= 1;
    }
    r
}

pub const SBOX: [u8; 256] = {
    let mut t = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let v = gf_inv(i as u8);
        // affine map over GF(2)
        t[i] = v ^ v.rotate_left(1) ^ v.rotate_left(2) ^ v.rotate_left(3) ^ v.rotate_left(4);
        t[i] ^= 0x63;
        i += 1;
    }
    t
};

pub const INV_SBOX: [u8; 256] = {
    let mut t = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        t[SBOX[i] as usize] = i as u8;
        i += 1;
    }
    t
};

const MIX: [[u8; 4]; 4] = [[2, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]];

const INV_MIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

const RCON: [u8; 7] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40];

#[inline(always)]
fn sub_word(w: u32) -> u32 {
    u32::from_be_bytes(w.to_be_bytes().map(|b| SBOX[b as usize]))
}

#[inline(always)]
fn sub_bytes(s: &Block, table: &[u8; 256]) -> Block {
    s.map(|b| table[b as usize])
}

/// Row `r` moves `r` columns to the left.
#[inline(always)]
fn shift_rows(s: &Block) -> Block {
    array_init(|i| s[i % 4 + 4 * ((i / 4 + i % 4) % 4)])
}

#[inline(always)]
fn inv_shift_rows(s: &Block) -> Block {
    array_init(|i| s[i % 4 + 4 * ((i / 4 + 4 - i % 4) % 4)])
}

/// Every column is multiplied by `m` over `GF(2^8)`.
#[inline(always)]
fn mix_columns(s: &Block, m: &[[u8; 4]; 4]) -> Block {
    array_init(|i| {
        let (r, c) = (i % 4, i / 4);
        (0..4).fold(0, |acc, k| acc ^ gf_mul(m[r][k], s[k + 4 * c]))
    })
}

/// The expanded AES-256 key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    words: [u32; SCHEDULE_WORDS],
}

impl RoundKeys {
    /// # Panics
    /// If `key` is not [`KEY_BYTES`] long.
    pub fn new(key: &[u8]) -> Self {
        assert_eq!(key.len(), KEY_BYTES, "AES-256 takes a {}-byte key", KEY_BYTES);
        let mut w = [0u32; SCHEDULE_WORDS];
        for (w, bytes) in w.iter_mut().zip(key.chunks_exact(4)) {
            *w = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        for i in KEY_WORDS..SCHEDULE_WORDS {
            let mut t = w[i - 1];
            if i % KEY_WORDS == 0 {
                t = sub_word(t.rotate_left(8)) ^ (u32::from(RCON[i / KEY_WORDS - 1]) << 24);
            } else if i % KEY_WORDS == 4 {
                t = sub_word(t);
            }
            w[i] = w[i - KEY_WORDS] ^ t;
        }
        Self { words: w }
    }

    #[inline(always)]
    fn add_round_key(&self, s: &mut Block, round: usize) {
        for (c, w) in self.words[4 * round..4 * round + 4].iter().enumerate() {
            for (b, k) in s[4 * c..4 * c + 4].iter_mut().zip(w.to_be_bytes()) {
                *b ^= k;
            }
        }
    }

    pub fn encrypt(&self, block: &mut Block) {
        let mut s = *block;
        self.add_round_key(&mut s, 0);
        for round in 1..ROUNDS {
            s = mix_columns(&shift_rows(&sub_bytes(&s, &SBOX)), &MIX);
            self.add_round_key(&mut s, round);
        }
        s = shift_rows(&sub_bytes(&s, &SBOX));
        self.add_round_key(&mut s, ROUNDS);
        *block = s;
        s.zeroize();
    }

    pub fn decrypt(&self, block: &mut Block) {
        let mut s = *block;
        self.add_round_key(&mut s, ROUNDS);
        s = sub_bytes(&inv_shift_rows(&s), &INV_SBOX);
        for round in (1..ROUNDS).rev() {
            self.add_round_key(&mut s, round);
            s = sub_bytes(&inv_shift_rows(&mix_columns(&s, &INV_MIX)), &INV_SBOX);
        }
        self.add_round_key(&mut s, 0);
        *block = s;
        s.zeroize();
    }
}

/// AES-256 as a [`BlockCipher`]; the key is expanded on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Aes256;

fn with_block(block: &mut [u8], f: impl FnOnce(&mut Block)) {
    assert_eq!(
        block.len(),
        BLOCK_BYTES,
        "AES works on {}-byte blocks",
        BLOCK_BYTES
    );
    let mut s = [0u8; BLOCK_BYTES];
    s.copy_from_slice(block);
    f(&mut s);
    block.copy_from_slice(&s);
    s.zeroize();
}

impl BlockCipher for Aes256 {
    const BLOCK_BYTES: usize = BLOCK_BYTES;
    const KEY_BYTES: usize = KEY_BYTES;

    fn encrypt_block(&self, block: &mut [u8], key: &[u8]) {
        let keys = RoundKeys::new(key);
        with_block(block, |s| keys.encrypt(s));
    }

    fn decrypt_block(&self, block: &mut [u8], key: &[u8]) {
        let keys = RoundKeys::new(key);
        with_block(block, |s| keys.decrypt(s));
    }
}
