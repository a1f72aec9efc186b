//! ECB, CBC and CTR.
//!
//! Each mode owns its key, and its IV or initial counter block; the lengths are checked
//! against the block cipher when a message is processed. ECB and CBC work on whole
//! blocks only, CTR on messages of any length.

use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, BlockCipherMode};
use crate::utils::xor_in_place;

fn check_key<C: BlockCipher>(key: &[u8]) {
    assert_eq!(
        key.len(),
        C::KEY_BYTES,
        "key of {} bytes for a cipher with {}-byte keys",
        key.len(),
        C::KEY_BYTES
    );
}

fn check_block<C: BlockCipher>(what: &str, value: &[u8]) {
    assert_eq!(
        value.len(),
        C::BLOCK_BYTES,
        "{} of {} bytes for a cipher with {}-byte blocks",
        what,
        value.len(),
        C::BLOCK_BYTES
    );
}

fn check_aligned<C: BlockCipher>(data: &[u8]) {
    assert!(
        data.len() % C::BLOCK_BYTES == 0,
        "{} bytes is not a multiple of the {}-byte block",
        data.len(),
        C::BLOCK_BYTES
    );
}

/// Adds one to `counter`, read as a big-endian integer, modulo `2^(8 * len)`.
fn increment(counter: &mut [u8]) {
    for byte in counter.iter_mut().rev() {
        let (v, carry) = byte.overflowing_add(1);
        *byte = v;
        if !carry {
            break;
        }
    }
}

/// Electronic codebook: every block is encrypted on its own.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb {
    key: Vec<u8>,
}

impl Ecb {
    pub fn new(key: &[u8]) -> Self {
        Self { key: key.to_vec() }
    }

    fn each_block<C: BlockCipher>(&self, data: &[u8], f: impl Fn(&mut [u8])) -> Vec<u8> {
        check_key::<C>(&self.key);
        check_aligned::<C>(data);
        let mut out = data.to_vec();
        for block in out.chunks_exact_mut(C::BLOCK_BYTES) {
            f(block);
        }
        out
    }
}

impl BlockCipherMode for Ecb {
    fn name(&self) -> &'static str {
        "ECB"
    }

    fn encrypt<C: BlockCipher>(&self, cipher: &C, data: &[u8]) -> Vec<u8> {
        self.each_block::<C>(data, |block| cipher.encrypt_block(block, &self.key))
    }

    fn decrypt<C: BlockCipher>(&self, cipher: &C, data: &[u8]) -> Vec<u8> {
        self.each_block::<C>(data, |block| cipher.decrypt_block(block, &self.key))
    }
}

/// Cipher block chaining: each plaintext block is XORed with the previous ciphertext
/// block, the first with the IV, before encryption.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc {
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Cbc {
    pub fn new(key: &[u8], iv: &[u8]) -> Self {
        Self {
            key: key.to_vec(),
            iv: iv.to_vec(),
        }
    }

    fn check<C: BlockCipher>(&self, data: &[u8]) {
        check_key::<C>(&self.key);
        check_block::<C>("IV", &self.iv);
        check_aligned::<C>(data);
    }
}

impl BlockCipherMode for Cbc {
    fn name(&self) -> &'static str {
        "CBC"
    }

    fn encrypt<C: BlockCipher>(&self, cipher: &C, data: &[u8]) -> Vec<u8> {
        self.check::<C>(data);
        let mut out = data.to_vec();
        let mut last: &[u8] = &self.iv;
        for block in out.chunks_exact_mut(C::BLOCK_BYTES) {
            xor_in_place(block, last);
            cipher.encrypt_block(block, &self.key);
            last = block;
        }
        out
    }

    fn decrypt<C: BlockCipher>(&self, cipher: &C, data: &[u8]) -> Vec<u8> {
        self.check::<C>(data);
        let mut out = data.to_vec();
        let previous = Some(&self.iv[..])
            .into_iter()
            .chain(data.chunks_exact(C::BLOCK_BYTES));
        for (block, last) in out.chunks_exact_mut(C::BLOCK_BYTES).zip(previous) {
            cipher.decrypt_block(block, &self.key);
            xor_in_place(block, last);
        }
        out
    }
}

/// Counter mode: the keystream is the encryption of successive counter blocks, starting
/// from the nonce and wrapping around at `2^(8 * BLOCK_BYTES)`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ctr {
    key: Vec<u8>,
    nonce: Vec<u8>,
}

impl Ctr {
    pub fn new(key: &[u8], nonce: &[u8]) -> Self {
        Self {
            key: key.to_vec(),
            nonce: nonce.to_vec(),
        }
    }
}

impl BlockCipherMode for Ctr {
    fn name(&self) -> &'static str {
        "CTR"
    }

    fn encrypt<C: BlockCipher>(&self, cipher: &C, data: &[u8]) -> Vec<u8> {
        check_key::<C>(&self.key);
        check_block::<C>("nonce", &self.nonce);
        let mut out = data.to_vec();
        let mut counter = self.nonce.clone();
        let mut mask = Vec::with_capacity(C::BLOCK_BYTES);
        for chunk in out.chunks_mut(C::BLOCK_BYTES) {
            mask.clear();
            mask.extend_from_slice(&counter);
            cipher.encrypt_block(&mut mask, &self.key);
            xor_in_place(chunk, &mask);
            increment(&mut counter);
        }
        mask.zeroize();
        counter.zeroize();
        out
    }

    /// Identical to encryption.
    fn decrypt<C: BlockCipher>(&self, cipher: &C, data: &[u8]) -> Vec<u8> {
        self.encrypt(cipher, data)
    }
}
