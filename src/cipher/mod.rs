//! Block ciphers and the classic modes of operation built on them.
//!
//! A [`BlockCipher`] maps one block to another under a key of fixed size. A
//! [`BlockCipherMode`] holds the key (and IV or nonce) and turns a block cipher into a
//! cipher over messages; [`Cipher`] ties the two together.
//!
//! [`AesPermutation`] reuses AES-256 under a fixed key as a 128-bit permutation, so the
//! sponge constructions can run on something other than Keccak.

pub mod aes;
pub mod modes;
pub mod permutation;

use alloc::vec::Vec;

use tracing::trace;

pub use aes::{Aes256, RoundKeys};
pub use modes::{Cbc, Ctr, Ecb};
pub use permutation::{AesPermutation, AesState};

pub trait BlockCipher {
    const BLOCK_BYTES: usize;
    const KEY_BYTES: usize;

    /// Encrypts one block in place.
    ///
    /// # Panics
    /// If `block` is not `BLOCK_BYTES` or `key` not `KEY_BYTES` long.
    fn encrypt_block(&self, block: &mut [u8], key: &[u8]);

    /// Decrypts one block in place.
    ///
    /// # Panics
    /// If `block` is not `BLOCK_BYTES` or `key` not `KEY_BYTES` long.
    fn decrypt_block(&self, block: &mut [u8], key: &[u8]);
}

pub trait BlockCipherMode {
    fn name(&self) -> &'static str;

    fn encrypt<C: BlockCipher>(&self, cipher: &C, data: &[u8]) -> Vec<u8>;

    fn decrypt<C: BlockCipher>(&self, cipher: &C, data: &[u8]) -> Vec<u8>;
}

/// A block cipher run in a mode of operation.
pub struct Cipher<C: BlockCipher, M: BlockCipherMode> {
    cipher: C,
    mode: M,
}

impl<C: BlockCipher, M: BlockCipherMode> Cipher<C, M> {
    pub fn new(cipher: C, mode: M) -> Self {
        Self { cipher, mode }
    }

    pub fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        trace!(mode = self.mode.name(), bytes = data.len(), "encrypt");
        self.mode.encrypt(&self.cipher, data)
    }

    pub fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        trace!(mode = self.mode.name(), bytes = data.len(), "decrypt");
        self.mode.decrypt(&self.cipher, data)
    }
}
