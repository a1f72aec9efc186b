//! Authenticated encryption with associated data on a duplex sponge.
//!
//! Key, header and message are cut into chunks of `cipher_blocksize` bytes; every input
//! yields at least one chunk, the empty one if it is empty. Each chunk becomes one duplex
//! call:
//!
//! - key chunks, with no output;
//! - all header chunks but the last, followed by a `0` frame bit, with no output;
//! - the last header chunk and then each plaintext chunk, followed by a `1` frame bit,
//!   each returning the keystream for the next message chunk;
//! - the final chunk followed by a `0` frame bit, then empty chunks carrying a single `0`
//!   bit, returning the tag `cipher_blocksize` bytes at a time.
//!
//! Encryption and decryption both chain on the plaintext.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::min;
use core::iter;

use tracing::{debug, warn};
use zeroize::Zeroize;

use super::DuplexSponge;
use crate::error::{Error, Result};
use crate::padding::Padding;
use crate::permutation::Permutation;
use crate::utils::{bytes_eq, xor_in_place};

/// `chunk` followed by a single frame bit, with the exact bit length of the result.
fn framed(chunk: &[u8], bit: bool) -> (Vec<u8>, usize) {
    let mut out = Vec::with_capacity(chunk.len() + 1);
    out.extend_from_slice(chunk);
    out.push(bit as u8);
    (out, chunk.len() * 8 + 1)
}

/// All chunks but the last, and the last chunk, which is empty for empty `data`.
fn split(data: &[u8], size: usize) -> (impl Iterator<Item = &[u8]>, &[u8]) {
    let last = data.len().saturating_sub(1) / size * size;
    let (init, last) = data.split_at(last);
    (init.chunks(size), last)
}

#[derive(Clone, Debug)]
pub struct SpongeAead<P: Permutation, D: Padding> {
    f: P,
    sponge_blocksize: usize,
    cipher_blocksize: usize,
    tag_length: usize,
    padding: D,
}

impl<P: Permutation, D: Padding> SpongeAead<P, D> {
    /// # Panics
    /// Unless `0 < cipher_blocksize < sponge_blocksize`, or if `sponge_blocksize` does not
    /// fit the permutation's state.
    pub fn new(
        f: P,
        sponge_blocksize: usize,
        cipher_blocksize: usize,
        tag_length: usize,
        padding: D,
    ) -> Self {
        assert!(
            0 < cipher_blocksize && cipher_blocksize < sponge_blocksize,
            "cipher block size {} must be positive and below the sponge block size {}",
            cipher_blocksize,
            sponge_blocksize
        );
        assert!(
            sponge_blocksize <= f.width_bytes(),
            "sponge block size {} exceeds the {}-byte state",
            sponge_blocksize,
            f.width_bytes()
        );
        Self {
            f,
            sponge_blocksize,
            cipher_blocksize,
            tag_length,
            padding,
        }
    }

    #[inline(always)]
    pub fn tag_length(&self) -> usize {
        self.tag_length
    }

    #[inline(always)]
    pub fn cipher_blocksize(&self) -> usize {
        self.cipher_blocksize
    }

    /// Keys the duplex object and absorbs the header, returning its last chunk.
    fn start<'h>(&self, key: &[u8], header: &'h [u8]) -> (DuplexSponge<P, D>, &'h [u8]) {
        let mut duplex = DuplexSponge::new(
            self.f.clone(),
            self.sponge_blocksize,
            self.padding.clone(),
        );

        let (key_init, key_last) = split(key, self.cipher_blocksize);
        for chunk in key_init.chain(iter::once(key_last)) {
            duplex.duplex(chunk, Some(0), None);
        }

        let (header_init, header_last) = split(header, self.cipher_blocksize);
        for chunk in header_init {
            let (mut frame, bits) = framed(chunk, false);
            duplex.duplex(&frame, Some(0), Some(bits));
            frame.zeroize();
        }
        (duplex, header_last)
    }

    /// Runs the message through the duplex object, XORing each chunk with the keystream
    /// derived from the previous plaintext chunk. Returns the transformed message and the
    /// last plaintext chunk.
    fn crypt(
        &self,
        duplex: &mut DuplexSponge<P, D>,
        mut previous: Vec<u8>,
        input: &[u8],
        decrypting: bool,
    ) -> (Vec<u8>, Vec<u8>) {
        let mut output = Vec::with_capacity(input.len());
        let (init, last) = split(input, self.cipher_blocksize);
        for chunk in init.chain(iter::once(last)) {
            let (mut frame, bits) = framed(&previous, true);
            let mut block = duplex.duplex(&frame, Some(chunk.len()), Some(bits));
            frame.zeroize();
            xor_in_place(&mut block, chunk);
            output.extend_from_slice(&block);

            previous.zeroize();
            previous = if decrypting { block } else { chunk.to_vec() };
        }
        (output, previous)
    }

    fn tag(&self, duplex: &mut DuplexSponge<P, D>, last: &[u8]) -> Vec<u8> {
        let mut tag = Vec::with_capacity(self.tag_length);
        let (mut frame, mut bits) = framed(last, false);
        while tag.len() < self.tag_length {
            let n = min(self.cipher_blocksize, self.tag_length - tag.len());
            tag.extend_from_slice(&duplex.duplex(&frame, Some(n), Some(bits)));
            frame.zeroize();
            (frame, bits) = (vec![0x00], 1);
        }
        tag
    }

    /// Encrypts `data` and authenticates it together with `header`.
    ///
    /// Returns the ciphertext, as long as `data`, and the tag.
    pub fn encrypt_and_tag(&self, key: &[u8], header: &[u8], data: &[u8]) -> (Vec<u8>, Vec<u8>) {
        let (mut duplex, header_last) = self.start(key, header);
        let (ciphertext, mut last) = self.crypt(&mut duplex, header_last.to_vec(), data, false);
        let tag = self.tag(&mut duplex, &last);
        last.zeroize();
        debug!(
            header = header.len(),
            data = data.len(),
            tag = tag.len(),
            "encrypted and tagged"
        );
        (ciphertext, tag)
    }

    /// Decrypts `ciphertext` and checks `tag` against `header` and the recovered plaintext.
    ///
    /// # Errors
    /// [`Error::AuthenticationFailed`] if the tag does not match. The plaintext is wiped
    /// and nothing of it is returned.
    pub fn decrypt_and_authenticate(
        &self,
        key: &[u8],
        header: &[u8],
        ciphertext: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>> {
        let (mut duplex, header_last) = self.start(key, header);
        let (mut plaintext, mut last) =
            self.crypt(&mut duplex, header_last.to_vec(), ciphertext, true);
        let expected = self.tag(&mut duplex, &last);
        last.zeroize();

        if !bytes_eq(&expected, tag) {
            plaintext.zeroize();
            warn!(
                header = header.len(),
                ciphertext = ciphertext.len(),
                "tag mismatch, plaintext discarded"
            );
            return Err(Error::AuthenticationFailed);
        }
        debug!(
            header = header.len(),
            data = plaintext.len(),
            "decrypted and authenticated"
        );
        Ok(plaintext)
    }
}
