//! AES-256 under a fixed key as a 128-bit [`Permutation`].
//!
//! Encryption under a known key is a public permutation of the 16-byte block, which is
//! all a sponge needs. It is far from the security margin of Keccak at the same rate and
//! is meant for experiments with small states.

use zeroize::Zeroize;

use super::aes::{Block, RoundKeys, BLOCK_BYTES};
use crate::permutation::{Permutation, State};
use crate::utils::xor_in_place;

/// A 16-byte state, laid out as an AES block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct AesState(pub Block);

impl State for AesState {
    #[inline(always)]
    fn size_bytes(&self) -> usize {
        BLOCK_BYTES
    }

    fn absorb_xor(&mut self, value: &[u8]) {
        assert!(
            value.len() <= BLOCK_BYTES,
            "cannot absorb {} bytes into a {}-byte AES state",
            value.len(),
            BLOCK_BYTES
        );
        xor_in_place(&mut self.0[..value.len()], value);
    }

    fn copy_bytes(&self, out: &mut [u8]) {
        assert!(
            out.len() <= BLOCK_BYTES,
            "cannot read {} bytes from a {}-byte AES state",
            out.len(),
            BLOCK_BYTES
        );
        out.copy_from_slice(&self.0[..out.len()]);
    }
}

#[derive(Clone)]
pub struct AesPermutation {
    keys: RoundKeys,
}

impl AesPermutation {
    /// The key [`Default`] uses.
    pub const DEFAULT_KEY: &'static [u8; 32] = b"Dies ist ein nicht geheimer Key!";

    /// # Panics
    /// If `key` is not 32 bytes long.
    pub fn new(key: &[u8]) -> Self {
        Self {
            keys: RoundKeys::new(key),
        }
    }
}

impl Default for AesPermutation {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}

impl Permutation for AesPermutation {
    type State = AesState;

    #[inline(always)]
    fn width_bits(&self) -> usize {
        8 * BLOCK_BYTES
    }

    fn new_state(&self) -> AesState {
        AesState::default()
    }

    fn apply(&self, state: &mut AesState) {
        self.keys.encrypt(&mut state.0);
    }
}
