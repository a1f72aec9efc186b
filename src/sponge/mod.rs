//! The sponge and duplex constructions over any [`Permutation`].
//!
//! Both own a permutation, a state and a rate (`blocksize`, in bytes). Only the first
//! `blocksize` bytes of the state are ever absorbed into or read out; the remaining
//! bytes are capacity.

pub mod aead;
pub mod hash;

use alloc::vec;
use alloc::vec::Vec;

use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::padding::Padding;
use crate::permutation::{Permutation, State};

pub use aead::SpongeAead;
pub use hash::{Phase, SpongeHash};

fn check_blocksize<P: Permutation>(f: &P, blocksize: usize) {
    assert!(
        blocksize > 0 && blocksize <= f.width_bytes(),
        "rate of {} bytes is not within the {}-byte state",
        blocksize,
        f.width_bytes()
    );
}

/// Absorb whole blocks, squeeze whole blocks.
///
/// Cloning yields an independent sponge that continues from the same point.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sponge<P: Permutation> {
    #[zeroize(skip)]
    f: P,
    state: P::State,
    #[zeroize(skip)]
    blocksize: usize,
}

impl<P: Permutation> Sponge<P> {
    /// # Panics
    /// If `blocksize` is zero or larger than the permutation's state.
    pub fn new(f: P, blocksize: usize) -> Self {
        check_blocksize(&f, blocksize);
        let state = f.new_state();
        Self {
            f,
            state,
            blocksize,
        }
    }

    #[inline(always)]
    pub fn blocksize(&self) -> usize {
        self.blocksize
    }

    #[inline(always)]
    pub fn permutation(&self) -> &P {
        &self.f
    }

    #[inline(always)]
    pub fn state(&self) -> &P::State {
        &self.state
    }

    /// XORs `block` into the outer part of the state and applies the permutation.
    ///
    /// # Panics
    /// If `block` is longer than [`blocksize`](Self::blocksize).
    pub fn absorb(&mut self, block: &[u8]) {
        assert!(
            block.len() <= self.blocksize,
            "cannot absorb {} bytes at a rate of {} bytes",
            block.len(),
            self.blocksize
        );
        self.state.absorb_xor(block);
        self.f.apply(&mut self.state);
        trace!(bytes = block.len(), "sponge absorb");
    }

    /// Reads the first `out.len()` bytes of the state, then applies the permutation.
    ///
    /// # Panics
    /// If `out` is longer than [`blocksize`](Self::blocksize).
    pub fn squeeze_into(&mut self, out: &mut [u8]) {
        assert!(
            out.len() <= self.blocksize,
            "cannot squeeze {} bytes at a rate of {} bytes",
            out.len(),
            self.blocksize
        );
        self.state.copy_bytes(out);
        self.f.apply(&mut self.state);
        trace!(bytes = out.len(), "sponge squeeze");
    }

    /// One block of output.
    pub fn squeeze(&mut self) -> Vec<u8> {
        let mut out = vec![0u8; self.blocksize];
        self.squeeze_into(&mut out);
        out
    }
}

/// Pad, absorb, permute and read back in a single call.
///
/// Cloning yields an independent duplex object that continues from the same point.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DuplexSponge<P: Permutation, D: Padding> {
    #[zeroize(skip)]
    f: P,
    state: P::State,
    #[zeroize(skip)]
    blocksize: usize,
    #[zeroize(skip)]
    padding: D,
}

impl<P: Permutation, D: Padding> DuplexSponge<P, D> {
    /// # Panics
    /// If `blocksize` is zero or larger than the permutation's state.
    pub fn new(f: P, blocksize: usize, padding: D) -> Self {
        check_blocksize(&f, blocksize);
        let state = f.new_state();
        Self {
            f,
            state,
            blocksize,
            padding,
        }
    }

    #[inline(always)]
    pub fn blocksize(&self) -> usize {
        self.blocksize
    }

    #[inline(always)]
    pub fn padding(&self) -> &D {
        &self.padding
    }

    #[inline(always)]
    pub fn state(&self) -> &P::State {
        &self.state
    }

    /// Pads the first `input_bitlength` bits of `data` (all of it if `None`) to one block,
    /// absorbs it, applies the permutation and returns the first `result_bytes` bytes of
    /// the new state (a whole block if `None`).
    ///
    /// # Panics
    /// If `result_bytes` exceeds the block size or the padded input does not fit in one
    /// block.
    pub fn duplex(
        &mut self,
        data: &[u8],
        result_bytes: Option<usize>,
        input_bitlength: Option<usize>,
    ) -> Vec<u8> {
        let result_bytes = result_bytes.unwrap_or(self.blocksize);
        assert!(
            result_bytes <= self.blocksize,
            "cannot return {} bytes at a rate of {} bytes",
            result_bytes,
            self.blocksize
        );

        let mut padded = self.padding.pad(data, self.blocksize, input_bitlength);
        assert!(
            padded.len() <= self.blocksize,
            "padded input of {} bytes exceeds the rate of {} bytes",
            padded.len(),
            self.blocksize
        );
        self.state.absorb_xor(&padded);
        padded.zeroize();
        self.f.apply(&mut self.state);

        let mut out = vec![0u8; result_bytes];
        self.state.copy_bytes(&mut out);
        trace!(
            input_bits = input_bitlength.unwrap_or(data.len() * 8),
            output = result_bytes,
            "duplex"
        );
        out
    }
}
