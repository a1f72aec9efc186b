//! A buffering hash / XOF session on top of [`Sponge`].

use alloc::vec;
use alloc::vec::Vec;

use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::Sponge;
use crate::padding::Padding;
use crate::permutation::Permutation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Absorbing,
    Squeezing,
}

/// Accepts input in arbitrary pieces, pads the whole message once in
/// [`final_absorb`](Self::final_absorb) and then produces output on demand.
///
/// The session moves from [`Phase::Absorbing`] to [`Phase::Squeezing`] exactly once.
/// Calling an operation of the other phase panics.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SpongeHash<P: Permutation, D: Padding> {
    sponge: Sponge<P>,
    #[zeroize(skip)]
    padding: D,
    buffer: Vec<u8>,
    #[zeroize(skip)]
    phase: Phase,
}

impl<P: Permutation, D: Padding> SpongeHash<P, D> {
    /// # Panics
    /// If `blocksize` is zero or larger than the permutation's state.
    pub fn new(f: P, blocksize: usize, padding: D) -> Self {
        Self {
            sponge: Sponge::new(f, blocksize),
            padding,
            buffer: Vec::with_capacity(blocksize),
            phase: Phase::Absorbing,
        }
    }

    #[inline(always)]
    pub fn blocksize(&self) -> usize {
        self.sponge.blocksize()
    }

    #[inline(always)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn expect_phase(&self, phase: Phase, op: &str) {
        assert!(
            self.phase == phase,
            "{} is not allowed while {:?}",
            op,
            self.phase
        );
    }

    /// Absorbs every complete block in the buffer and keeps the remainder.
    fn process_buffer(&mut self) {
        let blocksize = self.blocksize();
        let full = self.buffer.len() - self.buffer.len() % blocksize;
        for block in self.buffer[..full].chunks_exact(blocksize) {
            self.sponge.absorb(block);
        }
        self.buffer[..full].zeroize();
        self.buffer.drain(..full);
    }

    /// Adds more message bytes.
    ///
    /// # Panics
    /// After [`final_absorb`](Self::final_absorb).
    pub fn absorb(&mut self, data: &[u8]) {
        self.expect_phase(Phase::Absorbing, "absorb");
        self.buffer.extend_from_slice(data);
        if self.buffer.len() >= self.blocksize() {
            self.process_buffer();
        }
    }

    /// Adds the first `bitlength` bits of `data` (all of it if `None`) as the end of the
    /// message, pads everything still buffered and switches to squeezing.
    ///
    /// # Panics
    /// After a previous `final_absorb`, or if `bitlength` exceeds `8 * data.len()`.
    pub fn final_absorb(&mut self, data: &[u8], bitlength: Option<usize>) {
        self.expect_phase(Phase::Absorbing, "final_absorb");
        let bits = self.buffer.len() * 8 + bitlength.unwrap_or(data.len() * 8);
        self.buffer.extend_from_slice(data);

        let mut padded = self.padding.pad(&self.buffer, self.blocksize(), Some(bits));
        self.buffer.zeroize();
        debug_assert_eq!(padded.len() % self.blocksize(), 0);
        let blocks = padded.len() / self.blocksize();
        for block in padded.chunks(self.blocksize()) {
            self.sponge.absorb(block);
        }
        padded.zeroize();

        self.phase = Phase::Squeezing;
        debug!(
            scheme = self.padding.name(),
            bits,
            blocks,
            "hash finalized"
        );
    }

    /// Fills `out`, one squeezed block at a time; the last block is truncated.
    ///
    /// # Panics
    /// Before [`final_absorb`](Self::final_absorb).
    pub fn squeeze_into(&mut self, out: &mut [u8]) {
        self.expect_phase(Phase::Squeezing, "squeeze");
        let blocksize = self.blocksize();
        for chunk in out.chunks_mut(blocksize) {
            self.sponge.squeeze_into(chunk);
        }
    }

    /// The next `n` bytes of output.
    ///
    /// # Panics
    /// Before [`final_absorb`](Self::final_absorb).
    pub fn squeeze(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.squeeze_into(&mut out);
        out
    }

    /// The next block of output.
    pub fn squeeze_block(&mut self) -> Vec<u8> {
        self.squeeze(self.blocksize())
    }
}
