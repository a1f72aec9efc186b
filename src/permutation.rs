//! The capability pair every sponge is built from: a fixed-size [`State`] and a
//! [`Permutation`] that transforms it in place.

use alloc::vec;
use alloc::vec::Vec;

use zeroize::Zeroize;

/// A fixed-size permutation state of `b` bits, viewed as `ceil(b / 8)` bytes.
pub trait State: Clone + Zeroize {
    /// `ceil(b / 8)`
    fn size_bytes(&self) -> usize;

    /// XORs `value` into the first `value.len()` bytes of the state.
    ///
    /// # Panics
    /// If `value` is longer than [`size_bytes`](State::size_bytes).
    fn absorb_xor(&mut self, value: &[u8]);

    /// Writes the first `out.len()` bytes of the state to `out`.
    ///
    /// # Panics
    /// If `out` is longer than [`size_bytes`](State::size_bytes).
    fn copy_bytes(&self, out: &mut [u8]);

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.size_bytes()];
        self.copy_bytes(&mut out);
        out
    }

    /// An independent copy of this state.
    fn clone_state(&self) -> Self {
        self.clone()
    }
}

/// A permutation `f` over states of a fixed width `b`.
///
/// Implementations must be pure: applying `f` depends on nothing but the state passed in.
pub trait Permutation: Clone {
    type State: State;

    /// `b`
    fn width_bits(&self) -> usize;

    /// A new all-zero state.
    fn new_state(&self) -> Self::State;

    fn apply(&self, state: &mut Self::State);

    #[inline(always)]
    fn width_bytes(&self) -> usize {
        (self.width_bits() + 7) / 8
    }
}
