//! Keccak-f\[b\] for every lane width with byte-sized lanes.
//!
//! The lane word `W` fixes `w = 2^ℓ` and with it the width `b = 25w` and the number of
//! rounds `n = 12 + 2ℓ`:
//!
//! | alias           | lane   | ℓ | b    | n  |
//! |-----------------|--------|---|------|----|
//! | [`KeccakF200`]  | `u8`   | 3 | 200  | 18 |
//! | [`KeccakF400`]  | `u16`  | 4 | 400  | 20 |
//! | [`KeccakF800`]  | `u32`  | 5 | 800  | 22 |
//! | [`KeccakF1600`] | `u64`  | 6 | 1600 | 24 |
//! | [`KeccakF3200`] | `u128` | 7 | 3200 | 26 |
//!
//! Lanes are addressed as `lanes[x][y]`. Serialized, lane `(x, y)` occupies bytes
//! `(5y + x) * w/8 ..` in little-endian order, as in FIPS 202.

pub mod fips202;

use alloc::vec;
use alloc::vec::Vec;

use array_init::array_init;
use crunchy::unroll;
use zeroize::Zeroize;

use crate::bits::Word;
use crate::permutation::{Permutation, State};

const NLANES: usize = 25;

/// `lanes[x][y]`
pub type Lanes<W> = [[W; 5]; 5];

pub type KeccakF200 = KeccakF<u8>;
pub type KeccakF400 = KeccakF<u16>;
pub type KeccakF800 = KeccakF<u32>;
pub type KeccakF1600 = KeccakF<u64>;
pub type KeccakF3200 = KeccakF<u128>;

#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct KeccakState<W: Word> {
    lanes: Lanes<W>,
}

impl<W: Word> Default for KeccakState<W> {
    #[inline]
    fn default() -> Self {
        Self {
            lanes: [[W::ZERO; 5]; 5],
        }
    }
}

impl<W: Word> KeccakState<W> {
    pub const SIZE_BYTES: usize = NLANES * W::BYTES;

    /// From lanes in serialization order, i.e. `flat[5y + x]`.
    pub fn from_flat(flat: [W; NLANES]) -> Self {
        Self {
            lanes: array_init(|x| array_init(|y| flat[5 * y + x])),
        }
    }

    /// Lanes in serialization order, i.e. `flat[5y + x]`.
    pub fn to_flat(&self) -> [W; NLANES] {
        array_init(|i| self.lanes[i % 5][i / 5])
    }

    #[inline(always)]
    pub fn lanes(&self) -> &Lanes<W> {
        &self.lanes
    }
}

impl<W: Word> State for KeccakState<W> {
    #[inline(always)]
    fn size_bytes(&self) -> usize {
        Self::SIZE_BYTES
    }

    fn absorb_xor(&mut self, value: &[u8]) {
        assert!(
            value.len() <= Self::SIZE_BYTES,
            "cannot absorb {} bytes into a {}-byte Keccak state",
            value.len(),
            Self::SIZE_BYTES
        );
        for (i, chunk) in value.chunks(W::BYTES).enumerate() {
            let lane = if chunk.len() == W::BYTES {
                W::from_le_slice(chunk)
            } else {
                let mut buf = [0u8; 16];
                buf[..chunk.len()].copy_from_slice(chunk);
                W::from_le_slice(&buf[..W::BYTES])
            };
            self.lanes[i % 5][i / 5] ^= lane;
        }
    }

    fn copy_bytes(&self, out: &mut [u8]) {
        assert!(
            out.len() <= Self::SIZE_BYTES,
            "cannot read {} bytes from a {}-byte Keccak state",
            out.len(),
            Self::SIZE_BYTES
        );
        for (i, chunk) in out.chunks_mut(W::BYTES).enumerate() {
            let lane = self.lanes[i % 5][i / 5];
            if chunk.len() == W::BYTES {
                lane.write_le(chunk);
            } else {
                let mut buf = [0u8; 16];
                lane.write_le(&mut buf[..W::BYTES]);
                chunk.copy_from_slice(&buf[..chunk.len()]);
            }
        }
    }
}

/// Rotation offsets of the ρ step, `rho[x][y]`.
///
/// Starting from `(1, 0)`, the `t`-th lane visited by `(x, y) ↦ (y, 2x + 3y)` is rotated by
/// the triangular number `(t + 1)(t + 2) / 2 mod w`. Lane `(0, 0)` is not rotated.
pub const fn rotation_offsets(w: u32) -> [[u32; 5]; 5] {
    let mut rho = [[0u32; 5]; 5];
    let (mut x, mut y) = (1, 0);
    let mut t = 0;
    while t < NLANES - 1 {
        rho[x][y] = (((t + 1) * (t + 2) / 2) % w as usize) as u32;
        (x, y) = (y, (2 * x + 3 * y) % 5);
        t += 1;
    }
    rho
}

/// Round constants of the ι step, one per round.
///
/// `rc(t)` is the output of the LFSR `x^8 + x^6 + x^5 + x^4 + 1` seeded with `1`.
/// Round `i` sets bit `2^j - 1` of its constant iff `rc(j + 7i) = 1`, for `j = 0..=ℓ`.
fn round_constants<W: Word>(rounds: usize) -> Vec<W> {
    let mut rc = vec![false; W::LOG2_BITS as usize + 7 * rounds];
    let mut r: u8 = 1;
    for bit in rc.iter_mut() {
        *bit = r & 1 != 0;
        let carry = r & 0x80 != 0;
        r <<= 1;
        if carry {
            r ^= 0x71;
        }
    }

    (0..rounds)
        .map(|i| {
            let mut c = W::ZERO;
            for j in 0..=W::LOG2_BITS {
                if rc[j as usize + 7 * i] {
                    c = c | W::ONE.rotl((1 << j) - 1);
                }
            }
            c
        })
        .collect()
}

/// Keccak-f over lanes of type `W`.
///
/// The round constants and rotation offsets are derived once, in [`KeccakF::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeccakF<W: Word> {
    rc: Vec<W>,
    rho: [[u32; 5]; 5],
}

impl<W: Word> Default for KeccakF<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Word> KeccakF<W> {
    /// `ℓ`
    pub const ELL: u32 = W::LOG2_BITS;
    /// `b = 25w`
    pub const WIDTH: usize = NLANES * W::BITS as usize;
    /// `n = 12 + 2ℓ`
    pub const ROUNDS: usize = 12 + 2 * W::LOG2_BITS as usize;

    pub fn new() -> Self {
        Self {
            rc: round_constants::<W>(Self::ROUNDS),
            rho: rotation_offsets(W::BITS),
        }
    }

    #[inline(always)]
    pub fn round_constants(&self) -> &[W] {
        &self.rc
    }

    #[inline(always)]
    pub fn rotation_offsets(&self) -> &[[u32; 5]; 5] {
        &self.rho
    }

    #[inline(always)]
    fn round(&self, lanes: &Lanes<W>, rc: W) -> Lanes<W> {
        let mut lanes = chi(&pi(&rho(&theta(lanes), &self.rho)));
        iota(&mut lanes, rc);
        lanes
    }

    /// Applies all [`ROUNDS`](Self::ROUNDS) rounds to `lanes`.
    pub fn permute_lanes(&self, lanes: &Lanes<W>) -> Lanes<W> {
        self.round_constants()
            .iter()
            .fold(*lanes, |lanes, rc| self.round(&lanes, *rc))
    }
}

impl<W: Word> Permutation for KeccakF<W> {
    type State = KeccakState<W>;

    #[inline(always)]
    fn width_bits(&self) -> usize {
        Self::WIDTH
    }

    fn new_state(&self) -> KeccakState<W> {
        KeccakState::default()
    }

    fn apply(&self, state: &mut KeccakState<W>) {
        state.lanes = self.permute_lanes(&state.lanes);
    }
}

/// θ (theta): xor the parity of the column to the left and the rotated parity of the
/// column to the right into every lane
/// a[x][y] ← a[x][y] ⊕ parity(a[x−1][..]) ⊕ rot(parity(a[x+1][..]), 1)
#[inline(always)]
fn theta<W: Word>(a: &Lanes<W>) -> Lanes<W> {
    let mut parity = [W::ZERO; 5];
    unroll! {
        for x in 0..5 {
            unroll! {
                for y in 0..5 {
                    parity[x] ^= a[x][y];
                }
            }
        }
    }
    let d: [W; 5] = array_init(|x| parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotl(1));
    array_init(|x| array_init(|y| a[x][y] ^ d[x]))
}

/// ρ (rho): rotate every lane by its own offset
#[inline(always)]
fn rho<W: Word>(a: &Lanes<W>, offsets: &[[u32; 5]; 5]) -> Lanes<W> {
    array_init(|x| array_init(|y| a[x][y].rotl(offsets[x][y])))
}

/// π (pi): move lanes around, a'[x][y] ← a[x + 3y][x]
#[inline(always)]
fn pi<W: Word>(a: &Lanes<W>) -> Lanes<W> {
    array_init(|x| array_init(|y| a[(x + 3 * y) % 5][x]))
}

/// χ (chi): the only non-linear step, combining each lane with its row neighbours
/// a[x][y] ← a[x][y] ⊕ (¬a[x+1][y] ∧ a[x+2][y])
#[inline(always)]
fn chi<W: Word>(a: &Lanes<W>) -> Lanes<W> {
    array_init(|x| array_init(|y| a[x][y] ^ (!a[(x + 1) % 5][y] & a[(x + 2) % 5][y])))
}

/// ι (iota): the first lane is XORed with the round constant
#[inline(always)]
fn iota<W: Word>(a: &mut Lanes<W>, rc: W) {
    a[0][0] ^= rc;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::{Pad0110Star1, Padding};
    use alloc::vec::Vec;
    use hex_literal::hex;

    const RC_1600: [u64; 24] = [
        0x0000000000000001,
        0x0000000000008082,
        0x800000000000808a,
        0x8000000080008000,
        0x000000000000808b,
        0x0000000080000001,
        0x8000000080008081,
        0x8000000000008009,
        0x000000000000008a,
        0x0000000000000088,
        0x0000000080008009,
        0x000000008000000a,
        0x000000008000808b,
        0x800000000000008b,
        0x8000000000008089,
        0x8000000000008003,
        0x8000000000008002,
        0x8000000000000080,
        0x000000000000800a,
        0x800000008000000a,
        0x8000000080008081,
        0x8000000000008080,
        0x0000000080000001,
        0x8000000080008008,
    ];

    #[test]
    fn parameters() {
        assert_eq!(KeccakF200::ELL, 3);
        assert_eq!(KeccakF200::WIDTH, 200);
        assert_eq!(KeccakF200::ROUNDS, 18);
        assert_eq!(KeccakF400::ROUNDS, 20);
        assert_eq!(KeccakF800::ROUNDS, 22);
        assert_eq!(KeccakF1600::ROUNDS, 24);
        assert_eq!(KeccakF1600::new().width_bytes(), 200);
        assert_eq!(KeccakF800::new().width_bytes(), 100);
        assert_eq!(KeccakF3200::ELL, 7);
        assert_eq!(KeccakF3200::WIDTH, 3200);
        assert_eq!(KeccakF3200::ROUNDS, 26);
        assert_eq!(KeccakF3200::new().round_constants().len(), 26);
        assert_eq!(KeccakF3200::new().width_bytes(), 400);
    }

    #[test]
    fn round_constants_1600() {
        assert_eq!(KeccakF1600::new().round_constants(), &RC_1600[..]);
    }

    #[test]
    fn round_constants_narrow_lanes() {
        // the narrower constants are the low bits of the 64-bit ones
        let rc: Vec<u32> = RC_1600[..22].iter().map(|&c| c as u32).collect();
        assert_eq!(KeccakF800::new().round_constants(), &rc[..]);
        let rc: Vec<u16> = RC_1600[..20].iter().map(|&c| c as u16).collect();
        assert_eq!(KeccakF400::new().round_constants(), &rc[..]);
        let rc: Vec<u8> = RC_1600[..18].iter().map(|&c| c as u8).collect();
        assert_eq!(KeccakF200::new().round_constants(), &rc[..]);
    }

    #[test]
    fn round_constants_3200() {
        let f = KeccakF3200::new();
        let rc = f.round_constants();
        // the low half repeats the 64-bit constants; bit 127 is rc(7 + 7i), which is
        // also bit 0 of the next round
        for (i, &c) in RC_1600.iter().enumerate() {
            assert_eq!(rc[i] as u64, c, "round {}", i);
            assert_eq!(rc[i] >> 64 & !(1 << 63), 0, "round {}", i);
        }
        for i in 0..23 {
            assert_eq!((rc[i] >> 127) as u64, RC_1600[i + 1] & 1, "round {}", i);
        }
        assert_eq!(rc[25] >> 127, 1);
    }

    #[test]
    fn keccak_f3200() {
        let f = KeccakF3200::new();
        let mut state = f.new_state();
        f.apply(&mut state);
        let bytes = state.to_bytes();
        assert_eq!(bytes.len(), 400);
        assert_eq!(
            bytes[..32],
            hex!("1d387f6c4c30613d922464c9c6ffa11ef948d218fc7bc4a6bedd42f0e988123b")
        );
        assert_eq!(bytes[384..], hex!("c59e5815d36ae5d1424aa8b8187a2ac8"));

        let mut again = state.clone_state();
        f.apply(&mut state);
        assert_eq!(
            state.to_bytes()[..32],
            hex!("aa7a7f719da27479e0c3b2a2c33f1df740fc164f2f19d6dd3d9b09a768db6fcf")
        );
        f.apply(&mut again);
        assert_eq!(again, state);
    }

    #[test]
    fn rotation_offsets_1600() {
        // r[x][y] from the Keccak reference, section 1.2
        let expected = [
            [0, 36, 3, 41, 18],
            [1, 44, 10, 45, 2],
            [62, 6, 43, 15, 61],
            [28, 55, 25, 21, 56],
            [27, 20, 39, 8, 14],
        ];
        assert_eq!(KeccakF1600::new().rotation_offsets(), &expected);
        assert_eq!(rotation_offsets(8)[1][1], 44 % 8);
    }

    #[test]
    fn keccak_f1600() {
        // Test vectors are from XKCP
        // https://github.com/XKCP/XKCP/blob/master/tests/TestVectors/KeccakF-1600-IntermediateValues.txt
        let first = KeccakState::from_flat([
            0xF1258F7940E1DDE7,
            0x84D5CCF933C0478A,
            0xD598261EA65AA9EE,
            0xBD1547306F80494D,
            0x8B284E056253D057,
            0xFF97A42D7F8E6FD4,
            0x90FEE5A0A44647C4,
            0x8C5BDA0CD6192E76,
            0xAD30A6F71B19059C,
            0x30935AB7D08FFC64,
            0xEB5AA93F2317D635,
            0xA9A6E6260D712103,
            0x81A57C16DBCF555F,
            0x43B831CD0347C826,
            0x01F22F1A11A5569F,
            0x05E5635A21D9AE61,
            0x64BEFEF28CC970F2,
            0x613670957BC46611,
            0xB87C5A554FD00ECB,
            0x8C3EE88A1CCF32C8,
            0x940C7922AE3A2614,
            0x1841F924A2C509E4,
            0x16F53526E70465C2,
            0x75F644E97F30A13B,
            0xEAF1FF7B5CECA249,
        ]);
        let second = KeccakState::from_flat([
            0x2D5C954DF96ECB3C,
            0x6A332CD07057B56D,
            0x093D8D1270D76B6C,
            0x8A20D9B25569D094,
            0x4F9C4F99E5E7F156,
            0xF957B9A2DA65FB38,
            0x85773DAE1275AF0D,
            0xFAF4F247C3D810F7,
            0x1F1B9EE6F79A8759,
            0xE4FECC0FEE98B425,
            0x68CE61B6B9CE68A1,
            0xDEEA66C4BA8F974F,
            0x33C43D836EAFB1F5,
            0xE00654042719DBD9,
            0x7CF8A9F009831265,
            0xFD5449A6BF174743,
            0x97DDAD33D8994B40,
            0x48EAD5FC5D0BE774,
            0xE3B8C8EE55B7B03C,
            0x91A0226E649E42E9,
            0x900E3129E7BADD7B,
            0x202A9EC5FAA3CCE8,
            0x5B3402464E1C3DB6,
            0x609F4E62A44C1059,
            0x20D06CD26A8FBF5C,
        ]);

        let f = KeccakF1600::new();
        let mut state = f.new_state();
        f.apply(&mut state);
        assert_eq!(state.to_flat(), first.to_flat());
        f.apply(&mut state);
        assert_eq!(state, second);
    }

    #[test]
    fn single_block_sha3_256() {
        let f = KeccakF1600::new();
        for (msg, digest) in [
            (
                &b""[..],
                hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"),
            ),
            (
                &b"hello"[..],
                hex!("3338be694f50c5f338814986cdf0686453a888b84f424d792af4b9202398f392"),
            ),
        ] {
            let mut state = f.new_state();
            state.absorb_xor(&Pad0110Star1.pad(msg, 136, None));
            f.apply(&mut state);
            assert_eq!(state.to_bytes()[..32], digest);
        }
    }

    #[test]
    fn independent_instances_agree() {
        fn run<W: Word>() {
            let (f, g) = (KeccakF::<W>::new(), KeccakF::<W>::new());
            let (mut a, mut b) = (f.new_state(), g.new_state());
            let input: Vec<u8> = (0..KeccakState::<W>::SIZE_BYTES).map(|i| i as u8).collect();
            a.absorb_xor(&input);
            b.absorb_xor(&input);
            f.apply(&mut a);
            g.apply(&mut b);
            assert_eq!(a, b);
            assert_ne!(a.to_bytes(), input);
        }
        run::<u8>();
        run::<u16>();
        run::<u32>();
        run::<u64>();
        run::<u128>();
    }

    #[test]
    fn state_bytes_layout() {
        let mut state = KeccakState::<u16>::default();
        state.absorb_xor(&[0x01, 0x02, 0x03]);
        assert_eq!(state.lanes()[0][0], 0x0201);
        assert_eq!(state.lanes()[1][0], 0x0003);
        state.absorb_xor(&[0x01]);
        assert_eq!(state.lanes()[0][0], 0x0200);

        let mut state = KeccakState::<u64>::default();
        state.absorb_xor(&[0xff; 48]);
        // byte 40 starts lane (0, 1)
        assert_eq!(state.lanes()[0][1], u64::MAX);
        assert_eq!(state.lanes()[1][1], 0);

        let mut out = [0u8; 3];
        KeccakState::<u16>::from_flat(array_init(|i| i as u16 + 0x0100)).copy_bytes(&mut out);
        assert_eq!(out, [0x00, 0x01, 0x01]);
    }

    #[test]
    #[should_panic(expected = "cannot absorb")]
    fn absorb_too_long() {
        KeccakState::<u8>::default().absorb_xor(&[0u8; 26]);
    }
}
