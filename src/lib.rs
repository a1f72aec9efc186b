#![deny(unsafe_code)]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub(crate) mod utils;

pub mod bits;
pub mod cipher;
pub mod error;
pub mod keccak;
pub mod macros;
pub mod md;
pub mod padding;
pub mod permutation;
pub mod sponge;

pub use cipher::{
    Aes256, AesPermutation, AesState, BlockCipher, BlockCipherMode, Cbc, Cipher, Ctr, Ecb,
};
pub use error::{Error, PaddingFault, Result};
pub use keccak::fips202::{
    sha3_224, sha3_256, sha3_384, sha3_512, shake128, shake256, Sha3_224, Sha3_256, Sha3_384,
    Sha3_512, Shake128, Shake256, XofReader,
};
pub use keccak::{
    KeccakF, KeccakF1600, KeccakF200, KeccakF3200, KeccakF400, KeccakF800, KeccakState,
};
pub use md::{sha2_224, sha2_256, Compression, MerkleDamgard, Sha256Compression};
pub use padding::{Pad0110Star1, Pad10Star, Pad10Star1, Padding, PaddingScheme, Sha2Padding};
pub use permutation::{Permutation, State};
pub use sponge::{DuplexSponge, Phase, Sponge, SpongeAead, SpongeHash};
