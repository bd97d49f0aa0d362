//! Lane-parallel pseudo-random generators for bulk, non-cryptographic randomness.
//!
//! Two independent generators are provided, each advancing several scalar
//! streams ("lanes") with one step:
//!
//! - [`Mwc1616`] produces `N` 32-bit values per step (two multiply-with-carry
//!   sequences combined into one).
//! - [`Xorshift128Plus`] produces `M` 64-bit values per step (two-word xorshift
//!   with an additive finalizer).
//!
//! The default lane counts, [`LANES_U32`] and [`LANES_U64`], follow the widest
//! vector registers enabled at build time (`-C target-feature=..` or
//! `-C target-cpu=native`). There is no runtime ISA probing.
//!
//! ```
//! use lanerand::{Mwc1616, Xorshift128Plus};
//!
//! let mut mwc = Mwc1616::<4>::from_state([1; 4], [1; 4]);
//! mwc.step();
//! assert_eq!(mwc.result(), &[0x465078B7; 4]);
//!
//! let mut xsa = Xorshift128Plus::<2>::from_state([1, 1], [2, 2]);
//! assert_eq!(xsa.next_block(), &[0x800025, 0x800025]);
//! ```
//!
//! NOTE: None of this is suitable for cryptography. MWC1616 in particular is
//! not statistically robust enough for scientific work.

mod engine;
mod error;
mod mwc;
mod seed;
mod xorshift;

pub use error::{Error, Result};
pub use mwc::Mwc1616;
pub use seed::{EntropySource, OsEntropy};
pub use xorshift::Xorshift128Plus;

/// Number of 32-bit lanes advanced per [`Mwc1616`] step by default.
///
/// 16 with AVX-512F, 8 with AVX2, 4 otherwise (SSE4.1, NEON, portable).
pub const LANES_U32: usize = if cfg!(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    not(feature = "force-portable")
)) {
    16
} else if cfg!(all(
    target_arch = "x86_64",
    target_feature = "avx2",
    not(feature = "force-portable")
)) {
    8
} else {
    4
};

/// Number of 64-bit lanes advanced per [`Xorshift128Plus`] step by default.
pub const LANES_U64: usize = LANES_U32 / 2;

/// Name of the lane engine selected at build time
/// (`"avx2"`, `"sse4.1"`, `"neon"` or `"portable"`).
#[inline]
pub fn engine_name() -> &'static str {
    engine::name()
}
