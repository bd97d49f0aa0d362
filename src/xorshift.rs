use crate::engine::{self, XorshiftLanes};
use crate::error::Result;
use crate::seed::{self, EntropySource, OsEntropy};

/// Lane-parallel xorshift128+ generator.
///
/// Each of the `M` lanes keeps two 64-bit words and produces one 64-bit value
/// per step. State is exactly `(s0, s1)` per lane; nothing else is needed to
/// resume the sequence.
///
/// The all-zero lane `(0, 0)` is a fixed point and yields zeros forever.
/// Entropy seeding never produces it; [`from_state`](Self::from_state) does not
/// check for it.
#[repr(C, align(64))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift128Plus<const M: usize = { crate::LANES_U64 }> {
    s0: [u64; M],
    s1: [u64; M],
    result: [u64; M],
}

impl<const M: usize> Xorshift128Plus<M> {
    /// Number of 64-bit values produced per [`step`](Self::step).
    pub const LANES: usize = M;

    const NONZERO_LANES: () = assert!(M > 0, "Xorshift128Plus needs at least one lane");

    /// Seeds every lane from the operating system entropy source.
    pub fn new() -> Result<Self> {
        Self::from_entropy(&mut OsEntropy)
    }

    /// Seeds every lane from `src`.
    ///
    /// Per lane, `s0` is two 32-bit draws (high word first), then `s1` the
    /// same way.
    pub fn from_entropy<S: EntropySource + ?Sized>(src: &mut S) -> Result<Self> {
        let mut s0 = [0u64; M];
        let mut s1 = [0u64; M];

        for lane in 0..M {
            (s0[lane], s1[lane]) = seed::draw_lane_u64(src, lane)?;
        }

        log::debug!("seeded xorshift128+ with {} lanes ({} engine)", M, engine::name());

        Ok(Self::from_state(s0, s1))
    }

    /// Builds a generator from explicit state, bypassing entropy.
    pub const fn from_state(s0: [u64; M], s1: [u64; M]) -> Self {
        let () = Self::NONZERO_LANES;

        Self {
            s0,
            s1,
            result: [0; M],
        }
    }

    /// Advances every lane by one step and overwrites [`result`](Self::result).
    #[inline(always)]
    pub fn step(&mut self) {
        engine::xorshift128p(XorshiftLanes {
            s0: &mut self.s0,
            s1: &mut self.s1,
            result: &mut self.result,
        });
    }

    /// Steps once and returns the fresh output vector.
    #[inline(always)]
    pub fn next_block(&mut self) -> &[u64; M] {
        self.step();
        &self.result
    }

    #[inline(always)]
    pub fn result(&self) -> &[u64; M] {
        &self.result
    }

    /// Fills `buf` with successive output vectors, one step per `M` values.
    ///
    /// A trailing partial vector takes the leading lanes of one extra step.
    pub fn fill(&mut self, buf: &mut [u64]) {
        let mut chunks = buf.chunks_exact_mut(M);

        for chunk in &mut chunks {
            self.step();
            chunk.copy_from_slice(&self.result);
        }

        let rem = chunks.into_remainder();

        if !rem.is_empty() {
            self.step();
            rem.copy_from_slice(&self.result[..rem.len()]);
        }
    }

    pub fn s0(&self) -> &[u64; M] {
        &self.s0
    }

    pub fn s1(&self) -> &[u64; M] {
        &self.s1
    }
}
