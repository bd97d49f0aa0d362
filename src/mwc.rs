use crate::engine::{self, MwcLanes};
use crate::error::Result;
use crate::seed::{self, EntropySource, OsEntropy};

const MASK: u32 = 0xFFFF;
const MUL1: u32 = 0x4650;
const MUL2: u32 = 0x78B7;

/// Lane-parallel MWC1616 generator.
///
/// Each of the `N` lanes runs two 16-bit multiply-with-carry sequences and
/// combines them into one 32-bit output. Lanes never read each other's state,
/// so lane `i` produces the same sequence for any `N`.
///
/// All state lives inline (no heap) and is aligned for whole-register loads.
#[repr(C, align(64))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mwc1616<const N: usize = { crate::LANES_U32 }> {
    x: [u32; N],
    y: [u32; N],
    mask: [u32; N],
    mul1: [u32; N],
    mul2: [u32; N],
    result: [u32; N],
}

impl<const N: usize> Mwc1616<N> {
    /// Number of 32-bit values produced per [`step`](Self::step).
    pub const LANES: usize = N;

    const NONZERO_LANES: () = assert!(N > 0, "Mwc1616 needs at least one lane");

    /// Seeds every lane from the operating system entropy source.
    pub fn new() -> Result<Self> {
        Self::from_entropy(&mut OsEntropy)
    }

    /// Seeds every lane from `src`, drawing `x` then `y` per lane.
    ///
    /// A lane whose `(x, y)` comes out all-zero is redrawn.
    pub fn from_entropy<S: EntropySource + ?Sized>(src: &mut S) -> Result<Self> {
        let mut x = [0u32; N];
        let mut y = [0u32; N];

        for lane in 0..N {
            (x[lane], y[lane]) = seed::draw_lane_u32(src, lane)?;
        }

        log::debug!("seeded mwc1616 with {} lanes ({} engine)", N, engine::name());

        Ok(Self::from_state(x, y))
    }

    /// Builds a generator from explicit state, bypassing entropy.
    ///
    /// `result` starts zeroed until the first step. Lanes with `x == y == 0`
    /// only ever produce zeros.
    pub const fn from_state(x: [u32; N], y: [u32; N]) -> Self {
        let () = Self::NONZERO_LANES;

        Self {
            x,
            y,
            mask: [MASK; N],
            mul1: [MUL1; N],
            mul2: [MUL2; N],
            result: [0; N],
        }
    }

    /// Advances every lane by one step and overwrites [`result`](Self::result).
    #[inline(always)]
    pub fn step(&mut self) {
        engine::mwc1616(MwcLanes {
            x: &mut self.x,
            y: &mut self.y,
            mask: &self.mask,
            mul1: &self.mul1,
            mul2: &self.mul2,
            result: &mut self.result,
        });
    }

    /// Steps once and returns the fresh output vector.
    #[inline(always)]
    pub fn next_block(&mut self) -> &[u32; N] {
        self.step();
        &self.result
    }

    /// Output of the most recent step.
    #[inline(always)]
    pub fn result(&self) -> &[u32; N] {
        &self.result
    }

    /// Fills `buf` with successive output vectors, one step per `N` values.
    ///
    /// A trailing partial vector takes the leading lanes of one extra step.
    pub fn fill(&mut self, buf: &mut [u32]) {
        let mut chunks = buf.chunks_exact_mut(N);

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

    /// First multiply-with-carry register.
    pub fn x(&self) -> &[u32; N] {
        &self.x
    }

    /// Second multiply-with-carry register.
    pub fn y(&self) -> &[u32; N] {
        &self.y
    }

    pub fn mask(&self) -> &[u32; N] {
        &self.mask
    }

    pub fn mul1(&self) -> &[u32; N] {
        &self.mul1
    }

    pub fn mul2(&self) -> &[u32; N] {
        &self.mul2
    }
}
