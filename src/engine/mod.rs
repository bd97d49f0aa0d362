//! Lane engines.
//!
//! Every engine applies the same scalar recurrences to a fixed number of lanes
//! at once. One engine is picked at build time as [`Native`]; generators hand it
//! whole register-width chunks of their state and give any remaining lanes to
//! [`portable::Portable`], which is also the reference semantics.

pub(crate) mod portable;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2", not(feature = "force-portable")))]
pub(crate) mod avx2;

#[cfg(all(
    target_arch = "x86_64",
    target_feature = "sse4.1",
    not(target_feature = "avx2"),
    not(feature = "force-portable")
))]
pub(crate) mod sse;

#[cfg(all(target_arch = "aarch64", target_feature = "neon", not(feature = "force-portable")))]
pub(crate) mod neon;

use core::ops::Range;

use portable::Portable;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2", not(feature = "force-portable")))]
pub(crate) type Native = avx2::AVX2;

#[cfg(all(
    target_arch = "x86_64",
    target_feature = "sse4.1",
    not(target_feature = "avx2"),
    not(feature = "force-portable")
))]
pub(crate) type Native = sse::SSE;

#[cfg(all(target_arch = "aarch64", target_feature = "neon", not(feature = "force-portable")))]
pub(crate) type Native = neon::NEON;

#[cfg(any(
    feature = "force-portable",
    not(any(
        all(target_arch = "x86_64", any(target_feature = "avx2", target_feature = "sse4.1")),
        all(target_arch = "aarch64", target_feature = "neon"),
    ))
))]
pub(crate) type Native = Portable;

/// MWC1616 state lanes handed to an engine. All slices have the same length.
pub(crate) struct MwcLanes<'a> {
    pub(crate) x: &'a mut [u32],
    pub(crate) y: &'a mut [u32],
    pub(crate) mask: &'a [u32],
    pub(crate) mul1: &'a [u32],
    pub(crate) mul2: &'a [u32],
    pub(crate) result: &'a mut [u32],
}

impl MwcLanes<'_> {
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.x.len()
    }

    #[inline(always)]
    fn sub(&mut self, r: Range<usize>) -> MwcLanes<'_> {
        MwcLanes {
            x: &mut self.x[r.clone()],
            y: &mut self.y[r.clone()],
            mask: &self.mask[r.clone()],
            mul1: &self.mul1[r.clone()],
            mul2: &self.mul2[r.clone()],
            result: &mut self.result[r],
        }
    }
}

/// xorshift128+ state lanes handed to an engine. All slices have the same length.
pub(crate) struct XorshiftLanes<'a> {
    pub(crate) s0: &'a mut [u64],
    pub(crate) s1: &'a mut [u64],
    pub(crate) result: &'a mut [u64],
}

impl XorshiftLanes<'_> {
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.s0.len()
    }

    #[inline(always)]
    fn sub(&mut self, r: Range<usize>) -> XorshiftLanes<'_> {
        XorshiftLanes {
            s0: &mut self.s0[r.clone()],
            s1: &mut self.s1[r.clone()],
            result: &mut self.result[r],
        }
    }
}

pub(crate) trait Engine {
    const NAME: &'static str;

    /// u32 lanes per call to [`Engine::mwc1616`]
    const WIDTH_U32: usize;

    /// u64 lanes per call to [`Engine::xorshift128p`]
    const WIDTH_U64: usize;

    /// Advances exactly `WIDTH_U32` MWC1616 lanes by one step.
    unsafe fn mwc1616(lanes: MwcLanes<'_>);

    /// Advances exactly `WIDTH_U64` xorshift128+ lanes by one step.
    unsafe fn xorshift128p(lanes: XorshiftLanes<'_>);
}

#[inline(always)]
pub(crate) fn name() -> &'static str {
    Native::NAME
}

/// Advances every lane in `lanes` by one MWC1616 step.
#[inline(always)]
pub(crate) fn mwc1616(mut lanes: MwcLanes<'_>) {
    let n = lanes.len();
    let w = Native::WIDTH_U32;
    let mut i = 0usize;

    while i + w <= n {
        // SAFETY: the chunk is exactly `WIDTH_U32` lanes and `Native` is only
        // compiled in when its target feature is enabled
        unsafe { Native::mwc1616(lanes.sub(i..i + w)) };
        i += w;
    }

    if i < n {
        // SAFETY: the portable engine accepts any lane count
        unsafe { Portable::mwc1616(lanes.sub(i..n)) };
    }
}

/// Advances every lane in `lanes` by one xorshift128+ step.
#[inline(always)]
pub(crate) fn xorshift128p(mut lanes: XorshiftLanes<'_>) {
    let n = lanes.len();
    let w = Native::WIDTH_U64;
    let mut i = 0usize;

    while i + w <= n {
        // SAFETY: see `mwc1616`
        unsafe { Native::xorshift128p(lanes.sub(i..i + w)) };
        i += w;
    }

    if i < n {
        // SAFETY: the portable engine accepts any lane count
        unsafe { Portable::xorshift128p(lanes.sub(i..n)) };
    }
}
