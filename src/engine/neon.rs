//! # NEON Engine
//!
//! **Only for aarch64 architectures!**
//!
//! One `uint32x4_t` holds 4 MWC1616 lanes, one `uint64x2_t` holds 2
//! xorshift128+ lanes.
//!
use super::{Engine, MwcLanes, XorshiftLanes};
use core::arch::aarch64::*;

pub(crate) const NEON_N32: usize = 4;
pub(crate) const NEON_N64: usize = 2;

pub(crate) struct NEON;

impl Engine for NEON {
    const NAME: &'static str = "neon";
    const WIDTH_U32: usize = NEON_N32;
    const WIDTH_U64: usize = NEON_N64;

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn, unused_unsafe)]
    unsafe fn mwc1616(lanes: MwcLanes<'_>) {
        // sanity check
        debug_assert!(lanes.len() == NEON_N32, "NEON lane chunk must be 4 u32 wide");

        let x = vld1q_u32(lanes.x.as_ptr());
        let y = vld1q_u32(lanes.y.as_ptr());

        let mask = vld1q_u32(lanes.mask.as_ptr());
        let mul1 = vld1q_u32(lanes.mul1.as_ptr());
        let mul2 = vld1q_u32(lanes.mul2.as_ptr());

        let xnew = vaddq_u32(vmulq_u32(vandq_u32(x, mask), mul1), vshrq_n_u32::<16>(x));
        let ynew = vaddq_u32(vmulq_u32(vandq_u32(y, mask), mul2), vshrq_n_u32::<16>(y));

        let res = vaddq_u32(vshlq_n_u32::<16>(xnew), vandq_u32(ynew, mask));

        vst1q_u32(lanes.x.as_mut_ptr(), xnew);
        vst1q_u32(lanes.y.as_mut_ptr(), ynew);
        vst1q_u32(lanes.result.as_mut_ptr(), res);
    }

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn, unused_unsafe)]
    unsafe fn xorshift128p(lanes: XorshiftLanes<'_>) {
        // sanity check
        debug_assert!(lanes.len() == NEON_N64, "NEON lane chunk must be 2 u64 wide");

        let s1 = vld1q_u64(lanes.s0.as_ptr());
        let s0 = vld1q_u64(lanes.s1.as_ptr());

        vst1q_u64(lanes.s0.as_mut_ptr(), s0);

        let t = veorq_u64(s1, vshlq_n_u64::<23>(s1));

        let ts0 = veorq_u64(t, s0);
        let shifts = veorq_u64(vshrq_n_u64::<18>(t), vshrq_n_u64::<5>(s0));
        let s1_new = veorq_u64(ts0, shifts);

        vst1q_u64(lanes.s1.as_mut_ptr(), s1_new);
        vst1q_u64(lanes.result.as_mut_ptr(), vaddq_u64(s1_new, s0));
    }
}
