//! # SSE4.1 Engine
//!
//! **Only for x86_64 with `sse4.1` enabled at build time!**
//!
//! One `__m128i` holds 4 MWC1616 lanes or 2 xorshift128+ lanes. SSE4.1 is the
//! floor because `_mm_mullo_epi32` first appears there.
//!
use super::{Engine, MwcLanes, XorshiftLanes};
use core::arch::x86_64::*;

pub(crate) const SSE_N32: usize = 4;
pub(crate) const SSE_N64: usize = 2;

pub(crate) struct SSE;

impl Engine for SSE {
    const NAME: &'static str = "sse4.1";
    const WIDTH_U32: usize = SSE_N32;
    const WIDTH_U64: usize = SSE_N64;

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    unsafe fn mwc1616(lanes: MwcLanes<'_>) {
        // sanity check
        debug_assert!(lanes.len() == SSE_N32, "SSE lane chunk must be 4 u32 wide");

        let x = _mm_loadu_si128(lanes.x.as_ptr() as *const __m128i);
        let y = _mm_loadu_si128(lanes.y.as_ptr() as *const __m128i);

        let mask = _mm_loadu_si128(lanes.mask.as_ptr() as *const __m128i);
        let mul1 = _mm_loadu_si128(lanes.mul1.as_ptr() as *const __m128i);
        let mul2 = _mm_loadu_si128(lanes.mul2.as_ptr() as *const __m128i);

        // x' = (x & mask) * mul1 + (x >> 16)
        let xmul = _mm_mullo_epi32(_mm_and_si128(x, mask), mul1);
        let xnew = _mm_add_epi32(xmul, _mm_srli_epi32(x, 16));

        // y' = (y & mask) * mul2 + (y >> 16)
        let ymul = _mm_mullo_epi32(_mm_and_si128(y, mask), mul2);
        let ynew = _mm_add_epi32(ymul, _mm_srli_epi32(y, 16));

        // res = (x' << 16) + (y' & mask)
        let res = _mm_add_epi32(_mm_slli_epi32(xnew, 16), _mm_and_si128(ynew, mask));

        _mm_storeu_si128(lanes.x.as_mut_ptr() as *mut __m128i, xnew);
        _mm_storeu_si128(lanes.y.as_mut_ptr() as *mut __m128i, ynew);
        _mm_storeu_si128(lanes.result.as_mut_ptr() as *mut __m128i, res);
    }

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    unsafe fn xorshift128p(lanes: XorshiftLanes<'_>) {
        // sanity check
        debug_assert!(lanes.len() == SSE_N64, "SSE lane chunk must be 2 u64 wide");

        // NOTE: roles are crossed on load, stored `s0` is the recurrence's `s1`
        let s1 = _mm_loadu_si128(lanes.s0.as_ptr() as *const __m128i);
        let s0 = _mm_loadu_si128(lanes.s1.as_ptr() as *const __m128i);

        _mm_storeu_si128(lanes.s0.as_mut_ptr() as *mut __m128i, s0);

        // t = s1 ^ (s1 << 23)
        let t = _mm_xor_si128(s1, _mm_slli_epi64(s1, 23));

        // s1' = t ^ s0 ^ (t >> 18) ^ (s0 >> 5)
        let ts0 = _mm_xor_si128(t, s0);
        let s1_new = _mm_xor_si128(_mm_xor_si128(ts0, _mm_srli_epi64(t, 18)), _mm_srli_epi64(s0, 5));

        _mm_storeu_si128(lanes.s1.as_mut_ptr() as *mut __m128i, s1_new);
        _mm_storeu_si128(lanes.result.as_mut_ptr() as *mut __m128i, _mm_add_epi64(s1_new, s0));
    }
}

#[cfg(test)]
mod sse_tests {
    use super::*;

    #[test]
    fn test_mwc1616_known_vector_in_every_lane() {
        let mut x = [1u32; SSE_N32];
        let mut y = [1u32; SSE_N32];
        let mut res = [0u32; SSE_N32];

        unsafe {
            SSE::mwc1616(MwcLanes {
                x: &mut x,
                y: &mut y,
                mask: &[0xFFFF; SSE_N32],
                mul1: &[0x4650; SSE_N32],
                mul2: &[0x78B7; SSE_N32],
                result: &mut res,
            });
        }

        assert_eq!(x, [0x4650; SSE_N32]);
        assert_eq!(y, [0x78B7; SSE_N32]);
        assert_eq!(res, [0x465078B7; SSE_N32]);
    }

    #[test]
    fn test_xorshift128p_known_vector_in_every_lane() {
        let mut s0 = [1u64; SSE_N64];
        let mut s1 = [2u64; SSE_N64];
        let mut res = [0u64; SSE_N64];

        unsafe {
            SSE::xorshift128p(XorshiftLanes {
                s0: &mut s0,
                s1: &mut s1,
                result: &mut res,
            });
        }

        assert_eq!(s0, [2; SSE_N64]);
        assert_eq!(s1, [0x800023; SSE_N64]);
        assert_eq!(res, [0x800025; SSE_N64]);
    }

    #[test]
    fn test_lanes_do_not_leak_into_neighbours() {
        let mut x = [0u32, 0xFFFF_FFFF, 0, 0];
        let mut y = [0u32; SSE_N32];
        let mut res = [0u32; SSE_N32];

        unsafe {
            SSE::mwc1616(MwcLanes {
                x: &mut x,
                y: &mut y,
                mask: &[0xFFFF; SSE_N32],
                mul1: &[0x4650; SSE_N32],
                mul2: &[0x78B7; SSE_N32],
                result: &mut res,
            });
        }

        assert_eq!(res, [0, 0xB9AF_0000, 0, 0]);
    }
}
