//! # AVX2 Engine
//!
//! **Only for x86_64 with `avx2` enabled at build time!**
//!
//! One `__m256i` holds 8 MWC1616 lanes or 4 xorshift128+ lanes. With AVX-512F
//! enabled the default lane counts double and this engine runs two chunks per
//! step.
//!
use super::{Engine, MwcLanes, XorshiftLanes};
use core::arch::x86_64::*;

pub(crate) const AVX2_N32: usize = 8;
pub(crate) const AVX2_N64: usize = 4;

pub(crate) struct AVX2;

impl Engine for AVX2 {
    const NAME: &'static str = "avx2";
    const WIDTH_U32: usize = AVX2_N32;
    const WIDTH_U64: usize = AVX2_N64;

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    unsafe fn mwc1616(lanes: MwcLanes<'_>) {
        // sanity check
        debug_assert!(lanes.len() == AVX2_N32, "AVX2 lane chunk must be 8 u32 wide");

        let x = _mm256_loadu_si256(lanes.x.as_ptr() as *const __m256i);
        let y = _mm256_loadu_si256(lanes.y.as_ptr() as *const __m256i);

        let mask = _mm256_loadu_si256(lanes.mask.as_ptr() as *const __m256i);
        let mul1 = _mm256_loadu_si256(lanes.mul1.as_ptr() as *const __m256i);
        let mul2 = _mm256_loadu_si256(lanes.mul2.as_ptr() as *const __m256i);

        // x and y chains are independent, interleave them for ILP
        let xmask = _mm256_and_si256(x, mask);
        let ymask = _mm256_and_si256(y, mask);
        let xshift = _mm256_srli_epi32(x, 16);
        let yshift = _mm256_srli_epi32(y, 16);

        let xnew = _mm256_add_epi32(_mm256_mullo_epi32(xmask, mul1), xshift);
        let ynew = _mm256_add_epi32(_mm256_mullo_epi32(ymask, mul2), yshift);

        let res = _mm256_add_epi32(_mm256_slli_epi32(xnew, 16), _mm256_and_si256(ynew, mask));

        _mm256_storeu_si256(lanes.x.as_mut_ptr() as *mut __m256i, xnew);
        _mm256_storeu_si256(lanes.y.as_mut_ptr() as *mut __m256i, ynew);
        _mm256_storeu_si256(lanes.result.as_mut_ptr() as *mut __m256i, res);
    }

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    unsafe fn xorshift128p(lanes: XorshiftLanes<'_>) {
        // sanity check
        debug_assert!(lanes.len() == AVX2_N64, "AVX2 lane chunk must be 4 u64 wide");

        let s1 = _mm256_loadu_si256(lanes.s0.as_ptr() as *const __m256i);
        let s0 = _mm256_loadu_si256(lanes.s1.as_ptr() as *const __m256i);

        _mm256_storeu_si256(lanes.s0.as_mut_ptr() as *mut __m256i, s0);

        let t = _mm256_xor_si256(s1, _mm256_slli_epi64(s1, 23));

        // (t ^ s0) and (t >> 18) ^ (s0 >> 5) don't depend on each other
        let ts0 = _mm256_xor_si256(t, s0);
        let shifts = _mm256_xor_si256(_mm256_srli_epi64(t, 18), _mm256_srli_epi64(s0, 5));
        let s1_new = _mm256_xor_si256(ts0, shifts);

        _mm256_storeu_si256(lanes.s1.as_mut_ptr() as *mut __m256i, s1_new);
        _mm256_storeu_si256(lanes.result.as_mut_ptr() as *mut __m256i, _mm256_add_epi64(s1_new, s0));
    }
}

#[cfg(test)]
mod avx2_tests {
    use super::*;

    #[test]
    fn test_mwc1616_known_vector_in_every_lane() {
        let mut x = [1u32; AVX2_N32];
        let mut y = [1u32; AVX2_N32];
        let mut res = [0u32; AVX2_N32];

        unsafe {
            AVX2::mwc1616(MwcLanes {
                x: &mut x,
                y: &mut y,
                mask: &[0xFFFF; AVX2_N32],
                mul1: &[0x4650; AVX2_N32],
                mul2: &[0x78B7; AVX2_N32],
                result: &mut res,
            });
        }

        assert_eq!(x, [0x4650; AVX2_N32]);
        assert_eq!(y, [0x78B7; AVX2_N32]);
        assert_eq!(res, [0x465078B7; AVX2_N32]);
    }

    #[test]
    fn test_xorshift128p_known_vector_in_every_lane() {
        let mut s0 = [1u64; AVX2_N64];
        let mut s1 = [2u64; AVX2_N64];
        let mut res = [0u64; AVX2_N64];

        unsafe {
            AVX2::xorshift128p(XorshiftLanes {
                s0: &mut s0,
                s1: &mut s1,
                result: &mut res,
            });
        }

        assert_eq!(s0, [2; AVX2_N64]);
        assert_eq!(s1, [0x800023; AVX2_N64]);
        assert_eq!(res, [0x800025; AVX2_N64]);
    }

    #[test]
    fn test_zero_lanes_stay_zero_next_to_live_ones() {
        let mut s0 = [0u64, 1, 0, 1];
        let mut s1 = [0u64, 2, 0, 2];
        let mut res = [0u64; AVX2_N64];

        unsafe {
            AVX2::xorshift128p(XorshiftLanes {
                s0: &mut s0,
                s1: &mut s1,
                result: &mut res,
            });
        }

        assert_eq!(res, [0, 0x800025, 0, 0x800025]);
        assert_eq!(s0, [0, 2, 0, 2]);
    }
}
