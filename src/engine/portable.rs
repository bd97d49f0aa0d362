//! # Portable Engine
//!
//! Plain per-lane loops with wrapping integer arithmetic. Used as the native
//! engine when no supported SIMD target feature is enabled, for the tail lanes
//! that don't fill a whole register, and as the reference the SIMD engines
//! are tested against.

use super::{Engine, MwcLanes, XorshiftLanes};

pub(crate) struct Portable;

impl Engine for Portable {
    const NAME: &'static str = "portable";
    const WIDTH_U32: usize = 1;
    const WIDTH_U64: usize = 1;

    /// Accepts any number of lanes.
    #[inline(always)]
    unsafe fn mwc1616(lanes: MwcLanes<'_>) {
        // sanity check
        debug_assert!(lanes.y.len() == lanes.len() && lanes.result.len() == lanes.len());

        for i in 0..lanes.len() {
            let (x, y, r) = mwc1616_lane(lanes.x[i], lanes.y[i], lanes.mask[i], lanes.mul1[i], lanes.mul2[i]);

            lanes.x[i] = x;
            lanes.y[i] = y;
            lanes.result[i] = r;
        }
    }

    /// Accepts any number of lanes.
    #[inline(always)]
    unsafe fn xorshift128p(lanes: XorshiftLanes<'_>) {
        // sanity check
        debug_assert!(lanes.s1.len() == lanes.len() && lanes.result.len() == lanes.len());

        for i in 0..lanes.len() {
            let (s0, s1, r) = xorshift128p_lane(lanes.s0[i], lanes.s1[i]);

            lanes.s0[i] = s0;
            lanes.s1[i] = s1;
            lanes.result[i] = r;
        }
    }
}

/// One MWC1616 step for a single lane.
///
/// Returns `(x_new, y_new, result)`.
///
/// ```md
/// x_new  = (x & mask) * mul1 + (x >> 16)
/// y_new  = (y & mask) * mul2 + (y >> 16)
/// result = (x_new << 16) + (y_new & mask)
/// ```
#[inline(always)]
pub(crate) fn mwc1616_lane(x: u32, y: u32, mask: u32, mul1: u32, mul2: u32) -> (u32, u32, u32) {
    let x_new = (x & mask).wrapping_mul(mul1).wrapping_add(x >> 16);
    let y_new = (y & mask).wrapping_mul(mul2).wrapping_add(y >> 16);

    (x_new, y_new, (x_new << 16).wrapping_add(y_new & mask))
}

/// One xorshift128+ step for a single lane.
///
/// Returns `(s0_new, s1_new, result)`.
///
/// NOTE: The stored `s0` feeds the recurrence as `s1` and vice versa. This
/// swap is part of the output sequence, keep it.
///
/// ```md
/// s1 = s0_in; s0 = s1_in
/// t      = s1 ^ (s1 << 23)
/// s1_new = t ^ s0 ^ (t >> 18) ^ (s0 >> 5)
/// result = s1_new + s0
/// ```
#[inline(always)]
pub(crate) fn xorshift128p_lane(s0: u64, s1: u64) -> (u64, u64, u64) {
    let (s1, s0) = (s0, s1);

    let t = s1 ^ (s1 << 23);
    let s1_new = t ^ s0 ^ (t >> 18) ^ (s0 >> 5);

    (s0, s1_new, s1_new.wrapping_add(s0))
}

#[cfg(test)]
mod portable_tests {
    use super::*;

    mod mwc1616 {
        use super::*;

        #[test]
        fn test_known_vector_from_unit_state() {
            let (x, y, r) = mwc1616_lane(1, 1, 0xFFFF, 0x4650, 0x78B7);

            assert_eq!(x, 0x4650);
            assert_eq!(y, 0x78B7);
            assert_eq!(r, 0x465078B7);
        }

        #[test]
        fn test_zero_lane_stays_zero() {
            assert_eq!(mwc1616_lane(0, 0, 0xFFFF, 0x4650, 0x78B7), (0, 0, 0));
        }

        #[test]
        fn test_wraps_modulo_2_pow_32() {
            let (x, y, r) = mwc1616_lane(u32::MAX, u32::MAX, 0xFFFF, 0x4650, 0x78B7);

            let wide_x = (0xFFFFu64 * 0x4650 + 0xFFFF) % (1 << 32);
            let wide_y = (0xFFFFu64 * 0x78B7 + 0xFFFF) % (1 << 32);
            let wide_r = ((wide_x << 16) + (wide_y & 0xFFFF)) % (1 << 32);

            assert_eq!(x as u64, wide_x);
            assert_eq!(y as u64, wide_y);
            assert_eq!(r as u64, wide_r);
        }

        #[test]
        fn test_result_shift_drops_high_bits() {
            // x_new = 0xFFFF * 0x4650 + 0xFFFF = 0x4650_0000 - 0x4650 + 0xFFFF
            let (x, _, r) = mwc1616_lane(0xFFFF_FFFF, 0, 0xFFFF, 0x4650, 0x78B7);

            assert_eq!(x, 0x4650_B9AF);
            assert_eq!(r, 0xB9AF_0000);
        }
    }

    mod xorshift128p {
        use super::*;

        #[test]
        fn test_known_vector_from_one_two() {
            let (s0, s1, r) = xorshift128p_lane(1, 2);

            assert_eq!(s0, 2);
            assert_eq!(s1, 0x800023);
            assert_eq!(r, 0x800025);
        }

        #[test]
        fn test_zero_state_is_fixed_point() {
            let mut s = (0u64, 0u64);

            for _ in 0..100 {
                let (s0, s1, r) = xorshift128p_lane(s.0, s.1);
                assert_eq!(r, 0);
                s = (s0, s1);
            }

            assert_eq!(s, (0, 0));
        }

        #[test]
        fn test_wraps_modulo_2_pow_64() {
            let (s0, s1, r) = xorshift128p_lane(u64::MAX, u64::MAX);

            let t = u64::MAX ^ (u64::MAX << 23);
            let expected_s1 = t ^ u64::MAX ^ (t >> 18) ^ (u64::MAX >> 5);
            let expected_r = ((expected_s1 as u128 + u64::MAX as u128) % (1u128 << 64)) as u64;

            assert_eq!(s0, u64::MAX);
            assert_eq!(s1, expected_s1);
            assert_eq!(r, expected_r);
        }

        #[test]
        fn test_roles_are_swapped() {
            // the textbook update would read s0 as the shifted word
            let (s0, _, _) = xorshift128p_lane(0xAAAA, 0x5555);
            assert_eq!(s0, 0x5555, "stored s1 must move into s0 unchanged");
        }
    }
}
