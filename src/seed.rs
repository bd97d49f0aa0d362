//! Seeding from a non-deterministic entropy source.

use crate::error::{Error, Result};

/// Upper bound on redraws for a lane whose state came out all-zero.
///
/// A healthy source hits this with probability 2^-1024 or less, so reaching it
/// means the source is broken.
const MAX_LANE_DRAWS: usize = 16;

/// A provider of seed words.
///
/// Generators draw from this only at construction time. Implementations are
/// expected to be non-deterministic in production ([`OsEntropy`]); tests may
/// plug in a scripted source.
pub trait EntropySource {
    /// Returns the next 32 bits of entropy.
    fn next_u32(&mut self) -> Result<u32>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    #[inline]
    fn next_u32(&mut self) -> Result<u32> {
        (**self).next_u32()
    }
}

/// Entropy from the operating system (`getrandom(2)`, `BCryptGenRandom`, etc.).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    #[inline]
    fn next_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        getrandom::fill(&mut buf)?;

        Ok(u32::from_ne_bytes(buf))
    }
}

/// Draws `(x, y)` for one MWC lane, redrawing while both are zero.
pub(crate) fn draw_lane_u32<S: EntropySource + ?Sized>(src: &mut S, lane: usize) -> Result<(u32, u32)> {
    for _ in 0..MAX_LANE_DRAWS {
        let x = src.next_u32()?;
        let y = src.next_u32()?;

        if x | y != 0 {
            return Ok((x, y));
        }

        log::debug!("redrawing all-zero mwc1616 seed for lane {lane}");
    }

    Err(Error::ZeroEntropy {
        lane,
        attempts: MAX_LANE_DRAWS,
    })
}

/// Draws `(s0, s1)` for one xorshift128+ lane, redrawing while both are zero.
pub(crate) fn draw_lane_u64<S: EntropySource + ?Sized>(src: &mut S, lane: usize) -> Result<(u64, u64)> {
    for _ in 0..MAX_LANE_DRAWS {
        let s0 = draw_u64(src)?;
        let s1 = draw_u64(src)?;

        if s0 | s1 != 0 {
            return Ok((s0, s1));
        }

        log::debug!("redrawing all-zero xorshift128+ seed for lane {lane}");
    }

    Err(Error::ZeroEntropy {
        lane,
        attempts: MAX_LANE_DRAWS,
    })
}

/// Two 32-bit draws, first one in the high half.
#[inline]
fn draw_u64<S: EntropySource + ?Sized>(src: &mut S) -> Result<u64> {
    let hi = src.next_u32()? as u64;
    let lo = src.next_u32()? as u64;

    Ok((hi << 32) | lo)
}
