//! Random 3D point clouds (uniform in the unit cube + replay tokens).
//!
//! Purpose
//! - Provide the point clouds the viewer explores. Every coordinate is drawn
//!   independently and uniformly from [0, 1).
//! - Keep draws reproducible: a replay token `(seed, index)` is mixed into a
//!   single RNG, so the session can regenerate a fresh cloud per request and
//!   still replay any of them later.
//!
//! Code cross-refs: `session::Session::regenerate`, `complex::rips`.

use crate::error::SessionError;
use crate::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// Token for the next draw of the same seed.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Generator configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct CloudCfg {
    /// Seed of the replay stream. `None` draws one from OS entropy when the session starts.
    pub seed: Option<u64>,
}

/// Draw `n` points with coordinates uniform in [0, 1).
///
/// `n == 0` is rejected; upper bounds are the caller's business (the session
/// enforces the widget range).
pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<Point>, SessionError> {
    if n == 0 {
        return Err(SessionError::InvalidPointCount {
            n,
            min: 1,
            max: usize::MAX,
        });
    }
    Ok((0..n)
        .map(|_| Point::new(rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>()))
        .collect())
}

/// Replayable variant of [`generate`].
pub fn generate_replay(n: usize, tok: ReplayToken) -> Result<Vec<Point>, SessionError> {
    let mut rng = tok.to_std_rng();
    generate(n, &mut rng)
}
