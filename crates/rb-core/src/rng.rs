//! Deterministic RNG for host-side scripts.
//!
//! Agents themselves are deterministic; randomness only enters through the
//! stand-in host when it scripts which events arrive on which turn.  The
//! same seed always produces the same script.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG for a single battle run.
pub struct BattleRng(SmallRng);

impl BattleRng {
    pub fn new(seed: u64) -> Self {
        BattleRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent stream for round `round` of the same battle.
    pub fn for_round(seed: u64, round: u32) -> Self {
        BattleRng::new(seed ^ (round as u64).wrapping_mul(MIXING_CONSTANT))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
