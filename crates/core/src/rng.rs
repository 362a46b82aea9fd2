//! RNG module - injectable randomness for tile spawns
//!
//! The engine never touches ambient randomness. It draws through [`TileRng`],
//! which needs only two primitives: a uniform pick over `0..len` (which empty
//! cell) and a biased boolean (which letter).
//!
//! Implementations:
//! - [`SimpleRng`]: seeded LCG, deterministic across platforms
//! - [`SequenceRng`]: replays scripted draws, for tests
//! - [`RandRng`]: wraps any `rand::Rng`

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source consumed by the engine
pub trait TileRng {
    /// Uniform index in `0..len`. `len` is always at least 1.
    fn pick(&mut self, len: usize) -> usize;

    /// True with probability `numerator / denominator`
    fn chance(&mut self, numerator: u32, denominator: u32) -> bool;
}

impl<R: TileRng + ?Sized> TileRng for &mut R {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }

    fn chance(&mut self, numerator: u32, denominator: u32) -> bool {
        (**self).chance(numerator, denominator)
    }
}

impl<R: TileRng + ?Sized> TileRng for Box<R> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }

    fn chance(&mut self, numerator: u32, denominator: u32) -> bool {
        (**self).chance(numerator, denominator)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current generator state, usable as a seed to replay from here
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TileRng for SimpleRng {
    fn pick(&mut self, len: usize) -> usize {
        self.next_range(len.max(1) as u32) as usize
    }

    fn chance(&mut self, numerator: u32, denominator: u32) -> bool {
        self.next_range(denominator.max(1)) < numerator
    }
}

/// Replays a fixed script of draws
///
/// Picks are reduced modulo `len`. Once a script runs dry, picks fall back to
/// `0` and chances to `true`, so an exhausted script keeps spawning `A` into
/// the first empty cell.
#[derive(Debug, Clone, Default)]
pub struct SequenceRng {
    picks: VecDeque<usize>,
    chances: VecDeque<bool>,
}

impl SequenceRng {
    pub fn new(
        picks: impl IntoIterator<Item = usize>,
        chances: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            chances: chances.into_iter().collect(),
        }
    }

    /// Remaining scripted (picks, chances)
    pub fn remaining(&self) -> (usize, usize) {
        (self.picks.len(), self.chances.len())
    }
}

impl TileRng for SequenceRng {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len.max(1)
    }

    fn chance(&mut self, _numerator: u32, _denominator: u32) -> bool {
        self.chances.pop_front().unwrap_or(true)
    }
}

/// Adapter over any [`rand::Rng`]
#[derive(Debug, Clone)]
pub struct RandRng<R>(pub R);

impl RandRng<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: Rng> TileRng for RandRng<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len.max(1))
    }

    fn chance(&mut self, numerator: u32, denominator: u32) -> bool {
        self.0.gen_ratio(numerator.min(denominator), denominator.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_pick_in_range() {
        let mut rng = SimpleRng::new(7);
        for len in 1..=16 {
            for _ in 0..50 {
                assert!(rng.pick(len) < len);
            }
        }
    }

    #[test]
    fn test_chance_roughly_ninety_percent() {
        let mut rng = SimpleRng::new(99);
        let hits = (0..10_000).filter(|_| rng.chance(9, 10)).count();
        assert!((8_500..9_500).contains(&hits), "hits = {}", hits);
    }

    #[test]
    fn test_sequence_rng_replays_then_defaults() {
        let mut rng = SequenceRng::new([5, 2], [false]);
        assert_eq!(rng.pick(4), 1);
        assert_eq!(rng.pick(4), 2);
        assert!(!rng.chance(9, 10));
        assert_eq!(rng.remaining(), (0, 0));
        assert_eq!(rng.pick(4), 0);
        assert!(rng.chance(9, 10));
    }

    #[test]
    fn test_rand_adapter_is_reproducible() {
        let mut a = RandRng::seeded(42);
        let mut b = RandRng::seeded(42);
        for _ in 0..32 {
            assert_eq!(a.pick(16), b.pick(16));
            assert_eq!(a.chance(9, 10), b.chance(9, 10));
        }
    }

    #[test]
    fn test_trait_forwarding() {
        fn draw<R: TileRng>(mut rng: R) -> usize {
            rng.pick(8)
        }

        let mut inner = SequenceRng::new([3], [true]);
        assert_eq!(draw(&mut inner), 3);
        assert_eq!(inner.remaining(), (0, 1));

        let mut boxed: Box<dyn TileRng> = Box::new(SimpleRng::new(3));
        assert!(boxed.pick(2) < 2);
    }
}
