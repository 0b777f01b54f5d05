//! RNG module - deterministic random draws for new shapes
//!
//! Shape kind, color and orientation are each drawn uniformly and independently,
//! so any kind may come in any color.
//!
//! Uses a simple LCG so a seed fully determines the sequence of shapes (handy
//! for tests and for replaying a game).

use crate::types::{BlockColor, Orientation, ShapeKind};

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
    /// Uses the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn shape_kind(&mut self) -> ShapeKind {
        ShapeKind::from_index(self.next_range(ShapeKind::ALL.len() as u32) as usize)
    }

    pub fn block_color(&mut self) -> BlockColor {
        BlockColor::from_index(self.next_range(BlockColor::ALL.len() as u32) as usize)
    }

    pub fn orientation(&mut self) -> Orientation {
        Orientation::from_index(self.next_range(Orientation::ALL.len() as u32) as usize)
    }

    /// Current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
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
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_draws_cover_every_value() {
        let mut rng = SimpleRng::new(1);
        let mut kinds = Vec::new();
        let mut colors = Vec::new();
        let mut orientations = Vec::new();
        for _ in 0..500 {
            kinds.push(rng.shape_kind());
            colors.push(rng.block_color());
            orientations.push(rng.orientation());
        }

        for kind in ShapeKind::ALL {
            assert!(kinds.contains(&kind), "Missing kind: {:?}", kind);
        }
        for color in BlockColor::ALL {
            assert!(colors.contains(&color), "Missing color: {:?}", color);
        }
        for orientation in Orientation::ALL {
            assert!(orientations.contains(&orientation));
        }
    }
}
