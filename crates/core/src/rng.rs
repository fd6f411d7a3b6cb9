//! Deterministic pseudo-random numbers for shape and color draws.
//!
//! A small LCG keeps the whole game reproducible from a single `u32` seed
//! with no dependency on platform randomness. Two engines built with the
//! same seed see the same shapes and colors forever.

use crate::types::{Rgb, ShapeKind};

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed the generator. A zero seed is bumped to one so the stream
    /// never starts from the fixed point.
    pub fn new(seed: u32) -> SimpleRng {
        SimpleRng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform-ish draw in `0..max`. `max` must be nonzero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        self.next() % max
    }

    /// Draw one of the seven shapes, each equally likely.
    pub fn next_shape(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.next_range(ShapeKind::ALL.len() as u32) as usize]
    }

    /// Draw a display color with every channel in `64..=255`, bright
    /// enough to read against the well.
    pub fn next_color(&mut self) -> Rgb {
        let r = 64 + self.next_range(192) as u8;
        let g = 64 + self.next_range(192) as u8;
        let b = 64 + self.next_range(192) as u8;
        Rgb::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_range(1000), b.next_range(1000));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SimpleRng::new(1);
        let mut b = SimpleRng::new(2);
        let draws_a: Vec<u32> = (0..16).map(|_| a.next_range(u32::MAX)).collect();
        let draws_b: Vec<u32> = (0..16).map(|_| b.next_range(u32::MAX)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_range(u32::MAX), one.next_range(u32::MAX));
    }

    #[test]
    fn test_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_all_shapes_eventually_drawn() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[rng.next_shape().index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing shapes after 500 draws");
    }

    #[test]
    fn test_colors_are_bright() {
        let mut rng = SimpleRng::new(42);
        for _ in 0..200 {
            let c = rng.next_color();
            assert!(c.r >= 64 && c.g >= 64 && c.b >= 64, "dim channel in {c:?}");
        }
    }
}
