//! Sampling strategies for placing annotation regions over an image.
//!
//! This module defines the trait used to place a fixed count of square regions
//! inside an image given its pixel dimensions, plus the concrete random
//! rejection-sampling strategy.
use mint::Vector2;
use rand::RngCore;

use crate::error::Result;
use crate::region::Region;

pub mod random_square;

pub use random_square::RandomSquareSampling;

/// Trait for region placement.
pub trait RegionSampling: Send + Sync {
    /// Place regions inside an image of the given pixel extent.
    ///
    /// # Errors
    ///
    /// Returns an error when the extent or the strategy configuration is
    /// invalid; placement itself never fails.
    fn generate(&self, image_extent: Vector2<f32>, rng: &mut dyn RngCore)
        -> Result<Vec<Region>>;
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRng {
        value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_below_one() {
        let mut rng = FixedRng { value: u32::MAX };
        let result = rand01(&mut rng);
        assert!((0.0..1.0).contains(&result) || (result - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rand01_midpoint_is_half() {
        let mut rng = FixedRng {
            value: u32::MAX / 2,
        };
        assert!((rand01(&mut rng) - 0.5).abs() < 0.001);
    }
}
