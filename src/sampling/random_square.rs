//! Random rejection-sampling placement of non-overlapping square regions.
use glam::Vec2;
use mint::Vector2;
use rand::RngCore;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::region::Region;
use crate::sampling::{rand01, RegionSampling};

/// Smallest usable region side length in pixels, regardless of image size.
const MIN_SIDE: f32 = 50.0;

/// Upper bound on the region side relative to the shorter image edge.
const MAX_SIDE_RATIO: f32 = 0.9;

/// Random placement of a fixed count of equally sized, axis-aligned square
/// regions whose combined area approximates a target fraction of the image.
///
/// Placement is bounded rejection sampling: each region draws random top-left
/// corners until one does not overlap any already placed region. When the
/// attempt budget is exhausted the region is placed at a final random position
/// with overlap allowed; the strategy always returns exactly `region_count`
/// regions. Side-length clamping trades exact area-fraction fidelity for the
/// guarantee that every region fits inside the image.
#[derive(Debug, Clone)]
pub struct RandomSquareSampling {
    /// Number of regions to place.
    pub region_count: usize,
    /// Fraction of the image area the regions should cover in total, in (0, 1).
    pub target_area_fraction: f32,
    /// Placement attempts per region before the overlap-allowed fallback.
    pub max_attempts: usize,
}

impl Default for RandomSquareSampling {
    fn default() -> Self {
        Self {
            region_count: 5,
            target_area_fraction: 0.25,
            max_attempts: 5000,
        }
    }
}

impl RandomSquareSampling {
    /// Create a strategy with the default count, area fraction, and budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of regions to place.
    pub fn with_region_count(mut self, region_count: usize) -> Self {
        self.region_count = region_count;
        self
    }

    /// Sets the target combined area fraction.
    pub fn with_target_area_fraction(mut self, target_area_fraction: f32) -> Self {
        self.target_area_fraction = target_area_fraction;
        self
    }

    /// Sets the per-region placement attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Validates the strategy configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.region_count == 0 {
            return Err(Error::InvalidRegionCount(self.region_count));
        }
        if !self.target_area_fraction.is_finite()
            || self.target_area_fraction <= 0.0
            || self.target_area_fraction >= 1.0
        {
            return Err(Error::InvalidConfig(
                "target_area_fraction must be in (0, 1)".into(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig("max_attempts must be > 0".into()));
        }

        Ok(())
    }

    /// Common square side length for the given image extent.
    fn side_length(&self, extent: Vec2) -> f32 {
        let target_area = extent.x * extent.y * self.target_area_fraction;
        let mut side = (target_area / self.region_count as f32).sqrt().floor();

        let min_edge = extent.x.min(extent.y);
        let raw = side;
        if side > min_edge * MAX_SIDE_RATIO {
            side = (min_edge * MAX_SIDE_RATIO).floor();
        }
        if side < MIN_SIDE {
            side = MIN_SIDE;
        }
        if side > min_edge {
            side = min_edge;
        }
        if side != raw {
            debug!(raw, side, "region side clamped to fit image");
        }

        side
    }
}

impl RegionSampling for RandomSquareSampling {
    fn generate(
        &self,
        image_extent: Vector2<f32>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Region>> {
        self.validate()?;

        let extent = Vec2::from(image_extent);
        if !extent.x.is_finite() || !extent.y.is_finite() || extent.x <= 0.0 || extent.y <= 0.0 {
            return Err(Error::InvalidDimension(format!(
                "image extent must be > 0 in both components, got {}x{}",
                extent.x, extent.y
            )));
        }

        let side = self.side_length(extent);
        let max_x = (extent.x - side).max(0.0);
        let max_y = (extent.y - side).max(0.0);

        let mut regions: Vec<Region> = Vec::with_capacity(self.region_count);
        for id in 0..self.region_count {
            let mut placed = false;

            for _ in 0..self.max_attempts {
                let candidate = Region {
                    id,
                    x: (rand01(rng) * max_x).floor(),
                    y: (rand01(rng) * max_y).floor(),
                    width: side,
                    height: side,
                };

                if regions.iter().all(|r| !candidate.overlaps(r)) {
                    regions.push(candidate);
                    placed = true;
                    break;
                }
            }

            // Degraded-mode success, not an error: the caller always gets
            // exactly region_count regions.
            if !placed {
                warn!(
                    id,
                    attempts = self.max_attempts,
                    "placement budget exhausted, placing with overlap allowed"
                );
                regions.push(Region {
                    id,
                    x: (rand01(rng) * max_x).floor(),
                    y: (rand01(rng) * max_y).floor(),
                    width: side,
                    height: side,
                });
            }
        }

        Ok(regions)
    }
}
