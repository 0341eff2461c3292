//! Core data model: annotated regions and the raindrop marks placed in them.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable 0-based index assigned at placement time. A re-sample discards the
/// whole region set and restarts ids at 0; ids are never reused across sets.
pub type RegionId = usize;

/// An axis-aligned square sub-area of the source image selected for detailed
/// annotation, expressed in image pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    pub id: RegionId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    /// Strict AABB intersection test; regions that merely touch do not overlap.
    pub fn overlaps(&self, other: &Region) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Whether a region-local point lies inside this region.
    pub fn contains_local(&self, position: Vec2) -> bool {
        position.x >= 0.0
            && position.y >= 0.0
            && position.x <= self.width
            && position.y <= self.height
    }

    /// Region area in square pixels.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// Two-valued category tag for a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MarkColor {
    Red,
    Blue,
}

/// A user-placed annotation representing one observed raindrop.
///
/// Coordinates are region-local: the origin is the owning region's top-left
/// corner, independent of that region's placement in the full image. Any
/// global-to-local transform is the caller's responsibility.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mark {
    /// Opaque unique identifier, assigned by the caller.
    pub id: String,
    pub x: f32,
    pub y: f32,
    /// Disc radius in pixels, > 0.
    pub radius: f32,
    pub color: MarkColor,
}

impl Mark {
    pub fn new(id: impl Into<String>, x: f32, y: f32, radius: f32, color: MarkColor) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            radius,
            color,
        }
    }

    /// Center position as a vector, radius excluded.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(x: f32, y: f32, side: f32) -> Region {
        Region {
            id: 0,
            x,
            y,
            width: side,
            height: side,
        }
    }

    #[test]
    fn overlapping_regions_are_detected() {
        let a = region(0.0, 0.0, 10.0);
        let b = region(5.0, 5.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = region(0.0, 0.0, 10.0);
        let b = region(10.0, 0.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn disjoint_regions_do_not_overlap() {
        let a = region(0.0, 0.0, 10.0);
        let b = region(30.0, 30.0, 5.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn contains_local_includes_edges() {
        let r = region(40.0, 60.0, 100.0);
        assert!(r.contains_local(Vec2::new(0.0, 0.0)));
        assert!(r.contains_local(Vec2::new(100.0, 100.0)));
        assert!(!r.contains_local(Vec2::new(100.1, 50.0)));
        assert!(!r.contains_local(Vec2::new(-0.1, 50.0)));
    }
}
