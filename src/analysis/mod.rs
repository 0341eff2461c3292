//! Per-region descriptive statistics and session-wide averages.
//!
//! Statistics are recomputed in full on every call. Per-region mark counts are
//! tens to low hundreds, so the exhaustive O(n²) pairwise distance scan is the
//! intended strategy and no spatial index is used.
use std::f32::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::region::{Mark, RegionId};

/// Descriptive statistics for the marks of one region. Derived on demand,
/// never stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegionStats {
    pub region_id: RegionId,
    /// Number of marks in the region.
    pub count: usize,
    /// Sum of per-mark disc areas in square pixels. Overlapping discs are not
    /// deduplicated; this is nominal ink coverage, not geometric union area.
    pub total_pixel_area: f32,
    /// `total_pixel_area` relative to the region area, in percent. Not clamped;
    /// heavily overlapping discs can push this past 100.
    pub percentage_area: f32,
    /// Smallest pairwise center distance, `None` when fewer than two marks.
    pub min_distance: Option<f32>,
    /// Largest pairwise center distance, `None` when fewer than two marks.
    pub max_distance: Option<f32>,
}

/// Averages over all regions of a session, consumed by reporting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionSummary {
    /// Mean mark count across all regions, zero-mark regions included.
    pub avg_count: f32,
    /// Mean coverage percentage across all regions, zero-mark regions included.
    pub avg_percentage: f32,
    /// Mean of the defined per-region minimum distances, `None` when no region
    /// has one.
    pub avg_min_distance: Option<f32>,
    /// Mean of the defined per-region maximum distances, `None` when no region
    /// has one.
    pub avg_max_distance: Option<f32>,
}

/// Compute the statistics for one region's marks.
///
/// Marks must already be in region-local coordinates. Distances are measured
/// between mark centers; the radius only contributes to the area metrics.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] when either region dimension is not a
/// positive finite number. Total for all other inputs; an empty slice yields
/// zero counts and `None` distances.
pub fn analyze_region(
    marks: &[Mark],
    region_width: f32,
    region_height: f32,
    region_id: RegionId,
) -> Result<RegionStats> {
    if !region_width.is_finite()
        || !region_height.is_finite()
        || region_width <= 0.0
        || region_height <= 0.0
    {
        return Err(Error::InvalidDimension(format!(
            "region dimensions must be > 0, got {region_width}x{region_height}"
        )));
    }

    let count = marks.len();
    let total_pixel_area: f32 = marks.iter().map(|m| PI * m.radius * m.radius).sum();
    let percentage_area = total_pixel_area / (region_width * region_height) * 100.0;

    let mut min_distance = None;
    let mut max_distance = None;
    for (i, a) in marks.iter().enumerate() {
        for b in marks.iter().skip(i + 1) {
            let d = a.position().distance(b.position());
            min_distance = Some(min_distance.map_or(d, |m: f32| m.min(d)));
            max_distance = Some(max_distance.map_or(d, |m: f32| m.max(d)));
        }
    }

    Ok(RegionStats {
        region_id,
        count,
        total_pixel_area,
        percentage_area,
        min_distance,
        max_distance,
    })
}

/// Average the given per-region statistics into a session summary.
///
/// Count and percentage averages run over every region, so empty regions pull
/// them down. Distance averages only run over regions where the value is
/// defined and are `None` when no region defines one.
pub fn summarize(stats: &[RegionStats]) -> SessionSummary {
    if stats.is_empty() {
        return SessionSummary {
            avg_count: 0.0,
            avg_percentage: 0.0,
            avg_min_distance: None,
            avg_max_distance: None,
        };
    }

    let regions = stats.len() as f32;
    let total_count: usize = stats.iter().map(|s| s.count).sum();
    let total_percentage: f32 = stats.iter().map(|s| s.percentage_area).sum();

    SessionSummary {
        avg_count: total_count as f32 / regions,
        avg_percentage: total_percentage / regions,
        avg_min_distance: mean_defined(stats.iter().map(|s| s.min_distance)),
        avg_max_distance: mean_defined(stats.iter().map(|s| s.max_distance)),
    }
}

fn mean_defined(values: impl Iterator<Item = Option<f32>>) -> Option<f32> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values.flatten() {
        sum += v;
        n += 1;
    }
    (n > 0).then(|| sum / n as f32)
}
