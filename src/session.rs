//! Session state container owning the current region set and its mark lists.
//!
//! This is the stateful shell around the pure sampling and analysis functions.
//! Every transition replaces the affected collection wholesale; a re-sample
//! discards all regions and marks and restarts region ids at 0, so marks tied
//! to an old region set are never carried over or merged.
use std::collections::HashMap;

use glam::Vec2;
use rand::RngCore;
use tracing::info;

use crate::analysis::{analyze_region, summarize, RegionStats, SessionSummary};
use crate::error::{Error, Result};
use crate::region::{Mark, Region, RegionId};
use crate::sampling::RegionSampling;

/// One annotation session over a single uploaded image.
#[derive(Debug, Clone)]
pub struct Session {
    image_extent: Vec2,
    regions: Vec<Region>,
    marks: HashMap<RegionId, Vec<Mark>>,
}

impl Session {
    /// Start a session for an image of the given pixel dimensions, sampling an
    /// initial region set.
    ///
    /// # Errors
    ///
    /// Returns an error when the dimensions or the sampling configuration are
    /// invalid.
    pub fn begin(
        image_width: f32,
        image_height: f32,
        sampling: &dyn RegionSampling,
        rng: &mut dyn RngCore,
    ) -> Result<Self> {
        let mut session = Self {
            image_extent: Vec2::new(image_width, image_height),
            regions: Vec::new(),
            marks: HashMap::new(),
        };
        session.resample(sampling, rng)?;
        Ok(session)
    }

    /// Replace the region set wholesale and discard all marks.
    ///
    /// # Errors
    ///
    /// Returns an error when the sampling configuration is invalid; the
    /// previous region set is left untouched in that case.
    pub fn resample(
        &mut self,
        sampling: &dyn RegionSampling,
        rng: &mut dyn RngCore,
    ) -> Result<()> {
        let regions = sampling.generate(self.image_extent.into(), rng)?;
        self.marks = regions.iter().map(|r| (r.id, Vec::new())).collect();
        info!(count = regions.len(), "region set replaced");
        self.regions = regions;
        Ok(())
    }

    /// Image pixel dimensions this session was started with.
    pub fn image_extent(&self) -> Vec2 {
        self.image_extent
    }

    /// Current region set in ascending id order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Marks of one region.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRegion`] when the id is not part of the current
    /// region set.
    pub fn marks(&self, region_id: RegionId) -> Result<&[Mark]> {
        self.marks
            .get(&region_id)
            .map(Vec::as_slice)
            .ok_or(Error::UnknownRegion { id: region_id })
    }

    /// Append a mark to a region. The mark position must be region-local and
    /// inside the region, with a positive radius.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRegion`] for an id outside the current set and
    /// [`Error::InvalidMark`] for a non-positive radius or an out-of-bounds
    /// position.
    pub fn add_mark(&mut self, region_id: RegionId, mark: Mark) -> Result<()> {
        let region = self
            .regions
            .iter()
            .find(|r| r.id == region_id)
            .ok_or(Error::UnknownRegion { id: region_id })?;

        if !mark.radius.is_finite() || mark.radius <= 0.0 {
            return Err(Error::InvalidMark(format!(
                "radius must be > 0, got {}",
                mark.radius
            )));
        }
        if !region.contains_local(mark.position()) {
            return Err(Error::InvalidMark(format!(
                "position {}x{} outside region {}",
                mark.x, mark.y, region_id
            )));
        }

        self.marks.entry(region_id).or_default().push(mark);
        Ok(())
    }

    /// Remove a mark by its opaque id, returning whether one was removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRegion`] when the region id is not part of the
    /// current set.
    pub fn remove_mark(&mut self, region_id: RegionId, mark_id: &str) -> Result<bool> {
        let marks = self
            .marks
            .get_mut(&region_id)
            .ok_or(Error::UnknownRegion { id: region_id })?;

        let before = marks.len();
        marks.retain(|m| m.id != mark_id);
        Ok(marks.len() < before)
    }

    /// Discard every mark of one region.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRegion`] when the region id is not part of the
    /// current set.
    pub fn clear_marks(&mut self, region_id: RegionId) -> Result<()> {
        let marks = self
            .marks
            .get_mut(&region_id)
            .ok_or(Error::UnknownRegion { id: region_id })?;
        marks.clear();
        Ok(())
    }

    /// Live statistics for one region, recomputed on every call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRegion`] when the region id is not part of the
    /// current set.
    pub fn region_stats(&self, region_id: RegionId) -> Result<RegionStats> {
        let region = self
            .regions
            .iter()
            .find(|r| r.id == region_id)
            .ok_or(Error::UnknownRegion { id: region_id })?;
        let marks = self.marks(region_id)?;
        analyze_region(marks, region.width, region.height, region_id)
    }

    /// Session-wide averages over all regions in id order.
    pub fn summary(&self) -> SessionSummary {
        let stats: Vec<RegionStats> = self
            .regions
            .iter()
            .filter_map(|r| self.region_stats(r.id).ok())
            .collect();
        summarize(&stats)
    }
}
