#![forbid(unsafe_code)]
//! rainmark: Region sampling and raindrop-mark statistics for windshield
//! annotation sessions.
//!
//! Modules:
//! - region: the core data model (regions, marks)
//! - sampling: random placement of non-overlapping square regions
//! - analysis: per-region descriptive statistics and session-wide averages
//! - session: a plain state container owning regions and their mark lists
//!
//! The engine is pure and stateless: sampling takes an injected [`rand::RngCore`]
//! and analysis is a deterministic function of its inputs. Callers are expected
//! to pass marks in region-local coordinates (origin at the owning region's
//! top-left corner).
pub mod analysis;
pub mod error;
pub mod region;
pub mod sampling;
pub mod session;

/// Convenient re-exports for common types. Import with `use rainmark::prelude::*;`.
pub mod prelude {
    pub use crate::analysis::{analyze_region, summarize, RegionStats, SessionSummary};
    pub use crate::error::{Error, Result};
    pub use crate::region::{Mark, MarkColor, Region, RegionId};
    pub use crate::sampling::{RandomSquareSampling, RegionSampling};
    pub use crate::session::Session;
}
