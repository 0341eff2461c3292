//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result]
//! alias. Variants cover invalid dimensions and region counts rejected before
//! placement, out-of-range sampler configuration, and session lookup failures.
use thiserror::Error;

use crate::region::RegionId;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("invalid region count: {0}")]
    InvalidRegionCount(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown region {id}")]
    UnknownRegion { id: RegionId },

    #[error("invalid mark: {0}")]
    InvalidMark(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_error_carries_message() {
        let err = Error::InvalidDimension("width must be > 0".into());
        assert_eq!(err.to_string(), "invalid dimension: width must be > 0");
    }

    #[test]
    fn unknown_region_names_the_id() {
        let err = Error::UnknownRegion { id: 3 };
        assert_eq!(err.to_string(), "unknown region 3");
    }
}
