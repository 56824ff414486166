//! Supporting public types used by the region boolean operations.

use crate::core::traits::Real;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents the orientation of a region.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RegionOrientation {
    /// Region is directionally clockwise.
    Clockwise,
    /// Region is directionally counter clockwise.
    CounterClockwise,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Boolean operation to apply to multi-polygon regions.
pub enum BooleanOp {
    /// Return the union of the regions.
    Union,
    /// Return the intersection of the regions.
    Intersect,
    /// Return the first regions with the second regions removed.
    Difference,
    /// Exclusive OR between regions.
    Xor,
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Copy)]
pub struct RegionBooleanOptions<T> {
    /// Fuzzy comparison epsilon used for every coincidence, collinearity and ordering test in a
    /// boolean operation.
    pub pos_equal_eps: T,
    /// If set then all input points are rounded to the nearest multiple of this value before the
    /// operation is performed.
    pub snap_increment: Option<T>,
}

impl<T> RegionBooleanOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::from(1e-3).unwrap(),
            snap_increment: None,
        }
    }
}

impl<T> Default for RegionBooleanOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that abort a boolean operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BooleanError {
    /// A segment collapsed to zero length while sweeping, usually caused by input points that are
    /// closer together than the position epsilon but not equal.
    #[error("zero length segment reached the sweep at ({x}, {y}), consider snapping input points")]
    ZeroLengthSegment { x: f64, y: f64 },
}
