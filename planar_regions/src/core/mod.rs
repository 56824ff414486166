//! Core module has common/shared math and numeric traits used by the region algorithms.
pub mod math;
pub mod traits;
