//! Closed polygonal regions and the boolean operations between multi-polygon operands.
pub mod internal;
mod region_loop;
mod region_ops;
mod region_set;
mod region_types;

pub use region_loop::*;
pub use region_ops::*;
pub use region_set::*;
pub use region_types::*;
