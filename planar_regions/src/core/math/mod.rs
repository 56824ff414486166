//! Core/common math functions for working with points, orientation tests and line intersects.
mod base_math;
mod line_line_intersect;
mod vector2;

pub use base_math::*;
pub use line_line_intersect::{line_line_intr, LineLineIntr, ParamPosition};
pub use vector2::{vec2, Vector2};
