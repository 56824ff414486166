use super::Vector2;
use crate::core::traits::Real;

/// Where a parametric value lies relative to a segment's end points.
///
/// Parametric values are in the form used by `P(t) = p0 + t * (p1 - p0)`, so `0` is the start of
/// the segment and `1` is the end.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamPosition {
    /// Before the segment's start point.
    BeforeStart,
    /// Fuzzy equal to the segment's start point.
    AtStart,
    /// Strictly between the segment's end points.
    Interior,
    /// Fuzzy equal to the segment's end point.
    AtEnd,
    /// After the segment's end point.
    AfterEnd,
}

impl ParamPosition {
    /// Classify parametric value `t` using `epsilon` for the end point buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_regions::core::math::*;
    /// assert_eq!(ParamPosition::from_param(-0.5, 1e-3), ParamPosition::BeforeStart);
    /// assert_eq!(ParamPosition::from_param(0.0005, 1e-3), ParamPosition::AtStart);
    /// assert_eq!(ParamPosition::from_param(0.5, 1e-3), ParamPosition::Interior);
    /// assert_eq!(ParamPosition::from_param(1.0, 1e-3), ParamPosition::AtEnd);
    /// assert_eq!(ParamPosition::from_param(1.5, 1e-3), ParamPosition::AfterEnd);
    /// ```
    #[inline]
    pub fn from_param<T>(t: T, epsilon: T) -> Self
    where
        T: Real,
    {
        if t <= -epsilon {
            ParamPosition::BeforeStart
        } else if t < epsilon {
            ParamPosition::AtStart
        } else if t - T::one() <= -epsilon {
            ParamPosition::Interior
        } else if t - T::one() < epsilon {
            ParamPosition::AtEnd
        } else {
            ParamPosition::AfterEnd
        }
    }
}

/// Holds the result of solving for the crossing point of the lines through two segments.
#[derive(Debug, Copy, Clone)]
pub enum LineLineIntr<T>
where
    T: Real,
{
    /// Lines are (fuzzy) parallel, they are either distinct or coincident.
    Parallel,
    /// Lines cross at `point`, which may lie outside of either segment.
    Crossing {
        /// Intersect point.
        point: Vector2<T>,
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
        /// Classification of `seg1_t`.
        seg1_pos: ParamPosition,
        /// Classification of `seg2_t`.
        seg2_pos: ParamPosition,
    },
}

/// Finds where the lines through the segments `v1->v2` and `u1->u2` cross.
///
/// The 2x2 linear system is solved using the perpendicular dot product of the direction vectors as
/// the determinant, a determinant fuzzy equal to zero (using `epsilon`) is treated as parallel.
/// Parametric values are classified with [ParamPosition::from_param] using the same `epsilon`.
///
/// # Examples
///
/// ```
/// # use planar_regions::core::math::*;
/// let v1 = vec2(0.0, 0.0);
/// let v2 = vec2(2.0, 2.0);
/// let u1 = vec2(0.0, 2.0);
/// let u2 = vec2(2.0, 0.0);
/// match line_line_intr(v1, v2, u1, u2, 1e-3) {
///     LineLineIntr::Crossing { point, seg1_pos, seg2_pos, .. } => {
///         assert!(point.fuzzy_eq(vec2(1.0, 1.0)));
///         assert_eq!(seg1_pos, ParamPosition::Interior);
///         assert_eq!(seg2_pos, ParamPosition::Interior);
///     }
///     LineLineIntr::Parallel => unreachable!("expected crossing"),
/// }
///
/// let parallel = line_line_intr(v1, v2, vec2(0.0, 1.0), vec2(1.0, 2.0), 1e-3);
/// assert!(matches!(parallel, LineLineIntr::Parallel));
/// ```
pub fn line_line_intr<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    u1: Vector2<T>,
    u2: Vector2<T>,
    epsilon: T,
) -> LineLineIntr<T>
where
    T: Real,
{
    // This implementation works by processing the segments in parametric equation form and using
    // perpendicular products
    // http://geomalgorithms.com/a05-_intersect-1.html
    // http://mathworld.wolfram.com/PerpDotProduct.html
    let v = v2 - v1;
    let u = u2 - u1;
    let v_pdot_u = v.perp_dot(u);

    if v_pdot_u.fuzzy_eq_zero_eps(epsilon) {
        return LineLineIntr::Parallel;
    }

    let w = v1 - u1;
    let seg1_t = u.perp_dot(w) / v_pdot_u;
    let seg2_t = v.perp_dot(w) / v_pdot_u;

    LineLineIntr::Crossing {
        point: v1 + v.scale(seg1_t),
        seg1_t,
        seg2_t,
        seg1_pos: ParamPosition::from_param(seg1_t, epsilon),
        seg2_pos: ParamPosition::from_param(seg2_t, epsilon),
    }
}
