use super::Vector2;
use crate::core::traits::Real;
use std::cmp::Ordering;

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Round `value` to the nearest multiple of `increment`.
///
/// # Examples
///
/// ```
/// # use planar_regions::core::math::*;
/// assert_eq!(round_to(3.3, 0.5), 3.5);
/// assert_eq!(round_to(-1.2, 1.0), -1.0);
/// ```
#[inline]
pub fn round_to<T>(value: T, increment: T) -> T
where
    T: Real,
{
    (value / increment).round() * increment
}

/// Canonical sweep order of two points: x ascending, then y ascending.
///
/// Coordinates within `epsilon` of each other are treated as equal, so two points only compare as
/// [Ordering::Equal] when both coordinates are fuzzy equal.
///
/// # Examples
///
/// ```
/// # use planar_regions::core::math::*;
/// # use std::cmp::Ordering;
/// let eps = 1e-3;
/// assert_eq!(points_compare_eps(vec2(0.0, 5.0), vec2(1.0, 0.0), eps), Ordering::Less);
/// assert_eq!(points_compare_eps(vec2(1.0, 1.0), vec2(1.0, 0.0), eps), Ordering::Greater);
/// assert_eq!(points_compare_eps(vec2(1.0, 1.0), vec2(1.0001, 1.0), eps), Ordering::Equal);
/// ```
#[inline]
pub fn points_compare_eps<T>(p1: Vector2<T>, p2: Vector2<T>, epsilon: T) -> Ordering
where
    T: Real,
{
    if p1.x.fuzzy_eq_eps(p2.x, epsilon) {
        if p1.y.fuzzy_eq_eps(p2.y, epsilon) {
            Ordering::Equal
        } else if p1.y < p2.y {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    } else if p1.x < p2.x {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
///
/// # Examples
///
/// ```
/// # use planar_regions::core::math::*;
/// let p = line_seg_closest_point(vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(1.0, 3.0));
/// assert!(p.fuzzy_eq(vec2(1.0, 0.0)));
/// let p = line_seg_closest_point(vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(5.0, 3.0));
/// assert!(p.fuzzy_eq(vec2(2.0, 0.0)));
/// ```
#[inline]
pub fn line_seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    // Dot product used to find angles
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 <= T::zero() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 <= c1 {
        return p1;
    }

    let b = c1 / c2;
    p0 + v.scale(b)
}

/// Helper function to avoid repeating code for orientation checks.
#[inline]
fn perp_dot_test_value<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    (p1.x - p0.x) * (point.y - p0.y) - (p1.y - p0.y) * (point.x - p0.x)
}

/// Returns true if `point` is left of the direction vector defined by `p1 - p0`.
///
/// # Examples
///
/// ```
/// # use planar_regions::core::math::*;
/// let p0 = Vector2::new(1.0, 1.0);
/// let p1 = Vector2::new(2.0, 2.0);
/// assert!(is_left(p0, p1, Vector2::new(0.0, 1.0)));
/// assert!(!is_left(p0, p1, Vector2::new(1.0, 0.0)));
/// ```
#[inline]
pub fn is_left<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    perp_dot_test_value(p0, p1, point) > T::zero()
}

/// Returns true if the three points lie on a straight line.
///
/// Compares the cross products of the two difference vectors `p1 - p2` and `p2 - p3` using
/// `epsilon`, repeated points are always collinear.
///
/// # Examples
///
/// ```
/// # use planar_regions::core::math::*;
/// assert!(is_collinear_eps(vec2(0.0, 0.0), vec2(1.0, 1.0), vec2(3.0, 3.0), 1e-3));
/// assert!(!is_collinear_eps(vec2(0.0, 0.0), vec2(1.0, 1.0), vec2(3.0, 3.1), 1e-3));
/// ```
#[inline]
pub fn is_collinear_eps<T>(p1: Vector2<T>, p2: Vector2<T>, p3: Vector2<T>, epsilon: T) -> bool
where
    T: Real,
{
    let dx1 = p1.x - p2.x;
    let dy1 = p1.y - p2.y;
    let dx2 = p2.x - p3.x;
    let dy2 = p2.y - p3.y;
    (dx1 * dy2).fuzzy_eq_eps(dx2 * dy1, epsilon)
}

/// Returns true if `point` lies above (left of) or on the line from `left` to `right`.
///
/// Inclusion is fuzzy: anything down to `-epsilon` below the line (measured by the perpendicular
/// dot product, so it scales with the segment length) counts as on the line.
///
/// # Examples
///
/// ```
/// # use planar_regions::core::math::*;
/// let left = vec2(0.0, 0.0);
/// let right = vec2(2.0, 0.0);
/// assert!(point_above_or_on_line_eps(vec2(1.0, 1.0), left, right, 1e-3));
/// assert!(point_above_or_on_line_eps(vec2(1.0, 0.0), left, right, 1e-3));
/// assert!(!point_above_or_on_line_eps(vec2(1.0, -1.0), left, right, 1e-3));
/// ```
#[inline]
pub fn point_above_or_on_line_eps<T>(
    point: Vector2<T>,
    left: Vector2<T>,
    right: Vector2<T>,
    epsilon: T,
) -> bool
where
    T: Real,
{
    perp_dot_test_value(left, right, point) >= -epsilon
}

/// Returns true if `point` lies strictly between `left` and `right`.
///
/// `point` must be collinear with `left` to `right`. Returns false if `point` is fuzzy equal to
/// either end or if `left` and `right` coincide.
///
/// # Examples
///
/// ```
/// # use planar_regions::core::math::*;
/// let left = vec2(0.0, 0.0);
/// let right = vec2(4.0, 0.0);
/// assert!(point_strictly_between_eps(vec2(2.0, 0.0), left, right, 1e-3));
/// assert!(!point_strictly_between_eps(vec2(0.0, 0.0), left, right, 1e-3));
/// assert!(!point_strictly_between_eps(vec2(4.0, 0.0), left, right, 1e-3));
/// assert!(!point_strictly_between_eps(vec2(5.0, 0.0), left, right, 1e-3));
/// ```
#[inline]
pub fn point_strictly_between_eps<T>(
    point: Vector2<T>,
    left: Vector2<T>,
    right: Vector2<T>,
    epsilon: T,
) -> bool
where
    T: Real,
{
    let seg = right - left;
    let dot = (point - left).dot(seg);
    // at or before left (or left and right coincide)
    if dot < epsilon {
        return false;
    }

    // at or beyond right
    dot - seg.length_squared() <= -epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn above_or_on_line_boundary_is_inclusive() {
        let left = vec2(0.0, 0.0);
        let right = vec2(1.0, 0.0);
        // perp dot value is exactly -epsilon
        assert!(point_above_or_on_line_eps(vec2(0.5, -0.001), left, right, 0.001));
        assert!(!point_above_or_on_line_eps(vec2(0.5, -0.0011), left, right, 0.001));
    }

    #[test]
    fn collinear_with_repeated_points() {
        let p = vec2(3.0, 7.0);
        assert!(is_collinear_eps(p, p, vec2(-1.0, 2.0), 1e-3));
        assert!(is_collinear_eps(vec2(-1.0, 2.0), p, p, 1e-3));
    }

    #[test]
    fn between_rejects_degenerate_line() {
        let p = vec2(1.0, 1.0);
        assert!(!point_strictly_between_eps(p, p, p, 1e-3));
    }
}
