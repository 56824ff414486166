use super::RegionOrientation;
use crate::core::{
    math::{dist_squared, is_left, line_seg_closest_point, vec2, Vector2},
    traits::Real,
};
use static_aabb2d_index::AABB;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed loop of points describing a polygonal region.
///
/// The closing edge from the last point back to the first point is implicit (the first point is
/// never repeated at the end). Direction may be either clockwise or counter clockwise, boolean
/// operations normalize direction internally.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Region<T = f64> {
    /// Contiguous sequence of points.
    pub points: Vec<Vector2<T>>,
}

impl<T> Default for Region<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Region<T>
where
    T: Real,
{
    /// Create a new empty [Region].
    #[inline]
    pub fn new() -> Self {
        Region { points: Vec::new() }
    }

    /// Create a new empty [Region] with reserved capacity for `capacity` points.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Region {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a [Region] from a sequence of points.
    #[inline]
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector2<T>>,
    {
        Region {
            points: points.into_iter().collect(),
        }
    }

    /// Add a point to the end of the region.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.points.push(vec2(x, y));
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vector2<T>> {
        self.points.iter()
    }

    /// Iterate the edges of the region as `(start, end)` point pairs, including the closing edge.
    pub fn iter_segments(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| {
            let prev = if i == 0 { n - 1 } else { i - 1 };
            (self.points[prev], self.points[i])
        })
    }

    /// Signed area of the region, positive if counter clockwise and negative if clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_regions::region;
    /// let square = region![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
    /// assert_eq!(square.signed_area(), 4.0);
    /// assert_eq!(square.inverted().signed_area(), -4.0);
    /// ```
    pub fn signed_area(&self) -> T {
        if self.points.len() < 3 {
            return T::zero();
        }

        // shoelace formula
        let double_total_area = self
            .iter_segments()
            .fold(T::zero(), |acc, (v1, v2)| acc + v1.x * v2.y - v1.y * v2.x);

        double_total_area / T::two()
    }

    /// Absolute area of the region.
    #[inline]
    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    /// Direction of the region, regions with no area are reported as counter clockwise.
    pub fn orientation(&self) -> RegionOrientation {
        if self.signed_area() < T::zero() {
            RegionOrientation::Clockwise
        } else {
            RegionOrientation::CounterClockwise
        }
    }

    /// Total length of all edges (including the closing edge).
    pub fn perimeter(&self) -> T {
        if self.points.len() < 2 {
            return T::zero();
        }

        self.iter_segments()
            .fold(T::zero(), |acc, (v1, v2)| acc + (v2 - v1).length())
    }

    /// Average of all the points, returns `None` if region is empty.
    pub fn centroid(&self) -> Option<Vector2<T>> {
        if self.points.is_empty() {
            return None;
        }

        let count = T::from(self.points.len())?;
        let sum = self
            .points
            .iter()
            .fold(Vector2::zero(), |acc, &p| acc + p);
        Some(sum.scale(T::one() / count))
    }

    /// Axis aligned bounding box of the region, returns `None` if region is empty.
    pub fn extents(&self) -> Option<AABB<T>> {
        let first = self.points.first()?;
        let mut result = AABB::new(first.x, first.y, first.x, first.y);
        for p in self.points.iter().skip(1) {
            if p.x < result.min_x {
                result.min_x = p.x;
            } else if p.x > result.max_x {
                result.max_x = p.x;
            }

            if p.y < result.min_y {
                result.min_y = p.y;
            } else if p.y > result.max_y {
                result.max_y = p.y;
            }
        }

        Some(result)
    }

    /// Winding number of `point` relative to the region.
    ///
    /// Positive for counter clockwise regions containing the point, negative for clockwise
    /// regions containing the point and zero if the point is outside.
    pub fn winding_number(&self, point: Vector2<T>) -> i32 {
        if self.points.len() < 3 {
            return 0;
        }

        let mut winding = 0;
        for (v1, v2) in self.iter_segments() {
            if v1.y <= point.y {
                if v2.y > point.y && is_left(v1, v2, point) {
                    // left and upward crossing
                    winding += 1;
                }
            } else if v2.y <= point.y && !is_left(v1, v2, point) {
                // right and downward crossing
                winding -= 1;
            }
        }

        winding
    }

    /// Returns true if `point` is strictly inside the region.
    ///
    /// Uses even-odd ray casting so self overlapping regions follow the same fill rule as the
    /// boolean operations. Points within `epsilon` of an edge are not contained.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_regions::region;
    /// # use planar_regions::core::math::vec2;
    /// let square = region![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
    /// assert!(square.contains_point(vec2(1.0, 1.0), 1e-5));
    /// assert!(!square.contains_point(vec2(2.0, 1.0), 1e-5));
    /// assert!(!square.contains_point(vec2(3.0, 1.0), 1e-5));
    /// ```
    pub fn contains_point(&self, point: Vector2<T>, epsilon: T) -> bool {
        if self.points.len() < 3 {
            return false;
        }

        let eps_squared = epsilon * epsilon;
        let mut inside = false;
        for (v1, v2) in self.iter_segments() {
            if dist_squared(line_seg_closest_point(v1, v2, point), point) < eps_squared {
                return false;
            }

            if (v1.y > point.y) == (v2.y > point.y) {
                continue;
            }

            let x_cross = (v2.x - v1.x) * (point.y - v1.y) / (v2.y - v1.y) + v1.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }

        inside
    }

    /// Translate all points by `x` and `y`.
    pub fn translate(&mut self, x: T, y: T) {
        let offset = vec2(x, y);
        for p in self.points.iter_mut() {
            *p = *p + offset;
        }
    }

    /// Copy of the region with direction reversed.
    pub fn inverted(&self) -> Self {
        Region::from_points(self.points.iter().rev().copied())
    }

    /// Copy of the region with every point rounded to the nearest multiple of `increment`.
    pub fn snapped(&self, increment: T) -> Self {
        Region::from_points(self.points.iter().map(|p| p.round_to(increment)))
    }
}

impl<T> Index<usize> for Region<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> FromIterator<Vector2<T>> for Region<T> {
    fn from_iter<I: IntoIterator<Item = Vector2<T>>>(iter: I) -> Self {
        Region {
            points: iter.into_iter().collect(),
        }
    }
}
