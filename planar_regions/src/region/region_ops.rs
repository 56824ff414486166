use super::{
    internal::region_boolean::region_boolean, BooleanError, BooleanOp, Region, RegionBooleanOptions,
};
use crate::core::traits::Real;

/// Perform a boolean `op` between two multi-polygon operands using default options.
///
/// Each operand is a slice of regions interpreted with the even-odd fill rule, so a region nested
/// inside another region of the same operand is a hole. The result is a list of closed regions
/// whose union (again even-odd) is the result area. Result region direction and starting point are
/// unspecified.
///
/// # Examples
///
/// ```
/// # use planar_regions::region;
/// # use planar_regions::region::*;
/// let a: [Region<f64>; 1] = [region![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]];
/// let b = [region![(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]];
/// let result = boolean(&a, &b, BooleanOp::Intersect).unwrap();
/// assert_eq!(result.len(), 1);
/// assert!((result[0].area() - 1.0).abs() < 1e-9);
/// ```
#[inline]
pub fn boolean<T>(
    regions1: &[Region<T>],
    regions2: &[Region<T>],
    op: BooleanOp,
) -> Result<Vec<Region<T>>, BooleanError>
where
    T: Real,
{
    boolean_opt(regions1, regions2, op, &RegionBooleanOptions::new())
}

/// Same as [boolean] but with options given.
#[inline]
pub fn boolean_opt<T>(
    regions1: &[Region<T>],
    regions2: &[Region<T>],
    op: BooleanOp,
    options: &RegionBooleanOptions<T>,
) -> Result<Vec<Region<T>>, BooleanError>
where
    T: Real,
{
    region_boolean(regions1, regions2, op, options)
}

/// Area covered by either operand.
#[inline]
pub fn union<T>(
    regions1: &[Region<T>],
    regions2: &[Region<T>],
) -> Result<Vec<Region<T>>, BooleanError>
where
    T: Real,
{
    boolean(regions1, regions2, BooleanOp::Union)
}

/// Area covered by both operands.
#[inline]
pub fn intersect<T>(
    regions1: &[Region<T>],
    regions2: &[Region<T>],
) -> Result<Vec<Region<T>>, BooleanError>
where
    T: Real,
{
    boolean(regions1, regions2, BooleanOp::Intersect)
}

/// Area covered by `regions1` but not `regions2`.
#[inline]
pub fn difference<T>(
    regions1: &[Region<T>],
    regions2: &[Region<T>],
) -> Result<Vec<Region<T>>, BooleanError>
where
    T: Real,
{
    boolean(regions1, regions2, BooleanOp::Difference)
}

/// Area covered by exactly one operand.
#[inline]
pub fn xor<T>(
    regions1: &[Region<T>],
    regions2: &[Region<T>],
) -> Result<Vec<Region<T>>, BooleanError>
where
    T: Real,
{
    boolean(regions1, regions2, BooleanOp::Xor)
}

/// Normalize a single operand: resolves self intersections and overlaps (even-odd) and merges
/// collinear points.
///
/// # Examples
///
/// ```
/// # use planar_regions::region;
/// # use planar_regions::region::*;
/// // bow tie becomes two triangles
/// let bow_tie = [region![(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]];
/// let result = self_union(&bow_tie, &RegionBooleanOptions::new()).unwrap();
/// assert_eq!(result.len(), 2);
/// ```
#[inline]
pub fn self_union<T>(
    regions: &[Region<T>],
    options: &RegionBooleanOptions<T>,
) -> Result<Vec<Region<T>>, BooleanError>
where
    T: Real,
{
    boolean_opt(regions, &[], BooleanOp::Union, options)
}

/// Left fold `op` over all `operands`, `((a op b) op c) ...`.
///
/// Returns an empty list if there are no operands and the normalized operand (see [self_union])
/// if there is exactly one.
pub fn boolean_all<T, I, R>(
    operands: I,
    op: BooleanOp,
    options: &RegionBooleanOptions<T>,
) -> Result<Vec<Region<T>>, BooleanError>
where
    T: Real,
    I: IntoIterator<Item = R>,
    R: AsRef<[Region<T>]>,
{
    let mut iter = operands.into_iter();
    let first = match iter.next() {
        Some(first) => first,
        None => return Ok(Vec::new()),
    };

    let mut acc: Option<Vec<Region<T>>> = None;
    for next in iter {
        let lhs = match acc.as_deref() {
            Some(acc) => acc,
            None => first.as_ref(),
        };

        acc = Some(boolean_opt(lhs, next.as_ref(), op, options)?);
    }

    match acc {
        Some(acc) => Ok(acc),
        None => self_union(first.as_ref(), options),
    }
}
