use super::{boolean_opt, BooleanError, BooleanOp, Region, RegionBooleanOptions};
use crate::core::{math::Vector2, traits::Real};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder, AABB};

/// Multi-polygon made of closed regions combined with the even-odd rule, with a spatial index of
/// the region bounding boxes.
#[derive(Debug, Clone)]
pub struct RegionSet<T: Real> {
    /// Non-empty regions of the set.
    pub regions: Vec<Region<T>>,
    /// Spatial index of the region bounding boxes, index positions correspond to `regions`. `None`
    /// if the set has no regions.
    pub regions_index: Option<StaticAABB2DIndex<T>>,
}

impl<T> Default for RegionSet<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> RegionSet<T>
where
    T: Real,
{
    /// Create a set from regions, empty regions are skipped.
    pub fn from_regions<I>(regions: I) -> Self
    where
        I: IntoIterator<Item = Region<T>>,
    {
        let regions: Vec<_> = regions.into_iter().filter(|r| !r.is_empty()).collect();
        if regions.is_empty() {
            return Self::empty();
        }

        let regions_index = {
            let mut b = StaticAABB2DIndexBuilder::new(regions.len());
            for extents in regions.iter().filter_map(|r| r.extents()) {
                b.add(extents.min_x, extents.min_y, extents.max_x, extents.max_y);
            }

            b.build().ok()
        };

        Self {
            regions,
            regions_index,
        }
    }

    #[inline]
    pub fn empty() -> Self {
        Self {
            regions: Vec::new(),
            regions_index: None,
        }
    }

    #[inline]
    pub fn regions(&self) -> &[Region<T>] {
        &self.regions
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Total area of the set, assuming regions do not overlap (true for any boolean result).
    pub fn area(&self) -> T {
        self.regions
            .iter()
            .fold(T::zero(), |acc, r| acc + r.area())
    }

    /// Bounding box of all the regions, `None` if the set is empty.
    #[inline]
    pub fn extents(&self) -> Option<AABB<T>> {
        self.regions_index.as_ref().and_then(|index| index.bounds())
    }

    /// Returns true if `point` is inside the set using the even-odd rule across regions.
    ///
    /// Points within `epsilon` of a region edge are not contained by that region.
    pub fn contains_point(&self, point: Vector2<T>, epsilon: T) -> bool {
        let index = match &self.regions_index {
            Some(index) => index,
            None => return false,
        };

        index
            .query(point.x, point.y, point.x, point.y)
            .into_iter()
            .filter(|&i| self.regions[i].contains_point(point, epsilon))
            .count()
            % 2
            == 1
    }

    /// Perform a boolean `op` between this set and `other` using default options.
    #[inline]
    pub fn boolean(&self, other: &Self, op: BooleanOp) -> Result<Self, BooleanError> {
        self.boolean_opt(other, op, &RegionBooleanOptions::new())
    }

    /// Same as [RegionSet::boolean] but with options given.
    pub fn boolean_opt(
        &self,
        other: &Self,
        op: BooleanOp,
        options: &RegionBooleanOptions<T>,
    ) -> Result<Self, BooleanError> {
        let result = boolean_opt(&self.regions, &other.regions, op, options)?;
        Ok(Self::from_regions(result))
    }
}

impl<T> FromIterator<Region<T>> for RegionSet<T>
where
    T: Real,
{
    fn from_iter<I: IntoIterator<Item = Region<T>>>(iter: I) -> Self {
        Self::from_regions(iter)
    }
}
