use planar_regions::{
    core::{math::Vector2, traits::FuzzyEq},
    region::Region,
    static_aabb2d_index::AABB,
};

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Holds a set of properties of a region for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct RegionProperties {
    pub vertex_count: usize,
    pub area: f64,
    pub perimeter: f64,
    pub extents: AABB<f64>,
}

impl RegionProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-4;

    pub fn new(
        vertex_count: usize,
        area: f64,
        perimeter: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            vertex_count,
            area,
            perimeter,
            extents: AABB::new(min_x, min_y, max_x, max_y),
        }
    }

    /// Properties of `region`, area is unsigned since result direction is unspecified.
    pub fn from_region(region: &Region<f64>) -> Self {
        Self {
            vertex_count: region.vertex_count(),
            area: region.area(),
            perimeter: region.perimeter(),
            extents: region.extents().unwrap(),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.vertex_count == other.vertex_count
            && self.area.fuzzy_eq_eps(other.area, eps)
            && self.perimeter.fuzzy_eq_eps(other.perimeter, eps)
            && aabb_fuzzy_eq_eps(&self.extents, &other.extents, eps)
    }
}

pub fn create_property_set<'a, I>(regions: I) -> Vec<RegionProperties>
where
    I: IntoIterator<Item = &'a Region<f64>>,
{
    regions
        .into_iter()
        .map(RegionProperties::from_region)
        .collect()
}

pub fn property_sets_match(
    result_set: &[RegionProperties],
    expected_set: &[RegionProperties],
) -> bool {
    let mut sets_match = true;
    if result_set.len() != expected_set.len() {
        sets_match = false;
    } else {
        // simple N^2 comparison, sets are always small
        for properties_expected in expected_set {
            let match_count = result_set
                .iter()
                .filter(|properties_result| {
                    properties_expected
                        .fuzzy_eq_eps(properties_result, RegionProperties::PROP_CMP_EPS)
                })
                .count();

            if match_count != 1 {
                sets_match = false;
                break;
            }
        }
    }

    if !sets_match {
        eprintln!("result:\n{:?}", result_set);
        eprintln!("expected:\n{:?}", expected_set);
    }

    sets_match
}

/// Sum of the unsigned areas of `regions`.
pub fn total_area(regions: &[Region<f64>]) -> f64 {
    regions.iter().map(|r| r.area()).sum()
}

/// Returns true if `region` has exactly the `expected` points in the same cyclic order, starting at
/// any index and running in either direction.
pub fn region_matches_points(region: &Region<f64>, expected: &[(f64, f64)], eps: f64) -> bool {
    let n = expected.len();
    if region.vertex_count() != n {
        return false;
    }

    let expected: Vec<Vector2<f64>> = expected.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
    let matches_from = |offset: usize, reversed: bool| {
        (0..n).all(|i| {
            let j = if reversed {
                (offset + n - i) % n
            } else {
                (offset + i) % n
            };
            region[i].fuzzy_eq_eps(expected[j], eps)
        })
    };

    (0..n).any(|offset| matches_from(offset, false) || matches_from(offset, true))
}

/// Returns true if every expected point list is matched by exactly one result region (see
/// [region_matches_points]), printing both sets otherwise.
pub fn regions_match_points(
    result: &[Region<f64>],
    expected: &[&[(f64, f64)]],
    eps: f64,
) -> bool {
    let sets_match = result.len() == expected.len()
        && expected.iter().all(|points| {
            result
                .iter()
                .filter(|r| region_matches_points(r, points, eps))
                .count()
                == 1
        });

    if !sets_match {
        eprintln!("result:\n{:?}", result);
        eprintln!("expected:\n{:?}", expected);
    }

    sets_match
}
