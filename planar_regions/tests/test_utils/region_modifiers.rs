use planar_regions::region::Region;

/// Cycles all the point index positions forward by `n`. E.g. index 0 becomes 1, last index becomes
/// 0, etc.
pub fn cycle_start_index_forward(input: &Region<f64>, n: usize) -> Region<f64> {
    assert!(n > 0, "cycling forward by 0 just returns the same region");
    assert!(
        n < input.vertex_count(),
        "cycling forward by more than the region length is unnecessary"
    );
    Region::from_points(
        input
            .iter()
            .cycle()
            .skip(n)
            .take(input.vertex_count())
            .copied(),
    )
}

#[derive(Debug, Clone, Copy)]
pub struct ModifiedRegionState {
    pub inverted_direction: bool,
    pub cycle_position: usize,
}

impl ModifiedRegionState {
    pub fn new(inverted_direction: bool, cycle_position: usize) -> Self {
        Self {
            inverted_direction,
            cycle_position,
        }
    }
}

/// Visits every direction and start point variation of a region.
#[derive(Debug, Clone)]
pub struct ModifiedRegionSet<'a> {
    pub input: &'a Region<f64>,
}

impl<'a> ModifiedRegionSet<'a> {
    pub fn new(input: &'a Region<f64>) -> Self {
        Self { input }
    }

    pub fn accept_closure<F>(&self, visitor: &mut F)
    where
        F: FnMut(Region<f64>, ModifiedRegionState),
    {
        visitor(self.input.clone(), ModifiedRegionState::new(false, 0));
        let inverted = self.input.inverted();
        visitor(inverted.clone(), ModifiedRegionState::new(true, 0));

        for i in 1..self.input.vertex_count() {
            visitor(
                cycle_start_index_forward(self.input, i),
                ModifiedRegionState::new(false, i),
            );
            visitor(
                cycle_start_index_forward(&inverted, i),
                ModifiedRegionState::new(true, i),
            );
        }
    }
}
