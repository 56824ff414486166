//! Boolean operation pipeline: self intersection sweep per operand, combination sweep, selection
//! and chaining.

use super::{
    chainer::chain_segments,
    selector::select_segments,
    sweep::{run_sweep, SweepMode},
    sweep_events::{EventQueue, SweepSegment},
};
use crate::{
    core::{
        math::{points_compare_eps, Vector2},
        traits::Real,
    },
    region::{BooleanError, BooleanOp, Region, RegionBooleanOptions},
};
use std::cmp::Ordering;

/// Resolve self intersections of one operand, returns segments with `my_fill` computed using the
/// even-odd rule.
pub fn self_intersected_segments<T>(
    regions: &[Region<T>],
    options: &RegionBooleanOptions<T>,
) -> Result<Vec<SweepSegment<T>>, BooleanError>
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    let snap = |p: Vector2<T>| match options.snap_increment {
        Some(increment) => p.round_to(increment),
        None => p,
    };

    let edge_count = regions.iter().map(|r| r.vertex_count()).sum();
    let mut queue = EventQueue::with_capacity(edge_count, eps);
    for region in regions {
        let n = region.vertex_count();
        if n == 0 {
            continue;
        }

        let mut prev = snap(region[n - 1]);
        for &pt in region.iter() {
            let pt = snap(pt);
            let (start, end) = match points_compare_eps(prev, pt, eps) {
                Ordering::Equal => {
                    // zero length edge
                    prev = pt;
                    continue;
                }
                Ordering::Less => (prev, pt),
                Ordering::Greater => (pt, prev),
            };

            queue.add_segment(SweepSegment::new(start, end), true);
            prev = pt;
        }
    }

    run_sweep(queue, SweepMode::SelfIntersection)
}

/// Combine two self intersected segment sets, returns segments with `my_fill` describing the
/// primary operand and `other_fill` describing the secondary operand.
pub fn combined_segments<T>(
    primary: &[SweepSegment<T>],
    secondary: &[SweepSegment<T>],
    pos_equal_eps: T,
) -> Result<Vec<SweepSegment<T>>, BooleanError>
where
    T: Real,
{
    let mut queue = EventQueue::with_capacity(primary.len() + secondary.len(), pos_equal_eps);
    for seg in primary {
        queue.add_segment(seg.with_fill_of(seg.start, seg.end), true);
    }

    for seg in secondary {
        queue.add_segment(seg.with_fill_of(seg.start, seg.end), false);
    }

    run_sweep(queue, SweepMode::Combine)
}

/// Full boolean operation between two multi-polygon operands.
pub fn region_boolean<T>(
    regions1: &[Region<T>],
    regions2: &[Region<T>],
    op: BooleanOp,
    options: &RegionBooleanOptions<T>,
) -> Result<Vec<Region<T>>, BooleanError>
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    let segs1 = self_intersected_segments(regions1, options)?;
    let segs2 = self_intersected_segments(regions2, options)?;
    let combined = combined_segments(&segs1, &segs2, eps)?;
    let selected = select_segments(&combined, op);
    let result = chain_segments(&selected, eps);

    log::debug!(
        "{:?}: {} + {} input regions, {} + {} self resolved segments, {} combined, {} selected, {} output regions",
        op,
        regions1.len(),
        regions2.len(),
        segs1.len(),
        segs2.len(),
        combined.len(),
        selected.len(),
        result.len()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region;

    #[test]
    fn square_edges_self_resolved() {
        let sq = [region![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]];
        let segs = self_intersected_segments(&sq, &RegionBooleanOptions::new()).unwrap();
        assert_eq!(segs.len(), 4);
        assert!(segs.iter().all(|s| s.my_fill.is_above() != s.my_fill.is_below()));
    }

    #[test]
    fn repeated_points_are_skipped() {
        let sq = [region![(0.0, 0.0), (2.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]];
        let segs = self_intersected_segments(&sq, &RegionBooleanOptions::new()).unwrap();
        assert_eq!(segs.len(), 4);
    }

    #[test]
    fn snapping_merges_nearby_points() {
        let sq = [region![(0.0, 0.0), (2.0, 0.0), (2.0, 1.96), (2.04, 2.0), (0.0, 2.0)]];
        let mut options = RegionBooleanOptions::new();
        options.snap_increment = Some(0.1);
        let segs = self_intersected_segments(&sq, &options).unwrap();
        assert_eq!(segs.len(), 4);
    }

    #[test]
    fn combined_fill_of_disjoint_squares() {
        let options = RegionBooleanOptions::new();
        let a = [region![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]];
        let b = [region![(5.0, 0.0), (6.0, 0.0), (6.0, 1.0), (5.0, 1.0)]];
        let segs1 = self_intersected_segments(&a, &options).unwrap();
        let segs2 = self_intersected_segments(&b, &options).unwrap();
        let combined = combined_segments(&segs1, &segs2, options.pos_equal_eps).unwrap();
        assert_eq!(combined.len(), 8);
        // neither operand's edges lie inside the other operand
        for seg in &combined {
            let inner = if seg.start.x < 2.0 {
                seg.other_fill.unwrap_or_default()
            } else {
                seg.my_fill
            };
            assert!(!inner.is_above() && !inner.is_below());
        }
    }
}
