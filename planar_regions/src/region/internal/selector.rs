//! Segment selection for each boolean operation.

use super::sweep_events::{Fill, SweepSegment};
use crate::{core::traits::Real, region::BooleanOp};

/// What happens to a segment after the combination sweep.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Segment is not part of the result boundary.
    Drop,
    /// Keep, result interior is above the segment.
    KeepAbove,
    /// Keep, result interior is below the segment.
    KeepBelow,
}

use Selection::{Drop as D, KeepAbove as A, KeepBelow as B};

// indexed by [`fill_index`]
const UNION: [Selection; 16] = [D, B, A, D, B, B, D, D, A, D, A, D, D, D, D, D];
const INTERSECT: [Selection; 16] = [D, D, D, D, D, B, D, B, D, D, A, A, D, B, A, D];
const DIFFERENCE: [Selection; 16] = [D, D, D, D, B, D, B, D, A, A, D, D, D, A, B, D];
const XOR: [Selection; 16] = [D, B, A, D, B, D, D, A, A, D, D, B, D, A, B, D];

/// Selection table for `op`.
#[inline]
pub fn selection_table(op: BooleanOp) -> &'static [Selection; 16] {
    match op {
        BooleanOp::Union => &UNION,
        BooleanOp::Intersect => &INTERSECT,
        BooleanOp::Difference => &DIFFERENCE,
        BooleanOp::Xor => &XOR,
    }
}

/// Four bit table index `my.above, my.below, other.above, other.below` (most significant first),
/// unknown fill counts as false.
#[inline]
pub fn fill_index(my_fill: Fill, other_fill: Option<Fill>) -> usize {
    let other_fill = other_fill.unwrap_or_default();
    (usize::from(my_fill.is_above()) << 3)
        | (usize::from(my_fill.is_below()) << 2)
        | (usize::from(other_fill.is_above()) << 1)
        | usize::from(other_fill.is_below())
}

/// Filter combined segments down to the boundary of the `op` result.
///
/// Kept segments get `my_fill` set to describe the result (interior on exactly one side) and
/// `other_fill` cleared.
pub fn select_segments<T>(segments: &[SweepSegment<T>], op: BooleanOp) -> Vec<SweepSegment<T>>
where
    T: Real,
{
    let table = selection_table(op);
    segments
        .iter()
        .filter_map(|seg| {
            let fill = match table[fill_index(seg.my_fill, seg.other_fill)] {
                Selection::Drop => return None,
                Selection::KeepAbove => Fill::new(true, false),
                Selection::KeepBelow => Fill::new(false, true),
            };

            Some(SweepSegment {
                start: seg.start,
                end: seg.end,
                my_fill: fill,
                other_fill: None,
            })
        })
        .collect()
}
