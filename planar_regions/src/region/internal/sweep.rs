//! Plane sweep that resolves intersections and computes segment fill.

use super::{
    linked_list::{NodeId, NodeList},
    sweep_events::{EventQueue, Fill, SweepSegment},
};
use crate::{
    core::{
        math::{is_collinear_eps, point_above_or_on_line_eps},
        traits::Real,
    },
    region::BooleanError,
};
use std::cmp::Ordering;

/// Which fill the sweep computes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SweepMode {
    /// Segments all belong to one operand, compute `my_fill` using the even-odd rule.
    SelfIntersection,
    /// Segments come from two already self resolved operands, compute `other_fill`.
    Combine,
}

/// Vertical ordering of two active segments by their start events.
///
/// Returns [Ordering::Greater] if the segment of `ev1` lies above the segment of `ev2`, collinear
/// segments compare as [Ordering::Greater].
fn status_compare<T>(queue: &EventQueue<T>, ev1: NodeId, ev2: NodeId) -> Ordering
where
    T: Real,
{
    let eps = queue.pos_equal_eps();
    let a = queue.segment_of(ev1);
    let b = queue.segment_of(ev2);

    let above_or_on = |pt| {
        if point_above_or_on_line_eps(pt, b.start, b.end, eps) {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    };

    if !is_collinear_eps(a.start, b.start, b.end, eps) {
        above_or_on(a.start)
    } else if !is_collinear_eps(a.end, b.start, b.end, eps) {
        above_or_on(a.end)
    } else {
        Ordering::Greater
    }
}

/// Whether crossing a segment with `fill` flips inside/outside during a self intersection sweep.
#[inline]
fn fill_toggles(fill: Fill) -> bool {
    !(fill.below == Some(true) && fill.above == Some(true))
}

/// Run the sweep over all events in `queue`.
///
/// Returns the segments in the order their end events were processed. Segments of the secondary
/// operand have their `my_fill` and `other_fill` swapped so every returned segment reports the
/// primary operand's fill in `my_fill`.
///
/// Fails with [BooleanError::ZeroLengthSegment] if an end event is reached whose segment never
/// became active, which happens when a division produces a segment shorter than the position
/// epsilon.
pub fn run_sweep<T>(
    mut queue: EventQueue<T>,
    mode: SweepMode,
) -> Result<Vec<SweepSegment<T>>, BooleanError>
where
    T: Real,
{
    let mut status: NodeList<NodeId> = NodeList::new();
    let mut output = Vec::new();

    while let Some(ev) = queue.head() {
        let event = *queue.event(ev);

        if event.is_start {
            let surrounding =
                status.find_transition(|&here| status_compare(&queue, ev, here) == Ordering::Greater);
            let above = surrounding.before.map(|id| *status.get(id));
            let below = surrounding.after.map(|id| *status.get(id));

            let mut merge_into = None;
            if let Some(above) = above {
                merge_into = queue.check_intersection(ev, above);
            }
            if merge_into.is_none() {
                if let Some(below) = below {
                    merge_into = queue.check_intersection(ev, below);
                }
            }

            if let Some(eve) = merge_into {
                let seg_fill = queue.segment(event.seg).my_fill;
                let target_seg = queue.event(eve).seg;
                match mode {
                    SweepMode::SelfIntersection => {
                        // coincident edges of one polygon cancel out
                        if fill_toggles(seg_fill) {
                            let target = queue.segment_mut(target_seg);
                            target.my_fill.above = Some(!target.my_fill.is_above());
                        }
                    }
                    SweepMode::Combine => {
                        queue.segment_mut(target_seg).other_fill = Some(seg_fill);
                    }
                }

                log::trace!(
                    "merged coincident segment {:?} -> {:?}",
                    queue.segment(event.seg).start,
                    queue.segment(event.seg).end
                );
                queue.remove(event.other);
                queue.remove(ev);
            }

            if queue.head() != Some(ev) {
                // new events were queued before this one or it was merged away
                continue;
            }

            match mode {
                SweepMode::SelfIntersection => {
                    let toggle = fill_toggles(queue.segment(event.seg).my_fill);
                    let fill_below = match below {
                        Some(below) => queue.segment_of(below).my_fill.above,
                        None => Some(false),
                    };
                    let fill_above = if toggle {
                        Some(!fill_below.unwrap_or(false))
                    } else {
                        fill_below
                    };

                    let seg = queue.segment_mut(event.seg);
                    seg.my_fill.below = fill_below;
                    seg.my_fill.above = fill_above;
                }
                SweepMode::Combine => {
                    if queue.segment(event.seg).other_fill.is_none() {
                        let inside = match below {
                            Some(below) => {
                                let below_event = queue.event(below);
                                let below_seg = queue.segment(below_event.seg);
                                if below_event.primary == event.primary {
                                    below_seg.other_fill.and_then(|f| f.above)
                                } else {
                                    below_seg.my_fill.above
                                }
                            }
                            None => Some(false),
                        };

                        queue.segment_mut(event.seg).other_fill = Some(Fill {
                            above: inside,
                            below: inside,
                        });
                    }
                }
            }

            let status_id = status.alloc(ev);
            status.insert_at(status_id, surrounding);
            queue.event_mut(event.other).status = Some(status_id);
        } else {
            let status_id = match event.status {
                Some(id) => id,
                None => {
                    log::warn!(
                        "zero length segment reached the sweep at {:?}, consider snapping input",
                        event.pt
                    );
                    return Err(BooleanError::ZeroLengthSegment {
                        x: event.pt.x.to_f64_lossy(),
                        y: event.pt.y.to_f64_lossy(),
                    });
                }
            };

            if let (Some(prev), Some(next)) = (status.prev(status_id), status.next(status_id)) {
                let (prev, next) = (*status.get(prev), *status.get(next));
                // segments above and below become neighbors
                queue.check_intersection(prev, next);
            }

            status.remove(status_id);

            let seg = queue.segment_mut(event.seg);
            if !event.primary {
                let other = seg.other_fill.take().unwrap_or_default();
                seg.other_fill = Some(seg.my_fill);
                seg.my_fill = other;
            }

            output.push(*seg);
        }

        queue.remove(ev);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{vec2, Vector2};

    const EPS: f64 = 1e-3;

    fn square_queue(min: f64, max: f64) -> EventQueue<f64> {
        let mut q = EventQueue::new(EPS);
        let pts = [
            vec2(min, min),
            vec2(max, min),
            vec2(max, max),
            vec2(min, max),
        ];
        for i in 0..pts.len() {
            let a = pts[i];
            let b = pts[(i + 1) % pts.len()];
            let (start, end) = if (a.x, a.y) < (b.x, b.y) { (a, b) } else { (b, a) };
            q.add_segment(SweepSegment::new(start, end), true);
        }
        q
    }

    fn find(segs: &[SweepSegment<f64>], start: Vector2<f64>, end: Vector2<f64>) -> SweepSegment<f64> {
        *segs
            .iter()
            .find(|s| s.start.fuzzy_eq(start) && s.end.fuzzy_eq(end))
            .unwrap()
    }

    #[test]
    fn square_self_fill() {
        let segs = run_sweep(square_queue(0.0, 2.0), SweepMode::SelfIntersection).unwrap();
        assert_eq!(segs.len(), 4);

        let bottom = find(&segs, vec2(0.0, 0.0), vec2(2.0, 0.0));
        assert_eq!(bottom.my_fill, Fill::new(true, false));
        let top = find(&segs, vec2(0.0, 2.0), vec2(2.0, 2.0));
        assert_eq!(top.my_fill, Fill::new(false, true));
        // vertical segments run upward, "above" is the side to the left of that direction
        let left = find(&segs, vec2(0.0, 0.0), vec2(0.0, 2.0));
        assert_eq!(left.my_fill, Fill::new(false, true));
        let right = find(&segs, vec2(2.0, 0.0), vec2(2.0, 2.0));
        assert_eq!(right.my_fill, Fill::new(true, false));
    }

    #[test]
    fn overlapping_edges_of_one_polygon_cancel() {
        // two squares sharing the edge x = 2 given as one input
        let mut q = square_queue(0.0, 2.0);
        let pts = [vec2(2.0, 0.0), vec2(4.0, 0.0), vec2(4.0, 2.0), vec2(2.0, 2.0)];
        for i in 0..pts.len() {
            let a = pts[i];
            let b = pts[(i + 1) % pts.len()];
            let (start, end) = if (a.x, a.y) < (b.x, b.y) { (a, b) } else { (b, a) };
            q.add_segment(SweepSegment::new(start, end), true);
        }

        let segs = run_sweep(q, SweepMode::SelfIntersection).unwrap();
        // shared edge is merged into a single segment
        assert_eq!(segs.len(), 7);
        let shared = find(&segs, vec2(2.0, 0.0), vec2(2.0, 2.0));
        assert_eq!(shared.my_fill, Fill::new(true, true));
    }
}
