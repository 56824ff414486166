//! Sweep segments, sweep events and the ordered event queue.

use super::linked_list::{NodeId, NodeList};
use crate::core::{
    math::{point_above_or_on_line_eps, points_compare_eps, Vector2},
    traits::Real,
};
use std::cmp::Ordering;

/// Index of a segment in the [EventQueue] segment arena.
pub type SegmentId = usize;

/// Whether a polygon's interior lies immediately above/below a segment.
///
/// `None` means not yet known, it is treated as `false` wherever a decision is made.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Fill {
    pub above: Option<bool>,
    pub below: Option<bool>,
}

impl Fill {
    #[inline]
    pub fn new(above: bool, below: bool) -> Self {
        Self {
            above: Some(above),
            below: Some(below),
        }
    }

    #[inline]
    pub fn is_above(&self) -> bool {
        self.above.unwrap_or(false)
    }

    #[inline]
    pub fn is_below(&self) -> bool {
        self.below.unwrap_or(false)
    }
}

/// Edge with fill information, `start` always precedes `end` in sweep point order.
#[derive(Debug, Copy, Clone)]
pub struct SweepSegment<T> {
    pub start: Vector2<T>,
    pub end: Vector2<T>,
    /// Fill of the polygon that owns the segment.
    pub my_fill: Fill,
    /// Fill of the other operand, set once it has been resolved by the combination sweep.
    pub other_fill: Option<Fill>,
}

impl<T> SweepSegment<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Vector2<T>, end: Vector2<T>) -> Self {
        Self {
            start,
            end,
            my_fill: Fill::default(),
            other_fill: None,
        }
    }

    /// New segment from `start` to `end` carrying over a snapshot of `self.my_fill` (other fill is
    /// left unresolved).
    #[inline]
    pub fn with_fill_of(&self, start: Vector2<T>, end: Vector2<T>) -> Self {
        Self {
            start,
            end,
            my_fill: self.my_fill,
            other_fill: None,
        }
    }
}

/// Start or end event of a segment in the event queue.
#[derive(Debug, Copy, Clone)]
pub struct SweepEvent<T> {
    pub is_start: bool,
    pub pt: Vector2<T>,
    pub seg: SegmentId,
    /// True if the segment belongs to the first operand (always true for self intersection).
    pub primary: bool,
    /// The partner event of the same segment.
    pub other: NodeId,
    /// Status node of the segment, only set on end events while the segment is active.
    pub status: Option<NodeId>,
}

/// Sweep event ordering.
///
/// Events sort by point, for equal points end events sort before start events, events for
/// different segments of the same kind sort by whether the far end point of `a` lies above the
/// other segment. Returns [Ordering::Equal] only if both end points of the segments coincide.
#[allow(clippy::too_many_arguments)]
pub fn event_compare<T>(
    a_is_start: bool,
    a_pt: Vector2<T>,
    a_other_pt: Vector2<T>,
    b_is_start: bool,
    b_pt: Vector2<T>,
    b_other_pt: Vector2<T>,
    pos_equal_eps: T,
) -> Ordering
where
    T: Real,
{
    match points_compare_eps(a_pt, b_pt, pos_equal_eps) {
        Ordering::Equal => {}
        ord => return ord,
    }

    if a_other_pt.fuzzy_eq_eps(b_other_pt, pos_equal_eps) {
        // same segment
        return Ordering::Equal;
    }

    if a_is_start != b_is_start {
        return if a_is_start {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    // line through b is always taken left to right
    let (left, right) = if b_is_start {
        (b_pt, b_other_pt)
    } else {
        (b_other_pt, b_pt)
    };

    if point_above_or_on_line_eps(a_other_pt, left, right, pos_equal_eps) {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Ordered queue of sweep events together with the arena of segments they refer to.
#[derive(Debug, Clone)]
pub struct EventQueue<T> {
    events: NodeList<SweepEvent<T>>,
    segments: Vec<SweepSegment<T>>,
    pos_equal_eps: T,
}

impl<T> EventQueue<T>
where
    T: Real,
{
    pub fn new(pos_equal_eps: T) -> Self {
        Self {
            events: NodeList::new(),
            segments: Vec::new(),
            pos_equal_eps,
        }
    }

    pub fn with_capacity(segment_capacity: usize, pos_equal_eps: T) -> Self {
        Self {
            events: NodeList::with_capacity(2 * segment_capacity),
            segments: Vec::with_capacity(segment_capacity),
            pos_equal_eps,
        }
    }

    #[inline]
    pub fn pos_equal_eps(&self) -> T {
        self.pos_equal_eps
    }

    #[inline]
    pub fn head(&self) -> Option<NodeId> {
        self.events.head()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[inline]
    pub fn event(&self, id: NodeId) -> &SweepEvent<T> {
        self.events.get(id)
    }

    #[inline]
    pub fn event_mut(&mut self, id: NodeId) -> &mut SweepEvent<T> {
        self.events.get_mut(id)
    }

    #[inline]
    pub fn segment(&self, id: SegmentId) -> &SweepSegment<T> {
        &self.segments[id]
    }

    #[inline]
    pub fn segment_mut(&mut self, id: SegmentId) -> &mut SweepSegment<T> {
        &mut self.segments[id]
    }

    /// Segment of the event `id`.
    #[inline]
    pub fn segment_of(&self, id: NodeId) -> &SweepSegment<T> {
        &self.segments[self.events.get(id).seg]
    }

    /// Iterate the queued events in sweep order.
    pub fn iter(&self) -> impl Iterator<Item = &SweepEvent<T>> + '_ {
        self.events.iter().map(move |id| self.events.get(id))
    }

    /// Permanently remove an event from the queue.
    #[inline]
    pub fn remove(&mut self, id: NodeId) {
        self.events.remove(id);
    }

    /// Link the event `id` into the queue at its sorted position, `other_pt` is the point of its
    /// partner event.
    fn event_add(&mut self, id: NodeId, other_pt: Vector2<T>) {
        let eps = self.pos_equal_eps;
        let (is_start, pt) = {
            let ev = self.events.get(id);
            (ev.is_start, ev.pt)
        };

        let segments = &self.segments;
        self.events.insert_before(id, |here| {
            let seg = &segments[here.seg];
            let here_other_pt = if here.is_start { seg.end } else { seg.start };
            event_compare(
                is_start,
                pt,
                other_pt,
                here.is_start,
                here.pt,
                here_other_pt,
                eps,
            ) == Ordering::Less
        });
    }

    /// Add a segment and its start/end event pair to the queue, returns the start event.
    pub fn add_segment(&mut self, seg: SweepSegment<T>, primary: bool) -> NodeId {
        let seg_id = self.segments.len();
        self.segments.push(seg);

        let start_id = self.events.alloc(SweepEvent {
            is_start: true,
            pt: seg.start,
            seg: seg_id,
            primary,
            other: 0,
            status: None,
        });
        let end_id = self.events.alloc(SweepEvent {
            is_start: false,
            pt: seg.end,
            seg: seg_id,
            primary,
            other: start_id,
            status: None,
        });
        self.events.get_mut(start_id).other = end_id;

        self.event_add(start_id, seg.end);
        self.event_add(end_id, seg.start);
        start_id
    }

    /// Slide the end of the segment started by `ev` back to `end`, re-sorting its end event.
    fn update_end(&mut self, ev: NodeId, end: Vector2<T>) {
        let (other, seg_id, start_pt) = {
            let e = self.events.get(ev);
            (e.other, e.seg, e.pt)
        };

        self.events.remove(other);
        self.segments[seg_id].end = end;
        self.events.get_mut(other).pt = end;
        self.event_add(other, start_pt);
    }

    /// Split the segment started by `ev` at `pt`.
    ///
    /// The existing segment is shortened to end at `pt` and a new segment (with a copy of the fill
    /// known so far) covers `pt` to the original end. Returns the start event of the new segment.
    pub fn divide(&mut self, ev: NodeId, pt: Vector2<T>) -> NodeId {
        let (seg_id, primary) = {
            let e = self.events.get(ev);
            (e.seg, e.primary)
        };
        let seg = self.segments[seg_id];
        log::trace!(
            "dividing segment {:?} -> {:?} at {:?}",
            seg.start,
            seg.end,
            pt
        );

        let new_seg = seg.with_fill_of(pt, seg.end);
        self.update_end(ev, pt);
        self.add_segment(new_seg, primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    const EPS: f64 = 1e-3;

    fn queue_points(queue: &EventQueue<f64>) -> Vec<(bool, Vector2<f64>)> {
        queue.iter().map(|e| (e.is_start, e.pt)).collect()
    }

    #[test]
    fn events_sorted_by_point() {
        let mut q = EventQueue::new(EPS);
        q.add_segment(SweepSegment::new(vec2(2.0, 0.0), vec2(3.0, 1.0)), true);
        q.add_segment(SweepSegment::new(vec2(0.0, 0.0), vec2(2.0, 0.0)), true);

        // end of second segment at (2, 0) sorts before the start of the first segment
        let expected = vec![
            (true, vec2(0.0, 0.0)),
            (false, vec2(2.0, 0.0)),
            (true, vec2(2.0, 0.0)),
            (false, vec2(3.0, 1.0)),
        ];
        assert_eq!(queue_points(&q), expected);
    }

    #[test]
    fn start_events_at_same_point_sort_bottom_up() {
        let mut q = EventQueue::new(EPS);
        let upper = q.add_segment(SweepSegment::new(vec2(0.0, 0.0), vec2(2.0, 2.0)), true);
        let lower = q.add_segment(SweepSegment::new(vec2(0.0, 0.0), vec2(2.0, -2.0)), true);

        // lower segment is processed first
        assert_eq!(q.head(), Some(lower));
        assert_eq!(q.iter().nth(1).map(|e| e.seg), Some(q.event(upper).seg));
    }

    #[test]
    fn event_compare_same_segment_is_equal() {
        let a = vec2(0.0, 0.0);
        let b = vec2(1.0, 1.0);
        assert_eq!(event_compare(true, a, b, true, a, b, EPS), Ordering::Equal);
        assert_eq!(
            event_compare(true, a, b, false, a, vec2(-1.0, 0.0), EPS),
            Ordering::Greater
        );
    }

    #[test]
    fn divide_splits_segment() {
        let mut q = EventQueue::new(EPS);
        let ev = q.add_segment(SweepSegment::new(vec2(0.0, 0.0), vec2(4.0, 0.0)), true);
        q.segment_mut(q.event(ev).seg).my_fill = Fill::new(true, false);

        let new_ev = q.divide(ev, vec2(1.0, 0.0));
        assert!(q.segment_of(ev).end.fuzzy_eq(vec2(1.0, 0.0)));
        let new_seg = *q.segment_of(new_ev);
        assert!(new_seg.start.fuzzy_eq(vec2(1.0, 0.0)));
        assert!(new_seg.end.fuzzy_eq(vec2(4.0, 0.0)));
        assert_eq!(new_seg.my_fill, Fill::new(true, false));
        assert!(new_seg.other_fill.is_none());

        let expected = vec![
            (true, vec2(0.0, 0.0)),
            (false, vec2(1.0, 0.0)),
            (true, vec2(1.0, 0.0)),
            (false, vec2(4.0, 0.0)),
        ];
        assert_eq!(queue_points(&q), expected);
    }
}
