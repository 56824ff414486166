//! Intersection handling between neighboring active segments.

use super::{linked_list::NodeId, sweep_events::EventQueue};
use crate::core::{
    math::{
        is_collinear_eps, line_line_intr, point_strictly_between_eps, LineLineIntr, ParamPosition,
    },
    traits::Real,
};

impl<T> EventQueue<T>
where
    T: Real,
{
    /// Resolve the intersection between the segments started by `ev1` and `ev2`.
    ///
    /// Segments are divided at any crossing or touching point that is interior to one of them so
    /// that afterwards the two segments only meet at end points. Overlapping collinear segments are
    /// divided so that the overlap becomes a shared segment.
    ///
    /// Returns `Some(ev2)` if the two segments are (after division) identical, in which case the
    /// caller should merge `ev1` into `ev2`. Returns `None` otherwise.
    pub fn check_intersection(&mut self, ev1: NodeId, ev2: NodeId) -> Option<NodeId> {
        let eps = self.pos_equal_eps();
        let seg1 = *self.segment_of(ev1);
        let seg2 = *self.segment_of(ev2);
        let (a1, a2) = (seg1.start, seg1.end);
        let (b1, b2) = (seg2.start, seg2.end);

        match line_line_intr(a1, a2, b1, b2, eps) {
            LineLineIntr::Parallel => {
                if !is_collinear_eps(a1, a2, b1, eps) {
                    // distinct parallel lines
                    return None;
                }

                if a1.fuzzy_eq_eps(b2, eps) || a2.fuzzy_eq_eps(b1, eps) {
                    // touching end to end
                    return None;
                }

                let a1_is_b1 = a1.fuzzy_eq_eps(b1, eps);
                let a2_is_b2 = a2.fuzzy_eq_eps(b2, eps);
                if a1_is_b1 && a2_is_b2 {
                    return Some(ev2);
                }

                let a1_between = !a1_is_b1 && point_strictly_between_eps(a1, b1, b2, eps);
                let a2_between = !a2_is_b2 && point_strictly_between_eps(a2, b1, b2, eps);

                if a1_is_b1 {
                    // shorten the longer segment so both end at the same point
                    if a2_between {
                        self.divide(ev2, a2);
                    } else {
                        self.divide(ev1, b2);
                    }

                    return Some(ev2);
                } else if a1_between {
                    if !a2_is_b2 {
                        if a2_between {
                            self.divide(ev2, a2);
                        } else {
                            self.divide(ev1, b2);
                        }
                    }

                    self.divide(ev2, a1);
                }
            }
            LineLineIntr::Crossing {
                point,
                seg1_pos,
                seg2_pos,
                ..
            } => {
                if seg1_pos == ParamPosition::Interior {
                    match seg2_pos {
                        ParamPosition::AtStart => {
                            self.divide(ev1, b1);
                        }
                        ParamPosition::Interior => {
                            self.divide(ev1, point);
                        }
                        ParamPosition::AtEnd => {
                            self.divide(ev1, b2);
                        }
                        _ => {}
                    }
                }

                if seg2_pos == ParamPosition::Interior {
                    match seg1_pos {
                        ParamPosition::AtStart => {
                            self.divide(ev2, a1);
                        }
                        ParamPosition::Interior => {
                            self.divide(ev2, point);
                        }
                        ParamPosition::AtEnd => {
                            self.divide(ev2, a2);
                        }
                        _ => {}
                    }
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::super::sweep_events::SweepSegment;
    use super::*;
    use crate::core::math::{vec2, Vector2};

    const EPS: f64 = 1e-3;

    fn segment_ends(queue: &EventQueue<f64>) -> Vec<(Vector2<f64>, Vector2<f64>)> {
        queue
            .iter()
            .filter(|e| e.is_start)
            .map(|e| {
                let s = queue.segment(e.seg);
                (s.start, s.end)
            })
            .collect()
    }

    #[test]
    fn crossing_segments_divided_at_crossing() {
        let mut q = EventQueue::new(EPS);
        let ev1 = q.add_segment(SweepSegment::new(vec2(0.0, 0.0), vec2(2.0, 2.0)), true);
        let ev2 = q.add_segment(SweepSegment::new(vec2(0.0, 2.0), vec2(2.0, 0.0)), true);

        assert_eq!(q.check_intersection(ev1, ev2), None);
        let ends = segment_ends(&q);
        assert_eq!(ends.len(), 4);
        assert!(q.segment_of(ev1).end.fuzzy_eq(vec2(1.0, 1.0)));
        assert!(q.segment_of(ev2).end.fuzzy_eq(vec2(1.0, 1.0)));
    }

    #[test]
    fn t_junction_divides_only_the_crossed_segment() {
        let mut q = EventQueue::new(EPS);
        let ev1 = q.add_segment(SweepSegment::new(vec2(0.0, 0.0), vec2(4.0, 0.0)), true);
        let ev2 = q.add_segment(SweepSegment::new(vec2(2.0, 0.0), vec2(2.0, 3.0)), true);

        assert_eq!(q.check_intersection(ev1, ev2), None);
        assert!(q.segment_of(ev1).end.fuzzy_eq(vec2(2.0, 0.0)));
        assert!(q.segment_of(ev2).end.fuzzy_eq(vec2(2.0, 3.0)));
        assert_eq!(segment_ends(&q).len(), 3);
    }

    #[test]
    fn identical_segments_report_merge() {
        let mut q = EventQueue::new(EPS);
        let ev1 = q.add_segment(SweepSegment::new(vec2(0.0, 0.0), vec2(4.0, 0.0)), true);
        let ev2 = q.add_segment(SweepSegment::new(vec2(0.0, 0.0), vec2(4.0, 0.0)), false);
        assert_eq!(q.check_intersection(ev1, ev2), Some(ev2));
    }

    #[test]
    fn shared_start_overlap_shortens_longer_segment() {
        let mut q = EventQueue::new(EPS);
        let ev1 = q.add_segment(SweepSegment::new(vec2(0.0, 0.0), vec2(2.0, 0.0)), true);
        let ev2 = q.add_segment(SweepSegment::new(vec2(0.0, 0.0), vec2(4.0, 0.0)), false);

        assert_eq!(q.check_intersection(ev1, ev2), Some(ev2));
        assert!(q.segment_of(ev2).end.fuzzy_eq(vec2(2.0, 0.0)));
        assert_eq!(segment_ends(&q).len(), 3);
    }

    #[test]
    fn partial_overlap_divides_both() {
        let mut q = EventQueue::new(EPS);
        let ev2 = q.add_segment(SweepSegment::new(vec2(0.0, 0.0), vec2(3.0, 0.0)), true);
        let ev1 = q.add_segment(SweepSegment::new(vec2(1.0, 0.0), vec2(4.0, 0.0)), false);

        assert_eq!(q.check_intersection(ev1, ev2), None);
        // ev1 now ends at 3, ev2 now ends at 1 with a new segment covering 1 to 3
        assert!(q.segment_of(ev1).end.fuzzy_eq(vec2(3.0, 0.0)));
        assert!(q.segment_of(ev2).end.fuzzy_eq(vec2(1.0, 0.0)));
        let overlap_count = segment_ends(&q)
            .iter()
            .filter(|(s, e)| s.fuzzy_eq(vec2(1.0, 0.0)) && e.fuzzy_eq(vec2(3.0, 0.0)))
            .count();
        assert_eq!(overlap_count, 2);
    }

    #[test]
    fn end_to_end_collinear_is_ignored() {
        let mut q = EventQueue::new(EPS);
        let ev1 = q.add_segment(SweepSegment::new(vec2(0.0, 0.0), vec2(1.0, 0.0)), true);
        let ev2 = q.add_segment(SweepSegment::new(vec2(1.0, 0.0), vec2(2.0, 0.0)), true);
        assert_eq!(q.check_intersection(ev1, ev2), None);
        assert_eq!(segment_ends(&q).len(), 2);
    }
}
