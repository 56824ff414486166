//! Joins selected boundary segments into closed regions.

use super::sweep_events::SweepSegment;
use crate::{
    core::{
        math::{is_collinear_eps, Vector2},
        traits::Real,
    },
    region::Region,
};
use std::collections::VecDeque;

type Chain<T> = VecDeque<Vector2<T>>;

/// Where a segment connects to an open chain.
#[derive(Debug, Copy, Clone)]
struct ChainMatch {
    index: usize,
    matches_head: bool,
    matches_pt1: bool,
}

/// Chain segments into closed regions, merging collinear points as chains grow.
///
/// Segments may arrive in any order, zero length segments are skipped. Chains that never close
/// are discarded. Resulting region direction is unspecified.
pub fn chain_segments<T>(segments: &[SweepSegment<T>], pos_equal_eps: T) -> Vec<Region<T>>
where
    T: Real,
{
    let eps = pos_equal_eps;
    let mut chains: Vec<Chain<T>> = Vec::new();
    let mut regions = Vec::new();

    for seg in segments {
        let pt1 = seg.start;
        let pt2 = seg.end;
        if pt1.fuzzy_eq_eps(pt2, eps) {
            log::debug!("skipping zero length segment at {:?} while chaining", pt1);
            continue;
        }

        let mut first_match = None;
        let mut second_match = None;
        for (index, chain) in chains.iter().enumerate() {
            let (head, tail) = match (chain.front(), chain.back()) {
                (Some(&h), Some(&t)) => (h, t),
                _ => continue,
            };

            let found = if head.fuzzy_eq_eps(pt1, eps) {
                Some((true, true))
            } else if head.fuzzy_eq_eps(pt2, eps) {
                Some((true, false))
            } else if tail.fuzzy_eq_eps(pt1, eps) {
                Some((false, true))
            } else if tail.fuzzy_eq_eps(pt2, eps) {
                Some((false, false))
            } else {
                None
            };

            if let Some((matches_head, matches_pt1)) = found {
                let m = ChainMatch {
                    index,
                    matches_head,
                    matches_pt1,
                };

                if first_match.is_none() {
                    first_match = Some(m);
                } else {
                    second_match = Some(m);
                    break;
                }
            }
        }

        match (first_match, second_match) {
            (None, _) => {
                chains.push(VecDeque::from(vec![pt1, pt2]));
            }
            (Some(m), None) => {
                if let Some(closed) = extend_chain(&mut chains, m, pt1, pt2, eps) {
                    regions.push(Region::from_points(closed));
                }
            }
            (Some(f), Some(s)) => {
                join_chains(&mut chains, f, s, eps);
            }
        }
    }

    regions
}

/// Extend the matched chain with the unmatched point of the segment, returns the chain if it
/// closed.
fn extend_chain<T>(
    chains: &mut Vec<Chain<T>>,
    m: ChainMatch,
    pt1: Vector2<T>,
    pt2: Vector2<T>,
    eps: T,
) -> Option<Chain<T>>
where
    T: Real,
{
    let pt = if m.matches_pt1 { pt2 } else { pt1 };
    let add_to_head = m.matches_head;

    let closes = {
        let chain = &mut chains[m.index];
        let n = chain.len();
        let (mut grow, grow2, oppo, oppo2) = if add_to_head {
            (chain[0], chain[1], chain[n - 1], chain[n - 2])
        } else {
            (chain[n - 1], chain[n - 2], chain[0], chain[1])
        };

        if is_collinear_eps(grow2, grow, pt, eps) {
            // grow end is redundant
            if add_to_head {
                chain.pop_front();
            } else {
                chain.pop_back();
            }
            grow = grow2;
        }

        if oppo.fuzzy_eq_eps(pt, eps) {
            if is_collinear_eps(oppo2, oppo, grow, eps) {
                // closing point is redundant
                if add_to_head {
                    chain.pop_back();
                } else {
                    chain.pop_front();
                }
            }
            true
        } else {
            if add_to_head {
                chain.push_front(pt);
            } else {
                chain.push_back(pt);
            }
            false
        }
    };

    if closes {
        Some(chains.remove(m.index))
    } else {
        None
    }
}

/// Join the two chains connected by a segment.
fn join_chains<T>(chains: &mut Vec<Chain<T>>, f: ChainMatch, s: ChainMatch, eps: T)
where
    T: Real,
{
    let reverse_f = chains[f.index].len() < chains[s.index].len();
    match (f.matches_head, s.matches_head) {
        (true, true) => {
            if reverse_f {
                reverse_chain(&mut chains[f.index]);
                append_chain(chains, f.index, s.index, eps);
            } else {
                reverse_chain(&mut chains[s.index]);
                append_chain(chains, s.index, f.index, eps);
            }
        }
        (true, false) => {
            append_chain(chains, s.index, f.index, eps);
        }
        (false, true) => {
            append_chain(chains, f.index, s.index, eps);
        }
        (false, false) => {
            if reverse_f {
                reverse_chain(&mut chains[f.index]);
                append_chain(chains, s.index, f.index, eps);
            } else {
                reverse_chain(&mut chains[s.index]);
                append_chain(chains, f.index, s.index, eps);
            }
        }
    }
}

#[inline]
fn reverse_chain<T>(chain: &mut Chain<T>) {
    chain.make_contiguous().reverse();
}

/// Append chain `index2` to the tail of chain `index1` and remove chain `index2`.
fn append_chain<T>(chains: &mut Vec<Chain<T>>, index1: usize, index2: usize, eps: T)
where
    T: Real,
{
    let mut chain2 = std::mem::take(&mut chains[index2]);
    let chain1 = &mut chains[index1];

    let n = chain1.len();
    let mut tail = chain1[n - 1];
    let tail2 = chain1[n - 2];
    let head = chain2[0];
    let head2 = chain2[1];

    if is_collinear_eps(tail2, tail, head, eps) {
        chain1.pop_back();
        tail = tail2;
    }

    if is_collinear_eps(tail, head, head2, eps) {
        chain2.pop_front();
    }

    chain1.extend(chain2);
    chains.remove(index2);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    const EPS: f64 = 1e-3;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> SweepSegment<f64> {
        SweepSegment::new(vec2(x1, y1), vec2(x2, y2))
    }

    fn sorted_points(region: &Region<f64>) -> Vec<(i64, i64)> {
        let mut pts: Vec<_> = region
            .iter()
            .map(|p| (p.x.round() as i64, p.y.round() as i64))
            .collect();
        pts.sort();
        pts
    }

    #[test]
    fn closes_square_from_unordered_segments() {
        let segs = [
            seg(0.0, 0.0, 2.0, 0.0),
            seg(0.0, 2.0, 2.0, 2.0),
            seg(2.0, 0.0, 2.0, 2.0),
            seg(0.0, 0.0, 0.0, 2.0),
        ];
        let regions = chain_segments(&segs, EPS);
        assert_eq!(regions.len(), 1);
        assert_eq!(
            sorted_points(&regions[0]),
            vec![(0, 0), (0, 2), (2, 0), (2, 2)]
        );
    }

    #[test]
    fn collinear_points_are_merged() {
        let segs = [
            seg(0.0, 0.0, 1.0, 0.0),
            seg(1.0, 0.0, 2.0, 0.0),
            seg(2.0, 0.0, 2.0, 2.0),
            seg(0.0, 2.0, 2.0, 2.0),
            seg(0.0, 1.0, 0.0, 2.0),
            seg(0.0, 0.0, 0.0, 1.0),
        ];
        let regions = chain_segments(&segs, EPS);
        assert_eq!(regions.len(), 1);
        assert_eq!(
            sorted_points(&regions[0]),
            vec![(0, 0), (0, 2), (2, 0), (2, 2)]
        );
    }

    #[test]
    fn zero_length_segments_skipped_and_open_chains_dropped() {
        let segs = [
            seg(0.0, 0.0, 0.0, 0.0),
            seg(0.0, 0.0, 1.0, 0.0),
            seg(1.0, 0.0, 1.0, 1.0),
        ];
        assert!(chain_segments(&segs, EPS).is_empty());
    }

    #[test]
    fn two_separate_triangles() {
        let segs = [
            seg(0.0, 0.0, 1.0, 0.0),
            seg(5.0, 0.0, 6.0, 0.0),
            seg(0.0, 0.0, 0.0, 1.0),
            seg(5.0, 0.0, 5.0, 1.0),
            seg(0.0, 1.0, 1.0, 0.0),
            seg(5.0, 1.0, 6.0, 0.0),
        ];
        let regions = chain_segments(&segs, EPS);
        assert_eq!(regions.len(), 2);
        assert!(regions.iter().all(|r| r.vertex_count() == 3));
    }
}
