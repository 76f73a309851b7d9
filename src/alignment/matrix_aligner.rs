//! Full O(w·h) three-layer DP with backpointers and traceback.
//!
//! This is the Hirschberg recursion's base case, and also what `qalign`
//! uses for the whole problem. Grounded on
//! `original_source/FastNWModule.c`'s `NeedlemanWunsch`, translated from
//! flattened `malloc`'d arrays and `-1`/`0`/`1`/`2` integer backpointers
//! into row-major `Vec`s of `Option<Layer>`.

use crate::scoring::{Direction, Scoring, NEG_INF};

const GAP: u8 = b'-';

/// Which DP layer a cell's best score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layer {
    M,
    R,
    D,
}

/// Picks the larger of two candidate scores, ties going to `secondary`.
/// Matches `original_source`'s `if (from > from_right) ... else ...`
/// pattern used for both the `R` and `D` recurrences.
#[inline]
fn pick2(primary: i32, secondary: i32) -> (i32, bool) {
    if primary > secondary {
        (primary, true)
    } else {
        (secondary, false)
    }
}

/// Picks the largest of three candidate scores with the deterministic
/// tie-break fixed by spec.md §4.2: `M` wins only if strictly greater than
/// both others, else `R` wins if strictly greater than `D`, else `D`. Used
/// both for the interior diagonal recurrence and for resolving an `Any`
/// boundary tag at a sub-rectangle's terminal cell.
#[inline]
fn pick_max3(m: i32, r: i32, d: i32) -> (i32, Layer) {
    if m > r && m > d {
        (m, Layer::M)
    } else if r > d {
        (r, Layer::R)
    } else {
        (d, Layer::D)
    }
}

struct Matrices {
    w: usize,
    h: usize,
    m: Vec<i32>,
    r: Vec<i32>,
    d: Vec<i32>,
    bp_m: Vec<Option<Layer>>,
    bp_r: Vec<Option<Layer>>,
    bp_d: Vec<Option<Layer>>,
}

impl Matrices {
    fn new(w: usize, h: usize) -> Self {
        let n = (w + 1) * (h + 1);
        Matrices {
            w,
            h,
            m: vec![0; n],
            r: vec![0; n],
            d: vec![0; n],
            bp_m: vec![None; n],
            bp_r: vec![None; n],
            bp_d: vec![None; n],
        }
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        i * (self.w + 1) + j
    }
}

/// Computes the optimal alignment of `a` (horizontal) against `b`
/// (vertical) under `start`/`end` boundary tags, appending the aligned pair
/// to `out_a`/`out_b` and returning its score.
pub(crate) fn align_matrix(
    a: &[u8],
    b: &[u8],
    scoring: &Scoring,
    start: Direction,
    end: Direction,
    out_a: &mut Vec<u8>,
    out_b: &mut Vec<u8>,
) -> i32 {
    let w = a.len();
    let h = b.len();
    let mut mx = Matrices::new(w, h);

    // Row 0: no vertical characters consumed.
    let i00 = mx.idx(0, 0);
    mx.m[i00] = 0;
    mx.r[i00] = NEG_INF;
    mx.d[i00] = NEG_INF;
    for j in 1..=w {
        let cur = mx.idx(0, j);
        let prev = mx.idx(0, j - 1);
        mx.m[cur] = NEG_INF;
        mx.d[cur] = NEG_INF;
        let (score, m_wins) = pick2(mx.m[prev] + scoring.gap_open, mx.r[prev] + scoring.gap_extend);
        mx.r[cur] = score;
        mx.bp_r[cur] = Some(if m_wins { Layer::M } else { Layer::R });
    }

    // Row 1: branches on start_direction.
    if h >= 1 {
        let b0 = b[0];
        let r0 = mx.idx(1, 0);
        mx.m[r0] = NEG_INF;
        mx.r[r0] = NEG_INF;
        match start {
            Direction::None => {
                mx.d[r0] = NEG_INF;
                for j in 1..=w {
                    fill_row1_matched(&mut mx, j, a[j - 1], b0, scoring, Layer::M);
                }
            }
            Direction::Down => {
                mx.d[r0] = scoring.gap_open;
                mx.bp_d[r0] = None; // fresh gap, no predecessor within this call
                for j in 1..=w {
                    let cur = mx.idx(1, j);
                    mx.m[cur] = NEG_INF;
                    mx.r[cur] = NEG_INF;
                    mx.d[cur] = NEG_INF;
                }
            }
            Direction::Right => {
                mx.d[r0] = NEG_INF;
                for j in 1..=w {
                    fill_row1_matched(&mut mx, j, a[j - 1], b0, scoring, Layer::R);
                }
            }
            Direction::Any => {
                mx.d[r0] = scoring.gap_open;
                mx.bp_d[r0] = None;
                for j in 1..=w {
                    let cur = mx.idx(1, j);
                    let prev = mx.idx(0, j - 1);
                    let (best, m_wins) = pick2(mx.m[prev], mx.r[prev]);
                    mx.m[cur] = best + scoring.match_score(a[j - 1], b0);
                    mx.bp_m[cur] = Some(if m_wins { Layer::M } else { Layer::R });
                    let (rscore, r_m_wins) =
                        pick2(mx.m[cur] + scoring.gap_open, mx.r[mx.idx(1, j - 1)] + scoring.gap_extend);
                    mx.r[cur] = rscore;
                    mx.bp_r[cur] = Some(if r_m_wins { Layer::M } else { Layer::R });
                    mx.d[cur] = NEG_INF;
                }
            }
        }
    }

    // Remaining rows: general affine recurrence.
    for i in 2..=h {
        let bi = b[i - 1];
        let cur0 = mx.idx(i, 0);
        let prev0 = mx.idx(i - 1, 0);
        mx.m[cur0] = NEG_INF;
        mx.r[cur0] = NEG_INF;
        let (dscore, d_m_wins) = pick2(mx.m[prev0] + scoring.gap_open, mx.d[prev0] + scoring.gap_extend);
        mx.d[cur0] = dscore;
        mx.bp_d[cur0] = Some(if d_m_wins { Layer::M } else { Layer::D });

        for j in 1..=w {
            let cur = mx.idx(i, j);
            let diag = mx.idx(i - 1, j - 1);
            let up = mx.idx(i - 1, j);
            let left = mx.idx(i, j - 1);

            let (best, layer) = pick_max3(mx.m[diag], mx.r[diag], mx.d[diag]);
            mx.m[cur] = best + scoring.match_score(a[j - 1], bi);
            mx.bp_m[cur] = Some(layer);

            let (dscore, d_m_wins) = pick2(mx.m[up] + scoring.gap_open, mx.d[up] + scoring.gap_extend);
            mx.d[cur] = dscore;
            mx.bp_d[cur] = Some(if d_m_wins { Layer::M } else { Layer::D });

            let (rscore, r_m_wins) =
                pick2(mx.m[cur] + scoring.gap_open, mx.r[left] + scoring.gap_extend);
            mx.r[cur] = rscore;
            mx.bp_r[cur] = Some(if r_m_wins { Layer::M } else { Layer::R });
        }
    }

    let end_idx = mx.idx(h, w);
    let (score, mut layer) = match end {
        Direction::None => (mx.m[end_idx], Layer::M),
        Direction::Right => (mx.r[end_idx], Layer::R),
        Direction::Down => (mx.d[end_idx], Layer::D),
        Direction::Any => pick_max3(mx.m[end_idx], mx.r[end_idx], mx.d[end_idx]),
    };
    debug_assert!(
        score > NEG_INF / 2,
        "traceback started from an unreachable cell: forced end direction \
         is infeasible for this sub-rectangle's boundary tags"
    );

    let mut rev_a = Vec::with_capacity(w + h);
    let mut rev_b = Vec::with_capacity(w + h);
    let mut i = h;
    let mut j = w;
    while i > 0 || j > 0 {
        match layer {
            Layer::M => {
                rev_a.push(a[j - 1]);
                rev_b.push(b[i - 1]);
                let next = mx.bp_m[mx.idx(i, j)];
                i -= 1;
                j -= 1;
                if i > 0 || j > 0 {
                    layer = next.expect("traceback: missing backpointer for M layer");
                }
            }
            Layer::R => {
                rev_a.push(a[j - 1]);
                rev_b.push(GAP);
                let next = mx.bp_r[mx.idx(i, j)];
                j -= 1;
                if i > 0 || j > 0 {
                    layer = next.expect("traceback: missing backpointer for R layer");
                }
            }
            Layer::D => {
                rev_a.push(GAP);
                rev_b.push(b[i - 1]);
                let next = mx.bp_d[mx.idx(i, j)];
                i -= 1;
                if i > 0 || j > 0 {
                    layer = next.expect("traceback: missing backpointer for D layer");
                }
            }
        }
    }

    out_a.extend(rev_a.iter().rev());
    out_b.extend(rev_b.iter().rev());

    score
}

/// Row-1 initialization shared by the `None` and `Right` start directions:
/// the only difference between them is which layer of row 0 feeds the
/// diagonal match/mismatch score.
fn fill_row1_matched(mx: &mut Matrices, j: usize, aj: u8, b0: u8, scoring: &Scoring, source: Layer) {
    let cur = mx.idx(1, j);
    let prev = mx.idx(0, j - 1);
    let from = match source {
        Layer::M => mx.m[prev],
        Layer::R => mx.r[prev],
        Layer::D => mx.d[prev],
    };
    mx.m[cur] = from + scoring.match_score(aj, b0);
    mx.bp_m[cur] = Some(source);

    let (rscore, r_m_wins) =
        pick2(mx.m[cur] + scoring.gap_open, mx.r[mx.idx(1, j - 1)] + scoring.gap_extend);
    mx.r[cur] = rscore;
    mx.bp_r[cur] = Some(if r_m_wins { Layer::M } else { Layer::R });
    mx.d[cur] = NEG_INF;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scoring() -> Scoring {
        Scoring::new(1, -1, -2, -1)
    }

    #[test]
    fn empty_both_is_zero() {
        let mut oa = Vec::new();
        let mut ob = Vec::new();
        let score = align_matrix(b"", b"", &scoring(), Direction::Any, Direction::Any, &mut oa, &mut ob);
        assert_eq!(score, 0);
        assert!(oa.is_empty());
        assert!(ob.is_empty());
    }

    #[test]
    fn identical_sequences_align_without_gaps() {
        let mut oa = Vec::new();
        let mut ob = Vec::new();
        let s = Scoring::new(1, -1, -2, -1);
        let score = align_matrix(b"ACGT", b"ACGT", &s, Direction::Any, Direction::Any, &mut oa, &mut ob);
        assert_eq!(score, 4);
        assert_eq!(oa, b"ACGT");
        assert_eq!(ob, b"ACGT");
    }

    #[test]
    fn one_sequence_empty_is_all_gaps() {
        let mut oa = Vec::new();
        let mut ob = Vec::new();
        let s = Scoring::new(1, -1, -2, -1);
        let score = align_matrix(b"", b"AATAA", &s, Direction::Any, Direction::Any, &mut oa, &mut ob);
        assert_eq!(score, -2 + 4 * -1);
        assert_eq!(oa, b"-----");
        assert_eq!(ob, b"AATAA");
    }
}
