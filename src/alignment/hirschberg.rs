//! Recursive controller: splits a sub-rectangle with `RowScorer` +
//! `Partitioner` when it's large, delegates to `MatrixAligner` when it's
//! small, and threads the shared output buffer so it fills left to right.
//!
//! Grounded on `original_source/FastNWModule.c`'s `Hirsch`, including its
//! `width*height <= threshold || width==1 || height==1` recursion policy
//! and its reversed-sequence coordinate translation at the seam.

use log::trace;

use crate::alignment::matrix_aligner::align_matrix;
use crate::alignment::partition::partition;
use crate::alignment::row_scorer::score_row;
use crate::scoring::{Direction, Scoring};

/// Aligns `a[hl..hr]` against `b[vl..vr]` under the `(start, end)` boundary
/// tags, appending the result to `out_a`/`out_b` and returning its score.
///
/// `rev_a`/`rev_b` are full reversals of `a`/`b` (same lengths), kept around
/// for the length it takes to translate a forward sub-rectangle into the
/// coordinates `RowScorer` needs to compute "the bottom row of the reversed
/// bottom half", per spec.md §4.4's reversed-sequence convention.
#[allow(clippy::too_many_arguments)]
pub(crate) fn hirschberg(
    a: &[u8],
    rev_a: &[u8],
    b: &[u8],
    rev_b: &[u8],
    hl: usize,
    hr: usize,
    vl: usize,
    vr: usize,
    scoring: &Scoring,
    start: Direction,
    end: Direction,
    threshold: usize,
    out_a: &mut Vec<u8>,
    out_b: &mut Vec<u8>,
) -> i32 {
    let w = hr - hl;
    let h = vr - vl;

    if w.saturating_mul(h) <= threshold || w <= 1 || h <= 1 {
        return align_matrix(&a[hl..hr], &b[vl..vr], scoring, start, end, out_a, out_b);
    }

    let v_mid = (vl + vr) / 2;
    let m_full = a.len();
    let n_full = b.len();

    let top = score_row(&a[hl..hr], &b[vl..v_mid], scoring, start);
    let bottom = score_row(
        &rev_a[m_full - hr..m_full - hl],
        &rev_b[n_full - vr..n_full - v_mid],
        scoring,
        end,
    );

    let (i_star, left_tag, right_tag) = partition(&top, &bottom, w, scoring);
    let h_mid = hl + i_star;

    trace!(
        "hirschberg split: h=[{hl},{hr}) v=[{vl},{v_mid},{vr}) -> h_mid={h_mid} seam=({left_tag:?},{right_tag:?})"
    );

    let left_score = hirschberg(
        a, rev_a, b, rev_b, hl, h_mid, vl, v_mid, scoring, start, left_tag, threshold, out_a,
        out_b,
    );
    let right_score = hirschberg(
        a, rev_a, b, rev_b, h_mid, hr, v_mid, vr, scoring, right_tag, end, threshold, out_a,
        out_b,
    );

    let mut total = left_score + right_score;
    if left_tag == Direction::Down && right_tag == Direction::Down {
        // Each half independently paid gap_open for "its" end of the seam
        // gap; it's a single gap that merely crosses the seam.
        total += scoring.gap_extend - scoring.gap_open;
    }
    total
}
