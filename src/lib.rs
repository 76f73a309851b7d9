//! Optimal global pairwise sequence alignment under an affine gap-penalty
//! model (Needleman-Wunsch with gap-open/gap-extend penalties), computed
//! either in linear space via Hirschberg's divide-and-conquer recursion
//! ([`align`]) or in quadratic space as a correctness oracle ([`qalign`]),
//! plus a score-only entry point ([`score`]).
//!
//! ```
//! use affine_align::Scoring;
//!
//! let scoring = Scoring::new(2, -1, -2, -1);
//! let (aligned_a, aligned_b, score) = affine_align::align(b"ATGATGATG", b"ATGAATG", &scoring).unwrap();
//! assert_eq!(score, affine_align::score(b"ATGATGATG", b"ATGAATG", &scoring));
//! assert_eq!(aligned_a.len(), aligned_b.len());
//! ```

mod alignment;
mod error;
mod scoring;

use alignment::hirschberg::hirschberg;
use alignment::matrix_aligner::align_matrix;
use alignment::row_scorer::score_row;

pub use crate::error::AlignError;
pub use crate::scoring::{AlignmentConfig, Direction, Scoring};

/// The byte a gap is rendered as in aligned output. Must not occur in inputs
/// to [`align`]/[`qalign`].
pub const GAP: u8 = b'-';

fn validate_inputs(a: &[u8], b: &[u8]) -> Result<(), AlignError> {
    if a.contains(&GAP) || b.contains(&GAP) {
        return Err(AlignError::GapByteInInput);
    }
    Ok(())
}

/// Orders two slices shorter-first; [`RowScorer`](alignment::row_scorer)
/// runs in space proportional to the horizontal slice's width, so the
/// facade always feeds it the shorter sequence.
fn shorter_first<'a>(a: &'a [u8], b: &'a [u8]) -> (&'a [u8], &'a [u8], bool) {
    if a.len() <= b.len() {
        (a, b, false)
    } else {
        (b, a, true)
    }
}

/// Computes only the optimal alignment score of `a` against `b`.
///
/// `score(a, b, scoring) == score(b, a, scoring)`: scoring is symmetric in
/// its two inputs regardless of which one the facade treats as "shorter"
/// internally.
pub fn score(a: &[u8], b: &[u8], scoring: &Scoring) -> i32 {
    let (short, long, _swapped) = shorter_first(a, b);
    let row = score_row(short, long, scoring, Direction::Any);
    let w = short.len();
    row.m[w].max(row.r[w]).max(row.d[w])
}

/// Computes the optimal global alignment of `a` against `b`, using
/// Hirschberg's recursion to keep memory linear in sequence length. See
/// [`align_with_config`] to override the Hirschberg/quadratic crossover
/// threshold.
///
/// Returns `(aligned_a, aligned_b, score)`: two equal-length byte strings
/// over the input alphabet plus the gap byte [`GAP`], in the caller's
/// argument order regardless of which input was internally treated as
/// shorter, and the alignment score (equal to `score(a, b, scoring)`).
pub fn align(
    a: &[u8],
    b: &[u8],
    scoring: &Scoring,
) -> Result<(Vec<u8>, Vec<u8>, i32), AlignError> {
    align_with_config(a, b, scoring, &AlignmentConfig::default())
}

/// As [`align`], but with an explicit [`AlignmentConfig`] (in practice, a
/// non-default `hirschberg_threshold`, useful in tests that want to
/// exercise the recursive split on inputs too small to cross the default
/// one-million-cell threshold).
pub fn align_with_config(
    a: &[u8],
    b: &[u8],
    scoring: &Scoring,
    config: &AlignmentConfig,
) -> Result<(Vec<u8>, Vec<u8>, i32), AlignError> {
    validate_inputs(a, b)?;
    let (short, long, swapped) = shorter_first(a, b);

    let rev_short: Vec<u8> = short.iter().rev().copied().collect();
    let rev_long: Vec<u8> = long.iter().rev().copied().collect();
    let mut out_short = Vec::with_capacity(short.len() + long.len());
    let mut out_long = Vec::with_capacity(short.len() + long.len());

    let score = hirschberg(
        short,
        &rev_short,
        long,
        &rev_long,
        0,
        short.len(),
        0,
        long.len(),
        scoring,
        Direction::Any,
        Direction::Any,
        config.hirschberg_threshold,
        &mut out_short,
        &mut out_long,
    );

    if swapped {
        Ok((out_long, out_short, score))
    } else {
        Ok((out_short, out_long, score))
    }
}

/// As [`align`], but forces the quadratic-space `MatrixAligner` over the
/// whole problem instead of recursing with Hirschberg's algorithm. Used as
/// a correctness oracle and for inputs small enough that quadratic memory
/// is acceptable; returns the same `(aligned_a, aligned_b, score)` shape.
pub fn qalign(
    a: &[u8],
    b: &[u8],
    scoring: &Scoring,
) -> Result<(Vec<u8>, Vec<u8>, i32), AlignError> {
    validate_inputs(a, b)?;
    let (short, long, swapped) = shorter_first(a, b);

    let mut out_short = Vec::with_capacity(short.len() + long.len());
    let mut out_long = Vec::with_capacity(short.len() + long.len());
    let score = align_matrix(
        short,
        long,
        scoring,
        Direction::Any,
        Direction::Any,
        &mut out_short,
        &mut out_long,
    );

    if swapped {
        Ok((out_long, out_short, score))
    } else {
        Ok((out_short, out_long, score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_gaps(s: &[u8]) -> Vec<u8> {
        s.iter().copied().filter(|&c| c != GAP).collect()
    }

    #[test]
    fn score_is_symmetric() {
        let scoring = Scoring::new(1, -1, -2, -2);
        assert_eq!(
            score(b"GATTACA", b"GCATGCU", &scoring),
            score(b"GCATGCU", b"GATTACA", &scoring)
        );
    }

    #[test]
    fn score_scenario_no_shared_structure() {
        let scoring = Scoring::new(1, -1, -2, -2);
        assert_eq!(score(b"GATTACA", b"GCATGCU", &scoring), 0);
    }

    #[test]
    fn score_scenario_identical_runs() {
        let scoring = Scoring::new(2, -1, -3, -1);
        assert_eq!(score(b"AAAA", b"AAAA", &scoring), 8);
    }

    #[test]
    fn score_scenario_single_insertion() {
        let scoring = Scoring::new(1, -1, -2, -1);
        assert_eq!(score(b"AAAA", b"AATAA", &scoring), 3);
    }

    #[test]
    fn align_scenario_identity() {
        let scoring = Scoring::new(1, -1, -2, -1);
        let (aa, ab, s) = align(b"ACGT", b"ACGT", &scoring).unwrap();
        assert_eq!((aa.as_slice(), ab.as_slice(), s), (&b"ACGT"[..], &b"ACGT"[..], 4));
    }

    #[test]
    fn align_agrees_with_score_and_qalign() {
        let scoring = Scoring::new(1, -1, -3, -1);
        let (aa, ab, s) = align(b"AAAAA", b"AAGGAA", &scoring).unwrap();
        let (qa, qb, qs) = qalign(b"AAAAA", b"AAGGAA", &scoring).unwrap();
        assert_eq!(s, qs);
        assert_eq!(s, score(b"AAAAA", b"AAGGAA", &scoring));
        assert_eq!(aa.len(), ab.len());
        assert_eq!(qa.len(), qb.len());
        assert_eq!(strip_gaps(&aa), b"AAAAA");
        assert_eq!(strip_gaps(&ab), b"AAGGAA");
        assert_eq!(strip_gaps(&qa), b"AAAAA");
        assert_eq!(strip_gaps(&qb), b"AAGGAA");
    }

    #[test]
    fn qalign_scenario() {
        let scoring = Scoring::new(2, -1, -2, -1);
        let (_a, _b, s) = qalign(b"AGTACGCA", b"TATGC", &scoring).unwrap();
        assert_eq!(s, score(b"AGTACGCA", b"TATGC", &scoring));
    }

    #[test]
    fn identity_scales_with_match_score() {
        let scoring = Scoring::new(3, -2, -4, -1);
        let s = b"ACGTACGTAC";
        let (aa, ab, score) = align(s, s, &scoring).unwrap();
        assert_eq!(score, 3 * s.len() as i32);
        assert_eq!(aa, s);
        assert_eq!(ab, s);
    }

    #[test]
    fn both_empty() {
        let scoring = Scoring::new(1, -1, -2, -1);
        let (aa, ab, s) = align(b"", b"", &scoring).unwrap();
        assert!(aa.is_empty());
        assert!(ab.is_empty());
        assert_eq!(s, 0);
    }

    #[test]
    fn one_empty() {
        let scoring = Scoring::new(1, -1, -2, -1);
        let (aa, ab, s) = align(b"", b"GATTACA", &scoring).unwrap();
        assert_eq!(aa, b"-------");
        assert_eq!(ab, b"GATTACA");
        assert_eq!(s, -2 + 6 * -1);
    }

    #[test]
    fn orientation_preserved_regardless_of_internal_swap() {
        let scoring = Scoring::new(1, -1, -2, -1);
        let (aa, ab, _s) = align(b"GATTACA", b"GC", &scoring).unwrap();
        assert_eq!(strip_gaps(&aa), b"GATTACA");
        assert_eq!(strip_gaps(&ab), b"GC");
    }

    #[test]
    fn linear_gap_model_matches_equal_open_extend() {
        let affine = Scoring::new(1, -1, -2, -2);
        let linear = Scoring::linear(1, -1, -2);
        assert_eq!(
            score(b"GATTACA", b"GCATGCU", &affine),
            score(b"GATTACA", b"GCATGCU", &linear)
        );
    }

    #[test]
    fn gap_byte_in_input_is_rejected() {
        let scoring = Scoring::new(1, -1, -2, -1);
        assert_eq!(
            align(b"AC-GT", b"ACGT", &scoring),
            Err(AlignError::GapByteInInput)
        );
    }
}
