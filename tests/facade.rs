//! Facade-level property tests (spec.md §8), kept separate from the
//! component unit tests in `src/` the way a public-API contract should be.

use affine_align::{align, align_with_config, qalign, score, AlignmentConfig, Scoring};

fn strip_gaps(s: &[u8]) -> Vec<u8> {
    s.iter().copied().filter(|&c| c != b'-').collect()
}

const PAIRS: &[(&[u8], &[u8])] = &[
    (b"GATTACA", b"GCATGCU"),
    (b"AAAA", b"AATAA"),
    (b"AGTACGCA", b"TATGC"),
    (b"", b"ACGTACGT"),
    (b"", b""),
    (b"A", b"A"),
    (b"ACGTACGTACGTACGT", b"ACGTCGTACGTACCGT"),
];

#[test]
fn score_symmetry_holds_across_pairs() {
    let scoring = Scoring::new(1, -1, -2, -1);
    for (a, b) in PAIRS {
        assert_eq!(score(a, b, &scoring), score(b, a, &scoring), "pair {a:?}/{b:?}");
    }
}

#[test]
fn align_agreement_holds_across_pairs() {
    let scoring = Scoring::new(2, -1, -3, -1);
    for (a, b) in PAIRS {
        let (aligned_a, aligned_b, s) = align(a, b, &scoring).unwrap();
        assert_eq!(s, score(a, b, &scoring), "pair {a:?}/{b:?}");
        assert_eq!(strip_gaps(&aligned_a), *a);
        assert_eq!(strip_gaps(&aligned_b), *b);
        assert_eq!(aligned_a.len(), aligned_b.len());
        assert!(aligned_a.len() <= a.len() + b.len());
    }
}

#[test]
fn hirschberg_equivalence_forced_recursion() {
    // threshold=1 forces the recursive split on every pair above width/height 1.
    let config = AlignmentConfig {
        hirschberg_threshold: 1,
    };
    let scoring = Scoring::new(2, -1, -3, -1);
    for (a, b) in PAIRS {
        let (_ha, _hb, h_score) = align_with_config(a, b, &scoring, &config).unwrap();
        let (_qa, _qb, q_score) = qalign(a, b, &scoring).unwrap();
        assert_eq!(h_score, q_score, "pair {a:?}/{b:?}");
    }
}

#[test]
fn identity_alignment_scores_match_times_length() {
    let scoring = Scoring::new(2, -1, -3, -1);
    for s in [&b"A"[..], b"ACGTACGTACGTACGT", b"M"] {
        let (aligned_a, aligned_b, score) = align(s, s, &scoring).unwrap();
        assert_eq!(score, 2 * s.len() as i32);
        assert_eq!(aligned_a, s);
        assert_eq!(aligned_b, s);
    }
}

#[test]
fn empty_both_inputs() {
    let scoring = Scoring::new(1, -1, -2, -1);
    assert_eq!(align(b"", b"", &scoring).unwrap(), (vec![], vec![], 0));
}

#[test]
fn empty_one_input() {
    let scoring = Scoring::new(1, -1, -2, -1);
    let (aligned_a, aligned_b, s) = align(b"", b"GATTACA", &scoring).unwrap();
    assert_eq!(aligned_a, b"-------");
    assert_eq!(aligned_b, b"GATTACA");
    assert_eq!(s, -2 + 6 * -1);
}
