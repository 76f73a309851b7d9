//! Seam selection for Hirschberg's recursion: given the forward bottom row
//! of the top half and the reverse bottom row of the bottom half, picks the
//! split column and the pair of gap tags to impose at the seam.
//!
//! Grounded on `original_source/FastNWModule.c`'s `Partition`, including its
//! five-combination table and its deliberate omission of the `R`/`R` seam
//! (see spec.md's Open Question on this point, and DESIGN.md).

use crate::alignment::row_scorer::RowTriple;
use crate::scoring::{Direction, Scoring};

/// Selects the column `i*` (relative to the sub-rectangle's horizontal
/// start) at which to split, and the `(end, start)` direction tags to
/// impose on the two recursive calls at the seam.
///
/// `left` is the forward-scored top half's bottom row; `right` is the
/// reverse-scored bottom half's bottom row (i.e. the row immediately above
/// the split in the original orientation, computed by running `RowScorer`
/// on reversed sub-sequences). `w` is the sub-rectangle's width.
pub(crate) fn partition(
    left: &RowTriple,
    right: &RowTriple,
    w: usize,
    scoring: &Scoring,
) -> (usize, Direction, Direction) {
    let mut best = i32::MIN;
    let mut best_i = 0;
    let mut best_tags = (Direction::None, Direction::None);

    for i in 0..=w {
        let j = w - i;

        // Order matters: earliest combination wins a tie (strict `>` below).
        let combos = [
            (left.m[i] + right.m[j], Direction::None, Direction::None),
            (left.m[i] + right.d[j], Direction::None, Direction::Down),
            (left.d[i] + right.m[j], Direction::Down, Direction::None),
            (
                left.d[i] + right.d[j] - scoring.gap_open + scoring.gap_extend,
                Direction::Down,
                Direction::Down,
            ),
            (left.r[i] + right.m[j], Direction::Right, Direction::None),
        ];

        for (score, left_tag, right_tag) in combos {
            if score > best {
                best = score;
                best_i = i;
                best_tags = (left_tag, right_tag);
            }
        }
    }

    (best_i, best_tags.0, best_tags.1)
}
