//! The alignment engine: `RowScorer`, `MatrixAligner`, `Partitioner` and
//! `HirschDriver`, wired together by the public facade in `crate::lib`.

pub(crate) mod hirschberg;
pub(crate) mod matrix_aligner;
pub(crate) mod partition;
pub(crate) mod row_scorer;
