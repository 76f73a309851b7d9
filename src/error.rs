//! Error type for the alignment facade.

use thiserror::Error;

/// Caller-recoverable failures from [`crate::score`], [`crate::align`] and
/// [`crate::qalign`].
///
/// Allocation failure (spec'd as a separate error kind) has no variant here:
/// Rust's global allocator aborts the process on out-of-memory rather than
/// returning a recoverable error from `Vec` growth, so there is nothing for
/// this type to carry for that case. See DESIGN.md for the Open Question
/// this resolves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// A scoring parameter violated its sign convention (`gap_open` or
    /// `gap_extend` positive).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An input sequence contained the gap byte `'-'`, which is reserved
    /// for the output alignment and must never appear in `align`/`qalign`
    /// inputs.
    #[error("gap byte '-' found in input sequence")]
    GapByteInInput,
}
