//! Scoring parameters, the four-valued direction tag and the unreachable
//! sentinel, shared by every component of the alignment engine.

use crate::error::AlignError;

/// Large-negative value standing in for `-infinity`.
///
/// `i32::MIN / 4` matches the constant used by the original `FastNW`
/// implementation this crate's recurrences are grounded on: small enough to
/// lose every `max`, large enough that repeated `+ gap_extend` across a full
/// row or column cannot overflow or wrap back around to a positive value.
pub const NEG_INF: i32 = i32::MIN / 4;

/// Affine gap-penalty scoring parameters.
///
/// `match_score` is added on byte equality, `mismatch_score` on inequality.
/// `gap_open` is charged once when a gap begins, `gap_extend` for every
/// further gap character (so a run of `k` gap characters costs
/// `gap_open + (k - 1) * gap_extend`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoring {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap_open: i32,
    pub gap_extend: i32,
}

impl Scoring {
    /// Builds a `Scoring`, panicking if `gap_open`/`gap_extend` are
    /// positive.
    ///
    /// Mirrors `Scoring::from_scores`/`MatchParams::new`,
    /// which use `assert!` rather than a `Result` for the same check; kept
    /// alongside [`Scoring::try_new`] for callers that have already
    /// validated their inputs and want a panic on a programmer error rather
    /// than a `Result` to thread through.
    pub fn new(match_score: i32, mismatch_score: i32, gap_open: i32, gap_extend: i32) -> Self {
        assert!(gap_open <= 0, "gap_open can't be positive");
        assert!(gap_extend <= 0, "gap_extend can't be positive");
        Scoring {
            match_score,
            mismatch_score,
            gap_open,
            gap_extend,
        }
    }

    /// Fallible constructor for caller-supplied, unvalidated parameters.
    pub fn try_new(
        match_score: i32,
        mismatch_score: i32,
        gap_open: i32,
        gap_extend: i32,
    ) -> Result<Self, AlignError> {
        if gap_open > 0 {
            return Err(AlignError::InvalidArgument(
                "gap_open must not be positive".to_string(),
            ));
        }
        if gap_extend > 0 {
            return Err(AlignError::InvalidArgument(
                "gap_extend must not be positive".to_string(),
            ));
        }
        Ok(Scoring {
            match_score,
            mismatch_score,
            gap_open,
            gap_extend,
        })
    }

    /// Convenience constructor for the linear-gap model (`gap_extend`
    /// omitted by the caller, defaulting to `gap_open` per spec §3/§4.5).
    pub fn linear(match_score: i32, mismatch_score: i32, gap: i32) -> Self {
        Scoring::new(match_score, mismatch_score, gap, gap)
    }

    #[inline]
    pub(crate) fn match_score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

/// Boundary-condition tag constraining which DP layer a sub-alignment must
/// enter or leave through.
///
/// `Any` means free choice (maximum over layers); `None` means the
/// sub-alignment must start/end in the match layer `M`; `Right`/`Down` pin
/// it to the corresponding gap layer. Exhaustively matched everywhere in
/// this crate (no wildcard arm), so a fifth tag would be a compile error at
/// every call site rather than a silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    None,
    Right,
    Down,
    Any,
}

/// Tuning knobs that don't affect the result, only how it's computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentConfig {
    /// Above this many cells (`width * height`), [`crate::align`] splits
    /// with Hirschberg's recursion instead of delegating straight to the
    /// quadratic-space aligner. Named `Θ` in spec.md; matches the
    /// `width*height <= 1000000` literal in the original `FastNW` source.
    pub hirschberg_threshold: usize,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        AlignmentConfig {
            hirschberg_threshold: 1_000_000,
        }
    }
}
