//! Error types.

use thiserror::Error;

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, TableError>;

/// A phase table that does not partition the cycle.
///
/// These are configuration errors: the built-in table is checked once when
/// it is first used, and an invalid table aborts instead of being queried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("{names} phase names need {} boundaries, got {boundaries}", .names + 1)]
    LengthMismatch { names: usize, boundaries: usize },

    #[error("phase table is empty")]
    Empty,

    #[error("boundary {index} is not finite: {value}")]
    NotFinite { index: usize, value: f64 },

    #[error("first boundary must be 0, got {0}")]
    FirstBoundary(f64),

    #[error("last boundary must be the cycle length {cycle_length}, got {last}")]
    LastBoundary { last: f64, cycle_length: f64 },

    #[error("boundary {index} ({value}) does not follow {previous}")]
    NotAscending {
        index: usize,
        previous: f64,
        value: f64,
    },

    #[error("{glyphs} glyphs cannot cover {phases} phases")]
    GlyphShortfall { glyphs: usize, phases: usize },
}

/// The given text does not name a hemisphere.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hemisphere {0:?}, expected \"northern\" or \"southern\"")]
pub struct ParseHemisphereError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            "8 phase names need 9 boundaries, got 8",
            TableError::LengthMismatch {
                names: 8,
                boundaries: 8
            }
            .to_string()
        );
        assert_eq!(
            "unknown hemisphere \"east\", expected \"northern\" or \"southern\"",
            ParseHemisphereError("east".into()).to_string()
        );
    }
}
