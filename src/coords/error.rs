//! Coordinate error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Specific reason a coordinate could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CoordErrorKind {
    /// Board side length outside `1..=52`.
    #[display("Invalid board size {}: must be between 1 and {}", _0, _1)]
    InvalidBoardSize(usize, usize),

    /// Flattened index larger than N².
    #[display("Flat index {} out of range for {}x{} board", index, size, size)]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Board side length.
        size: usize,
    },

    /// A coordinate component lies outside the board.
    #[display("{} is off a {}x{} board", _0, _1, _1)]
    OffBoard(String, usize),

    /// Flat text that is not a non-negative integer.
    #[display("Malformed flat index: {:?}", _0)]
    MalformedFlat(String),

    /// SGF text that is neither empty nor two alphabet letters.
    #[display("Malformed SGF coordinate: {:?}", _0)]
    MalformedSgf(String),

    /// KGS text that is neither `pass` nor `<letter><row>`.
    #[display("Malformed KGS coordinate: {:?}", _0)]
    MalformedKgs(String),

    /// GTP vertex text that is neither a sentinel nor `col,row`.
    #[display("Malformed GTP vertex: {:?}", _0)]
    MalformedGtp(String),

    /// Canonical text that is neither `pass` nor `row,col`.
    #[display("Malformed canonical coordinate: {:?}", _0)]
    MalformedCanonical(String),

    /// Format tag that names none of the known formats.
    #[display("Unrecognized coordinate format: {:?}", _0)]
    UnknownFormat(String),
}

/// Coordinate conversion error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Coordinate error: {} at {}:{}", kind, file, line)]
pub struct CoordError {
    /// What went wrong.
    pub kind: CoordErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CoordError {
    /// Creates a new coordinate error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: CoordErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &CoordErrorKind {
        &self.kind
    }
}

impl From<CoordErrorKind> for CoordError {
    #[track_caller]
    fn from(kind: CoordErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result alias for coordinate conversions.
pub type CoordResult<T> = Result<T, CoordError>;
