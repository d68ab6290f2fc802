//! GTP vertices: `(column, row)` tuples indexed from (1, 1) at the bottom-left.
//!
//! The protocol has two non-cell sentinels, pass and resign. Both decode to
//! a canonical pass, so a resign cannot survive a round trip.

use super::error::{CoordError, CoordErrorKind, CoordResult};
use super::types::{BoardSize, Coord, parse_digits};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// A vertex as exchanged with a GTP engine or controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GtpVertex {
    /// A board point, 1-based from the bottom-left.
    Point {
        /// Column, 1 at the left edge.
        col: usize,
        /// Row, 1 at the bottom edge.
        row: usize,
    },
    /// The pass sentinel.
    Pass,
    /// The resign sentinel.
    Resign,
}

impl GtpVertex {
    /// Creates a point vertex.
    pub fn point(col: usize, row: usize) -> Self {
        GtpVertex::Point { col, row }
    }

    /// Whether this vertex is one of the two sentinels.
    pub fn is_sentinel(self) -> bool {
        !matches!(self, GtpVertex::Point { .. })
    }
}

impl std::fmt::Display for GtpVertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GtpVertex::Point { col, row } => write!(f, "({}, {})", col, row),
            GtpVertex::Pass => write!(f, "pass"),
            GtpVertex::Resign => write!(f, "resign"),
        }
    }
}

impl FromStr for GtpVertex {
    type Err = CoordError;

    /// Parses `pass`, `resign`, or `col,row` with optional parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("pass") {
            return Ok(GtpVertex::Pass);
        }
        if trimmed.eq_ignore_ascii_case("resign") {
            return Ok(GtpVertex::Resign);
        }

        let malformed = || CoordError::new(CoordErrorKind::MalformedGtp(s.to_string()));
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        let (col, row) = inner.split_once(',').ok_or_else(malformed)?;
        let col = parse_digits(col.trim()).ok_or_else(malformed)?;
        let row = parse_digits(row.trim()).ok_or_else(malformed)?;
        Ok(GtpVertex::point(col, row))
    }
}

/// Converts a GTP vertex to a canonical coordinate.
///
/// Both sentinels map to a pass.
#[instrument]
pub fn from_gtp(vertex: GtpVertex, size: BoardSize) -> CoordResult<Option<Coord>> {
    let (col, row) = match vertex {
        GtpVertex::Pass => return Ok(None),
        GtpVertex::Resign => {
            debug!("Resign collapsed to pass");
            return Ok(None);
        }
        GtpVertex::Point { col, row } => (col, row),
    };

    let n = size.get();
    if col == 0 || row == 0 || col > n || row > n {
        return Err(CoordError::new(CoordErrorKind::OffBoard(vertex.to_string(), n)));
    }
    Ok(Some(Coord::new(n - row, col - 1)))
}

/// Converts a canonical coordinate to a GTP vertex.
///
/// A pass always becomes [`GtpVertex::Pass`], never [`GtpVertex::Resign`].
#[instrument]
pub fn to_gtp(coord: Option<Coord>, size: BoardSize) -> CoordResult<GtpVertex> {
    let Some(coord) = coord else {
        return Ok(GtpVertex::Pass);
    };
    let coord = size.check(coord)?;
    Ok(GtpVertex::point(coord.col + 1, size.get() - coord.row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_19() {
        let size = BoardSize::STANDARD;
        assert_eq!(to_gtp(Some(Coord::new(0, 0)), size).unwrap(), GtpVertex::point(1, 19));
        assert_eq!(to_gtp(Some(Coord::new(0, 18)), size).unwrap(), GtpVertex::point(19, 19));
        assert_eq!(from_gtp(GtpVertex::point(1, 1), size).unwrap(), Some(Coord::new(18, 0)));
    }

    #[test]
    fn test_sentinels_collapse_to_pass() {
        let size = BoardSize::STANDARD;
        assert_eq!(from_gtp(GtpVertex::Pass, size).unwrap(), None);
        assert_eq!(from_gtp(GtpVertex::Resign, size).unwrap(), None);
        assert_eq!(to_gtp(None, size).unwrap(), GtpVertex::Pass);
    }

    #[test]
    fn test_rejects_zero_and_overflow() {
        let size = BoardSize::new(9).unwrap();
        assert!(from_gtp(GtpVertex::point(0, 1), size).is_err());
        assert!(from_gtp(GtpVertex::point(1, 10), size).is_err());
    }

    #[test]
    fn test_parse_text() {
        assert_eq!("(3, 4)".parse::<GtpVertex>().unwrap(), GtpVertex::point(3, 4));
        assert_eq!("3,4".parse::<GtpVertex>().unwrap(), GtpVertex::point(3, 4));
        assert_eq!("Resign".parse::<GtpVertex>().unwrap(), GtpVertex::Resign);
        assert!("3;4".parse::<GtpVertex>().is_err());
        assert!("D4".parse::<GtpVertex>().is_err());
        assert!("+3,+4".parse::<GtpVertex>().is_err());
        assert!("(3, -4)".parse::<GtpVertex>().is_err());
    }
}
