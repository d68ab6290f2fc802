//! SGF coordinates: two letters, column first, indexed from the upper-left.
//!
//! `aa` is the upper-left corner and the empty string is a pass.

use super::error::{CoordError, CoordErrorKind, CoordResult};
use super::types::{BoardSize, Coord, SGF_COLUMNS, alphabet_char, alphabet_index};
use tracing::{instrument, trace};

/// Converts an SGF coordinate to a canonical coordinate.
#[instrument]
pub fn from_sgf(sgf: &str, size: BoardSize) -> CoordResult<Option<Coord>> {
    if sgf.is_empty() {
        return Ok(None);
    }

    let mut chars = sgf.chars();
    let (Some(col), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(CoordError::new(CoordErrorKind::MalformedSgf(sgf.to_string())));
    };

    let lookup = |c: char| {
        alphabet_index(SGF_COLUMNS, c)
            .ok_or_else(|| CoordError::new(CoordErrorKind::MalformedSgf(sgf.to_string())))
    };
    let coord = Coord::new(lookup(row)?, lookup(col)?);
    trace!(%coord, "Decoded SGF coordinate");
    size.check(coord).map(Some)
}

/// Converts a canonical coordinate to an SGF coordinate.
#[instrument]
pub fn to_sgf(coord: Option<Coord>, size: BoardSize) -> CoordResult<String> {
    let Some(coord) = coord else {
        return Ok(String::new());
    };
    let coord = size.check(coord)?;

    // BoardSize caps N at the alphabet length, so both lookups succeed.
    let letter = |i: usize| {
        alphabet_char(SGF_COLUMNS, i)
            .ok_or_else(|| CoordError::new(CoordErrorKind::OffBoard(coord.to_string(), size.get())))
    };
    Ok([letter(coord.col)?, letter(coord.row)?].iter().collect())
}
