//! Flattened coordinates: a single index in `0..=N²`, with N² marking a pass.

use super::error::{CoordError, CoordErrorKind, CoordResult};
use super::types::{BoardSize, Coord};
use tracing::instrument;

/// Converts a flattened index to a canonical coordinate.
#[instrument]
pub fn from_flat(flat: usize, size: BoardSize) -> CoordResult<Option<Coord>> {
    let n = size.get();
    if flat == size.pass_index() {
        return Ok(None);
    }
    if flat > size.pass_index() {
        return Err(CoordError::new(CoordErrorKind::IndexOutOfRange {
            index: flat,
            size: n,
        }));
    }
    Ok(Some(Coord::new(flat / n, flat % n)))
}

/// Converts a canonical coordinate to a flattened index.
#[instrument]
pub fn to_flat(coord: Option<Coord>, size: BoardSize) -> CoordResult<usize> {
    match coord {
        None => Ok(size.pass_index()),
        Some(coord) => {
            let coord = size.check(coord)?;
            Ok(size.get() * coord.row + coord.col)
        }
    }
}
