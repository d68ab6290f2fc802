//! KGS coordinates: human-readable `<letter><row>` indexed from the bottom-left.
//!
//! Columns use [`KGS_COLUMNS`], which skips `I`. Rows count up from 1 at the
//! bottom edge, so canonical row 0 is KGS row N.

use super::error::{CoordError, CoordErrorKind, CoordResult};
use super::types::{
    BoardSize, Coord, KGS_COLUMNS, PASS_TEXT, alphabet_char, alphabet_index, parse_digits,
};
use tracing::{instrument, trace};

/// Converts a KGS coordinate to a canonical coordinate.
///
/// Letters are matched case-insensitively, as is the `pass` literal.
#[instrument]
pub fn from_kgs(kgs: &str, size: BoardSize) -> CoordResult<Option<Coord>> {
    let kgs = kgs.trim();
    if kgs.eq_ignore_ascii_case(PASS_TEXT) {
        return Ok(None);
    }

    let malformed = || CoordError::new(CoordErrorKind::MalformedKgs(kgs.to_string()));

    let mut chars = kgs.chars();
    let letter = chars.next().ok_or_else(malformed)?.to_ascii_uppercase();
    let col = alphabet_index(KGS_COLUMNS, letter).ok_or_else(malformed)?;
    // Row numbers have a single spelling: no sign, no leading zero.
    let digits = chars.as_str();
    if digits.starts_with('0') && digits != "0" {
        return Err(malformed());
    }
    let row_from_bottom = parse_digits(digits).ok_or_else(malformed)?;

    let n = size.get();
    if row_from_bottom == 0 || row_from_bottom > n || col >= n {
        return Err(CoordError::new(CoordErrorKind::OffBoard(kgs.to_string(), n)));
    }

    let coord = Coord::new(n - row_from_bottom, col);
    trace!(%coord, "Decoded KGS coordinate");
    Ok(Some(coord))
}

/// Converts a canonical coordinate to a KGS coordinate.
///
/// Fails for columns past the 25th, which have no KGS letter.
#[instrument]
pub fn to_kgs(coord: Option<Coord>, size: BoardSize) -> CoordResult<String> {
    let Some(coord) = coord else {
        return Ok(PASS_TEXT.to_string());
    };
    let coord = size.check(coord)?;
    let letter = alphabet_char(KGS_COLUMNS, coord.col)
        .ok_or_else(|| CoordError::new(CoordErrorKind::OffBoard(coord.to_string(), size.get())))?;
    Ok(format!("{}{}", letter, size.get() - coord.row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_19() {
        let size = BoardSize::STANDARD;
        assert_eq!(to_kgs(Some(Coord::new(0, 0)), size).unwrap(), "A19");
        assert_eq!(to_kgs(Some(Coord::new(0, 18)), size).unwrap(), "T19");
        assert_eq!(to_kgs(Some(Coord::new(18, 0)), size).unwrap(), "A1");
        assert_eq!(from_kgs("T19", size).unwrap(), Some(Coord::new(0, 18)));
    }

    #[test]
    fn test_skips_i() {
        let size = BoardSize::STANDARD;
        assert_eq!(from_kgs("J10", size).unwrap(), Some(Coord::new(9, 8)));
        assert!(from_kgs("I10", size).is_err());
    }

    #[test]
    fn test_case_insensitive() {
        let size = BoardSize::STANDARD;
        assert_eq!(from_kgs("d4", size).unwrap(), from_kgs("D4", size).unwrap());
        assert_eq!(from_kgs("PASS", size).unwrap(), None);
    }

    #[test]
    fn test_rejects_bad_rows() {
        let size = BoardSize::STANDARD;
        assert!(from_kgs("A0", size).is_err());
        assert!(from_kgs("A20", size).is_err());
        assert!(from_kgs("A", size).is_err());
        assert!(from_kgs("A-1", size).is_err());
        assert!(from_kgs("", size).is_err());
        assert!(from_kgs("A+4", size).is_err());
    }

    #[test]
    fn test_rejects_leading_zero_row() {
        let size = BoardSize::STANDARD;
        assert!(from_kgs("A019", size).is_err());
        assert!(from_kgs("D04", size).is_err());
        assert_eq!(from_kgs("A19", size).unwrap(), Some(Coord::new(0, 0)));
    }

    #[test]
    fn test_wide_board_has_no_letter_past_z() {
        let size = BoardSize::new(26).unwrap();
        assert_eq!(to_kgs(Some(Coord::new(0, 24)), size).unwrap(), "Z26");
        assert!(to_kgs(Some(Coord::new(0, 25)), size).is_err());
    }
}
