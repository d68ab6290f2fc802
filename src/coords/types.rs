//! Core coordinate types shared by every format.

use super::error::{CoordError, CoordErrorKind, CoordResult};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// SGF column/row alphabet. Lowercase first, then uppercase for boards past 26.
pub const SGF_COLUMNS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// KGS column letters. `I` is skipped so it is never mistaken for `l`.
pub const KGS_COLUMNS: &str = "ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Literal used for a pass in the KGS and canonical text forms.
pub const PASS_TEXT: &str = "pass";

/// Side length of a square Go board.
///
/// Every conversion takes the board size explicitly; nothing reads it
/// from shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Largest side length any format can address (the SGF alphabet length).
    pub const MAX: usize = 52;

    /// The standard 19x19 board.
    pub const STANDARD: BoardSize = BoardSize(19);

    /// Creates a board size, rejecting zero and anything above [`BoardSize::MAX`].
    #[instrument]
    pub fn new(n: usize) -> CoordResult<Self> {
        if n == 0 || n > Self::MAX {
            return Err(CoordError::new(CoordErrorKind::InvalidBoardSize(
                n,
                Self::MAX,
            )));
        }
        Ok(Self(n))
    }

    /// Side length N.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of cells on the board (N²).
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }

    /// Flat index reserved for a pass (also N²).
    pub fn pass_index(self) -> usize {
        self.cell_count()
    }

    /// Whether `coord` lies on this board.
    pub fn contains(self, coord: Coord) -> bool {
        coord.row < self.0 && coord.col < self.0
    }

    /// Returns `coord` unchanged if it lies on this board.
    #[track_caller]
    pub fn check(self, coord: Coord) -> CoordResult<Coord> {
        if self.contains(coord) {
            Ok(coord)
        } else {
            Err(CoordError::new(CoordErrorKind::OffBoard(
                coord.to_string(),
                self.0,
            )))
        }
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Coord> {
        let n = self.0;
        (0..n).flat_map(move |row| (0..n).map(move |col| Coord::new(row, col)))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = CoordError;

    #[track_caller]
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// A cell on the board, indexed from (0, 0) at the upper-left.
///
/// The canonical form of a move is `Option<Coord>`; `None` is a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct Coord {
    /// Row, counted down from the top.
    pub row: usize,
    /// Column, counted right from the left edge.
    pub col: usize,
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses an unsigned decimal number made only of ASCII digits.
///
/// Unlike `usize::from_str`, a leading `+` is rejected.
pub(crate) fn parse_digits(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Looks up the character at `index` in an ASCII alphabet.
pub(crate) fn alphabet_char(alphabet: &str, index: usize) -> Option<char> {
    alphabet.as_bytes().get(index).map(|&b| char::from(b))
}

/// Finds the index of `c` in an ASCII alphabet.
pub(crate) fn alphabet_index(alphabet: &str, c: char) -> Option<usize> {
    alphabet.chars().position(|a| a == c)
}
