//! Generic conversion between any two coordinate formats.
//!
//! Every conversion pivots through the canonical form: decode the source
//! value to `Option<Coord>`, then encode into the target format.

use super::error::{CoordError, CoordErrorKind, CoordResult};
use super::flat::{from_flat, to_flat};
use super::gtp::{GtpVertex, from_gtp, to_gtp};
use super::kgs::{from_kgs, to_kgs};
use super::sgf::{from_sgf, to_sgf};
use super::types::{BoardSize, Coord, PASS_TEXT, parse_digits};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, instrument};

/// The coordinate formats understood by [`convert`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum CoordFormat {
    /// `(row, col)` from the upper-left, or a pass.
    Canonical,
    /// Row-major index with N² as pass.
    Flat,
    /// Two letters, column first, empty for pass.
    Sgf,
    /// Letter and row number from the bottom-left, or `pass`.
    Kgs,
    /// 1-based `(col, row)` from the bottom-left, or a sentinel.
    Gtp,
}

impl CoordFormat {
    /// Parses a format tag, reporting unknown tags as [`CoordErrorKind::UnknownFormat`].
    #[instrument]
    pub fn parse(tag: &str) -> CoordResult<Self> {
        CoordFormat::from_str(tag.trim())
            .map_err(|_| CoordError::new(CoordErrorKind::UnknownFormat(tag.to_string())))
    }
}

/// A coordinate tagged with the format it is expressed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "format", content = "value", rename_all = "lowercase")]
pub enum CoordValue {
    /// Canonical coordinate; `None` is a pass.
    Canonical(Option<Coord>),
    /// Flattened index.
    Flat(usize),
    /// SGF letters.
    Sgf(String),
    /// KGS text.
    Kgs(String),
    /// GTP vertex.
    Gtp(GtpVertex),
}

impl CoordValue {
    /// The format this value is expressed in.
    pub fn format(&self) -> CoordFormat {
        match self {
            CoordValue::Canonical(_) => CoordFormat::Canonical,
            CoordValue::Flat(_) => CoordFormat::Flat,
            CoordValue::Sgf(_) => CoordFormat::Sgf,
            CoordValue::Kgs(_) => CoordFormat::Kgs,
            CoordValue::Gtp(_) => CoordFormat::Gtp,
        }
    }

    /// Decodes this value to canonical form.
    #[instrument]
    pub fn to_canonical(&self, size: BoardSize) -> CoordResult<Option<Coord>> {
        match self {
            CoordValue::Canonical(coord) => coord.map(|c| size.check(c)).transpose(),
            CoordValue::Flat(flat) => from_flat(*flat, size),
            CoordValue::Sgf(sgf) => from_sgf(sgf, size),
            CoordValue::Kgs(kgs) => from_kgs(kgs, size),
            CoordValue::Gtp(vertex) => from_gtp(*vertex, size),
        }
    }

    /// Encodes a canonical coordinate into `format`.
    #[instrument]
    pub fn from_canonical(
        coord: Option<Coord>,
        format: CoordFormat,
        size: BoardSize,
    ) -> CoordResult<Self> {
        Ok(match format {
            CoordFormat::Canonical => {
                CoordValue::Canonical(coord.map(|c| size.check(c)).transpose()?)
            }
            CoordFormat::Flat => CoordValue::Flat(to_flat(coord, size)?),
            CoordFormat::Sgf => CoordValue::Sgf(to_sgf(coord, size)?),
            CoordFormat::Kgs => CoordValue::Kgs(to_kgs(coord, size)?),
            CoordFormat::Gtp => CoordValue::Gtp(to_gtp(coord, size)?),
        })
    }

    /// Parses the text form of a value in `format`.
    ///
    /// The text is only checked for shape here; board bounds are checked
    /// when the value is converted.
    #[instrument]
    pub fn parse(text: &str, format: CoordFormat) -> CoordResult<Self> {
        let text = text.trim();
        match format {
            CoordFormat::Canonical => parse_canonical(text).map(CoordValue::Canonical),
            CoordFormat::Flat => parse_digits(text)
                .map(CoordValue::Flat)
                .ok_or_else(|| CoordError::new(CoordErrorKind::MalformedFlat(text.to_string()))),
            CoordFormat::Sgf => Ok(CoordValue::Sgf(text.to_string())),
            CoordFormat::Kgs => Ok(CoordValue::Kgs(text.to_string())),
            CoordFormat::Gtp => text.parse().map(CoordValue::Gtp),
        }
    }
}

impl std::fmt::Display for CoordValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordValue::Canonical(None) => write!(f, "{}", PASS_TEXT),
            CoordValue::Canonical(Some(coord)) => write!(f, "{}", coord),
            CoordValue::Flat(flat) => write!(f, "{}", flat),
            CoordValue::Sgf(sgf) => write!(f, "{}", sgf),
            CoordValue::Kgs(kgs) => write!(f, "{}", kgs),
            CoordValue::Gtp(vertex) => write!(f, "{}", vertex),
        }
    }
}

fn parse_canonical(text: &str) -> CoordResult<Option<Coord>> {
    if text.eq_ignore_ascii_case(PASS_TEXT) {
        return Ok(None);
    }
    let malformed = || CoordError::new(CoordErrorKind::MalformedCanonical(text.to_string()));
    let inner = text
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(text);
    let (row, col) = inner.split_once(',').ok_or_else(malformed)?;
    let row = parse_digits(row.trim()).ok_or_else(malformed)?;
    let col = parse_digits(col.trim()).ok_or_else(malformed)?;
    Ok(Some(Coord::new(row, col)))
}

/// Converts `value` into the `to` format on a board of the given size.
///
/// Canonical to canonical returns the value unchanged once it is known to
/// lie on the board.
#[instrument]
pub fn convert(value: &CoordValue, to: CoordFormat, size: BoardSize) -> CoordResult<CoordValue> {
    let canonical = value.to_canonical(size)?;
    let converted = CoordValue::from_canonical(canonical, to, size)?;
    debug!(from = %value.format(), %to, %converted, "Converted coordinate");
    Ok(converted)
}

/// Parses `text` as a `from` value and converts it into the `to` format.
#[instrument]
pub fn convert_text(
    text: &str,
    from: CoordFormat,
    to: CoordFormat,
    size: BoardSize,
) -> CoordResult<CoordValue> {
    let value = CoordValue::parse(text, from)?;
    convert(&value, to, size)
}

/// Expresses one canonical coordinate in every format, in declaration order.
#[instrument]
pub fn all_formats(coord: Option<Coord>, size: BoardSize) -> CoordResult<Vec<CoordValue>> {
    <CoordFormat as strum::IntoEnumIterator>::iter()
        .map(|format| CoordValue::from_canonical(coord, format, size))
        .collect()
}
