//! Strictly Coords library - type-safe Go board coordinate conversion
//!
//! A single board location can be written five ways:
//!
//! - **Canonical**: `(row, col)` from the upper-left, `None` for a pass
//! - **Flat**: row-major index, N² for a pass
//! - **SGF**: two letters, column first, empty for a pass
//! - **KGS**: column letter (no `I`) and row from the bottom, `pass`
//! - **GTP**: 1-based `(col, row)` from the bottom-left, pass/resign sentinels
//!
//! Every function takes the [`BoardSize`] explicitly.
//!
//! # Example
//!
//! ```
//! use strictly_coords::{BoardSize, CoordFormat, CoordValue, convert};
//!
//! # fn example() -> Result<(), strictly_coords::CoordError> {
//! let size = BoardSize::STANDARD;
//! let sgf = convert(&CoordValue::Kgs("A19".to_string()), CoordFormat::Sgf, size)?;
//! assert_eq!(sgf, CoordValue::Sgf("aa".to_string()));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod coords;

// Crate-level exports - Configuration
pub use config::{BOARD_SIZE_ENV, ConfigError, ConfigErrorKind, ConverterConfig};

// Crate-level exports - Coordinate types and conversions
pub use coords::{
    BoardSize, Coord, CoordError, CoordErrorKind, CoordFormat, CoordResult, CoordValue, GtpVertex,
    KGS_COLUMNS, PASS_TEXT, SGF_COLUMNS, all_formats, convert, convert_text, from_flat, from_gtp,
    from_kgs, from_sgf, to_flat, to_gtp, to_kgs, to_sgf,
};
